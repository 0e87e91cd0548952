//! Port contracts for the task board.
//!
//! Ports define transport-agnostic interfaces used by board services.

pub mod api;

pub use api::BoardApi;
#[cfg(test)]
pub use api::MockBoardApi;
