//! Command implementations.

pub mod board;
pub mod catalog;
pub mod session;
pub mod task;
