//! Port contracts for session persistence and authentication.

pub mod auth;
pub mod store;

pub use auth::AuthGateway;
#[cfg(test)]
pub use auth::MockAuthGateway;
pub use store::{SessionStore, SessionStoreError, SessionStoreResult};
