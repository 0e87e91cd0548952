//! Error types for session domain validation.

use thiserror::Error;

/// Errors returned while constructing session values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,
}
