//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned by board domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// A drop target names a column with no known task state.
    #[error("no task state identifier found for column '{0}'")]
    UnmappedState(String),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyTaskDescription,
}

/// Error returned while parsing a numeric identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {kind} identifier: {value}")]
pub struct ParseIdError {
    /// Entity the identifier refers to.
    pub kind: &'static str,
    /// Rejected input.
    pub value: String,
}

/// Error returned while parsing a due date.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid due date '{0}', expected YYYY-MM-DD or an RFC 3339 timestamp")]
pub struct ParseDueDateError(pub String);
