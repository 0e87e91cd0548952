//! Error types for catalog input validation.

use thiserror::Error;

/// Errors returned while building catalog write payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The epic name is empty after trimming.
    #[error("epic name must not be empty")]
    EmptyEpicName,

    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The display name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

pub(super) fn required(
    value: impl Into<String>,
    error: CatalogDomainError,
) -> Result<String, CatalogDomainError> {
    let trimmed = value.into().trim().to_owned();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed)
}
