//! Login credentials.

use super::SessionDomainError;
use serde::Serialize;
use std::fmt;

/// Username and password submitted to the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates validated credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::EmptyUsername`] or
    /// [`SessionDomainError::EmptyPassword`] when a field is blank.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, SessionDomainError> {
        let login = username.into().trim().to_owned();
        if login.is_empty() {
            return Err(SessionDomainError::EmptyUsername);
        }
        let secret = password.into();
        if secret.is_empty() {
            return Err(SessionDomainError::EmptyPassword);
        }
        Ok(Self {
            username: login,
            password: secret,
        })
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password as typed.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
