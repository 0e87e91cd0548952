//! Validated write payloads for epics and users.

use super::{CatalogDomainError, ProjectId, Role, error::required};
use serde::Serialize;
use std::fmt;

/// Editable epic fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpicFields {
    epic_name: String,
    epic_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<ProjectId>,
}

impl EpicFields {
    /// Creates epic fields. The description may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyEpicName`] for a blank name.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, CatalogDomainError> {
        Ok(Self {
            epic_name: required(name, CatalogDomainError::EmptyEpicName)?,
            epic_description: description.into().trim().to_owned(),
            project_id: None,
        })
    }

    /// Moves the epic to another project on update.
    #[must_use]
    pub const fn with_project(mut self, project_id: Option<ProjectId>) -> Self {
        self.project_id = project_id;
        self
    }

    /// Returns the epic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.epic_name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.epic_description
    }

    /// Returns the target project, if one was set.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }
}

/// Registration payload for a new account.
///
/// The server expects the plain password under `password_hash` and hashes
/// it itself.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    username: String,
    name: String,
    email: String,
    role: Role,
    #[serde(rename = "password_hash")]
    password: String,
}

impl NewUser {
    /// Creates a member registration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError`] when the username, name, or password
    /// is blank.
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CatalogDomainError> {
        let secret = password.into();
        if secret.is_empty() {
            return Err(CatalogDomainError::EmptyPassword);
        }
        Ok(Self {
            username: required(username, CatalogDomainError::EmptyUsername)?,
            name: required(name, CatalogDomainError::EmptyName)?,
            email: String::new(),
            role: Role::Member,
            password: secret,
        })
    }

    /// Sets the contact address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into().trim().to_owned();
        self
    }

    /// Sets the account role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the account role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account changes sent on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    username: String,
    name: String,
    email: Option<String>,
    role: Role,
}

impl UserUpdate {
    /// Creates an update for a member account.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError`] when the username or name is blank.
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, CatalogDomainError> {
        Ok(Self {
            username: required(username, CatalogDomainError::EmptyUsername)?,
            name: required(name, CatalogDomainError::EmptyName)?,
            email: None,
            role: Role::Member,
        })
    }

    /// Sets or clears the contact address.
    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Sets the account role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact address.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the account role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}
