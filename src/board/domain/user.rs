//! User accounts and roles.

use super::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a user account.
///
/// Only the administrative role is distinguished. Every other value the
/// server sends, `null` included, is treated as an ordinary member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Role {
    /// Sees every task and may manage projects, epics and users.
    Admin,
    /// Sees only the tasks assigned to them.
    #[default]
    Member,
}

impl Role {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Member => "USER",
        }
    }

    /// Returns `true` for the administrative role.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        if value.trim() == "ADMIN" {
            Self::Admin
        } else {
            Self::Member
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Option<String>> for Role {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Member, Self::from)
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account as listed by the users endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub user_id: UserId,
    /// Login name, also the label shown on board cards.
    pub username: String,
    /// Full display name.
    #[serde(default)]
    pub name: String,
    /// Contact address.
    #[serde(default)]
    pub email: Option<String>,
    /// Account role.
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Creates a member account record.
    #[must_use]
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        let login = username.into();
        Self {
            user_id,
            name: login.clone(),
            username: login,
            email: None,
            role: Role::Member,
        }
    }

    /// Sets the account role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}
