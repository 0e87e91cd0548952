//! Principal handed to services acting on behalf of the signed-in user.

use super::CurrentUser;
use crate::board::domain::{Role, UserId};

/// Identity and role of the acting user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    user_id: UserId,
    name: String,
    role: Role,
}

impl SessionContext {
    /// Creates a context for the given user.
    #[must_use]
    pub fn new(user_id: UserId, name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            name: name.into(),
            role,
        }
    }

    /// Returns the acting user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the acting user's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the acting user's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns `true` for administrators.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&CurrentUser> for SessionContext {
    fn from(user: &CurrentUser) -> Self {
        Self::new(user.user_id, user.name.clone(), user.role)
    }
}
