//! The signed-in user record.

use crate::board::domain::{Role, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Account identifier.
    pub user_id: UserId,
    /// Full display name.
    #[serde(default)]
    pub name: String,
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Account role.
    #[serde(default)]
    pub role: Role,
}

/// Response body of the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Human-readable server message.
    #[serde(default)]
    pub message: Option<String>,
    /// The authenticated user.
    pub user: CurrentUser,
}

/// The durable session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// The signed-in user.
    pub user: CurrentUser,
    /// When the client recorded the login.
    pub signed_in_at: DateTime<Utc>,
}

/// Outcome of a successful login: the stored session plus the server's
/// greeting, when it sent one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedIn {
    /// The session that was persisted.
    #[serde(flatten)]
    pub session: StoredSession,
    /// Human-readable server message.
    pub message: Option<String>,
}
