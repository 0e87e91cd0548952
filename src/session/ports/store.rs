//! Storage port for the single durable session record.

use crate::session::domain::StoredSession;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Durable holder of the current-user record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the stored session.
    ///
    /// Returns `None` when nobody is signed in.
    async fn load(&self) -> SessionStoreResult<Option<StoredSession>>;

    /// Replaces the stored session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Io`] when the record cannot be written.
    async fn save(&self, session: &StoredSession) -> SessionStoreResult<()>;

    /// Removes the stored session. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Io`] when the record cannot be removed.
    async fn clear(&self) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Reading or writing the record failed.
    #[error("session storage error: {0}")]
    Io(Arc<std::io::Error>),

    /// The stored record could not be decoded.
    #[error("stored session is corrupt: {0}")]
    Corrupt(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }

    /// Wraps a decoding error.
    pub fn corrupt(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Corrupt(Arc::new(err))
    }
}
