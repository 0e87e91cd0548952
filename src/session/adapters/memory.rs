//! In-memory session store for tests and ephemeral use.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::session::{
    domain::StoredSession,
    ports::{SessionStore, SessionStoreResult},
};

/// Thread-safe in-memory session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    session: Arc<RwLock<Option<StoredSession>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `session`.
    #[must_use]
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            session: Arc::new(RwLock::new(Some(session))),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> SessionStoreResult<Option<StoredSession>> {
        Ok(self
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn save(&self, session: &StoredSession) -> SessionStoreResult<()> {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> SessionStoreResult<()> {
        self.session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(())
    }
}
