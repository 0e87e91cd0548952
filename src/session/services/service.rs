//! Login, logout, and the authentication gate.

use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::api::ApiError;
use crate::session::{
    domain::{Credentials, SessionContext, SessionDomainError, SignedIn, StoredSession},
    ports::{AuthGateway, SessionStore, SessionStoreError},
};

/// Service-level errors for session operations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The server rejected the username or password.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Login failed for a reason other than bad credentials.
    #[error("login failed: {0}")]
    LoginFailed(#[source] ApiError),

    /// Nobody is signed in.
    #[error("not signed in; run `tablero login` first")]
    NotAuthenticated,

    /// The signed-in user is not an administrator.
    #[error("administrator role required")]
    Forbidden,

    /// The session record could not be read or written.
    #[error(transparent)]
    Store(#[from] SessionStoreError),

    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] SessionDomainError),
}

/// Result type for session service operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Manages the single signed-in user record.
#[derive(Clone)]
pub struct SessionService<S, A, C>
where
    S: SessionStore,
    A: AuthGateway,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    auth: Arc<A>,
    clock: Arc<C>,
}

impl<S, A, C> SessionService<S, A, C>
where
    S: SessionStore,
    A: AuthGateway,
    C: Clock + Send + Sync,
{
    /// Creates a new session service.
    #[must_use]
    pub const fn new(store: Arc<S>, auth: Arc<A>, clock: Arc<C>) -> Self {
        Self { store, auth, clock }
    }

    /// Authenticates and persists the returned user as the current session.
    ///
    /// A previous session is replaced. The server's login message is passed
    /// back for display and not stored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidCredentials`] on HTTP 401,
    /// [`SessionError::LoginFailed`] on any other API failure, and
    /// [`SessionError::Store`] when the session cannot be saved.
    pub async fn login(&self, credentials: &Credentials) -> SessionResult<SignedIn> {
        let response = self.auth.login(credentials).await.map_err(|err| {
            if err.is_unauthorized() {
                warn!(username = credentials.username(), "login rejected");
                SessionError::InvalidCredentials
            } else {
                error!(username = credentials.username(), error = %err, "login failed");
                SessionError::LoginFailed(err)
            }
        })?;

        let session = StoredSession {
            user: response.user,
            signed_in_at: self.clock.utc(),
        };
        self.store.save(&session).await?;
        info!(
            user_id = %session.user.user_id,
            role = %session.user.role,
            "signed in"
        );
        Ok(SignedIn {
            session,
            message: response.message,
        })
    }

    /// Clears the current session. Signing out twice is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the record cannot be removed.
    pub async fn logout(&self) -> SessionResult<()> {
        self.store.clear().await?;
        info!("signed out");
        Ok(())
    }

    /// Returns the stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] when the record cannot be read.
    pub async fn current(&self) -> SessionResult<Option<StoredSession>> {
        Ok(self.store.load().await?)
    }

    /// Returns the acting principal, failing when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] without a stored session.
    pub async fn require(&self) -> SessionResult<SessionContext> {
        let Some(session) = self.current().await? else {
            debug!("no stored session");
            return Err(SessionError::NotAuthenticated);
        };
        Ok(SessionContext::from(&session.user))
    }

    /// Returns the acting principal when it is an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] without a stored session
    /// and [`SessionError::Forbidden`] for non-administrators.
    pub async fn require_admin(&self) -> SessionResult<SessionContext> {
        let context = self.require().await?;
        if !context.is_admin() {
            warn!(user_id = %context.user_id(), "administrator role required");
            return Err(SessionError::Forbidden);
        }
        Ok(context)
    }
}
