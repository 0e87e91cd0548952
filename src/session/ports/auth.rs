//! Authentication port.

use crate::api::ApiResult;
use crate::session::domain::{Credentials, LoginResponse};
use async_trait::async_trait;

/// Exchanges credentials for the authenticated user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Authenticates with the server.
    ///
    /// Rejected credentials surface as [`crate::api::ApiError::Unauthorized`].
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse>;
}
