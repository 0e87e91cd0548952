//! [`AuthGateway`] over the REST API.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, paths};
use crate::session::{
    domain::{Credentials, LoginResponse},
    ports::AuthGateway,
};

#[async_trait]
impl AuthGateway for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        self.post(paths::LOGIN, credentials).await
    }
}
