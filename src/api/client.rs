//! HTTP client for the project-management API.

use reqwest::{Client, Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use super::{ApiError, ApiResult, check_status};
use crate::config::ClientConfig;

/// API client shared by every HTTP adapter.
///
/// Cloning is cheap: the underlying connection pool is reference counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new API client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::transport)?;

        Ok(Self {
            client,
            base_url: config.api_url().to_owned(),
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds an absolute URL for an endpoint path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = send(self.request(Method::GET, path)).await?;
        decode_body(&body)
    }

    pub(crate) async fn post<B, T>(&self, path: &str, payload: &B) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let body = send(self.request(Method::POST, path).json(payload)).await?;
        decode_body(&body)
    }

    pub(crate) async fn post_json<B>(&self, path: &str, payload: &B) -> ApiResult<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        send(self.request(Method::POST, path).json(payload))
            .await
            .map(drop)
    }

    pub(crate) async fn post_empty(&self, path: &str) -> ApiResult<()> {
        send(self.request(Method::POST, path)).await.map(drop)
    }

    pub(crate) async fn put<B>(&self, path: &str, payload: &B) -> ApiResult<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        send(self.request(Method::PUT, path).json(payload))
            .await
            .map(drop)
    }

    pub(crate) async fn put_empty(&self, path: &str) -> ApiResult<()> {
        send(self.request(Method::PUT, path)).await.map(drop)
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        send(self.request(Method::DELETE, path)).await.map(drop)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "sending API request");
        self.client.request(method, self.url(path))
    }
}

async fn send(request: RequestBuilder) -> ApiResult<Vec<u8>> {
    let response = request.send().await.map_err(ApiError::transport)?;
    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(ApiError::transport)?;
    check_status(status, || String::from_utf8_lossy(&body).into_owned())?;
    Ok(body.to_vec())
}

/// Decodes a JSON response body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is not valid JSON for `T`.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(ApiError::decode)
}

#[cfg(test)]
mod tests {
    use super::{ApiClient, decode_body};
    use crate::api::{ApiError, check_status};
    use crate::config::ClientConfig;
    use rstest::rstest;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct Created {
        task_id: u64,
    }

    #[rstest]
    fn url_joins_base_and_path() {
        let client = ApiClient::new(&ClientConfig::new("http://localhost:4000/"))
            .expect("client should build");
        assert_eq!(client.base_url(), "http://localhost:4000");
        assert_eq!(
            client.url("/api/task-states"),
            "http://localhost:4000/api/task-states"
        );
    }

    #[rstest]
    #[case(200)]
    #[case(201)]
    #[case(204)]
    fn success_statuses_pass(#[case] status: u16) {
        assert!(check_status(status, String::new).is_ok());
    }

    #[rstest]
    fn unauthorized_is_classified() {
        let result = check_status(401, || "nope".to_owned());
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[rstest]
    #[case(404)]
    #[case(500)]
    fn other_failures_keep_status_and_body(#[case] status: u16) {
        let result = check_status(status, || "boom".to_owned());
        let Err(ApiError::Status { status: code, body }) = result else {
            panic!("expected status error, got {result:?}");
        };
        assert_eq!(code, status);
        assert_eq!(body, "boom");
    }

    #[rstest]
    fn decode_reads_json_and_ignores_extra_fields() {
        let created: Created =
            decode_body(br#"{"task_id": 7, "task_title": "x"}"#).expect("valid body");
        assert_eq!(created, Created { task_id: 7 });
    }

    #[rstest]
    fn decode_reports_malformed_bodies() {
        let result: Result<Created, _> = decode_body(b"<html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
