//! Wiring of adapters and services for one CLI invocation.

use std::sync::Arc;

use anyhow::Result;
use mockable::DefaultClock;

use super::OutputFormat;
use crate::api::ApiClient;
use crate::board::{domain::ProjectId, services::BoardService};
use crate::catalog::services::CatalogService;
use crate::config::ClientConfig;
use crate::session::{
    adapters::file::FileSessionStore, domain::SessionContext, services::SessionService,
};

/// Services available to commands.
#[derive(Debug, Clone)]
pub struct AppContext {
    client: Arc<ApiClient>,
    config: ClientConfig,
    format: OutputFormat,
}

impl AppContext {
    /// Builds the API client for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig, format: OutputFormat) -> Result<Self> {
        let client = Arc::new(ApiClient::new(&config)?);
        Ok(Self {
            client,
            config,
            format,
        })
    }

    /// Returns the selected output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the session service backed by the session directory.
    #[must_use]
    pub fn session(&self) -> SessionService<FileSessionStore, ApiClient, DefaultClock> {
        SessionService::new(
            Arc::new(FileSessionStore::new(self.config.session_dir().to_path_buf())),
            Arc::clone(&self.client),
            Arc::new(DefaultClock),
        )
    }

    /// Returns the signed-in principal.
    ///
    /// # Errors
    ///
    /// Returns an error when nobody is signed in.
    pub async fn viewer(&self) -> Result<SessionContext> {
        Ok(self.session().require().await?)
    }

    /// Returns the board of `project` seen by `viewer`.
    #[must_use]
    pub fn board(&self, project: ProjectId, viewer: SessionContext) -> BoardService<ApiClient> {
        BoardService::new(Arc::clone(&self.client), project, viewer)
    }

    /// Returns the catalog acting as `viewer`.
    #[must_use]
    pub fn catalog(&self, viewer: SessionContext) -> CatalogService<ApiClient> {
        CatalogService::new(Arc::clone(&self.client), viewer)
    }
}
