//! Client configuration shared by the HTTP adapters and the CLI.

use camino::Utf8PathBuf;
use std::time::Duration;

/// Default API base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Directory name used under the platform configuration directory.
const APP_DIR: &str = "tablero";

/// Connection and storage settings for a Tablero client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
    timeout: Duration,
    session_dir: Utf8PathBuf,
}

impl ClientConfig {
    /// Creates a configuration for the given API base URL with default
    /// timeout and session directory.
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_base_url(api_url.into()),
            timeout: DEFAULT_TIMEOUT,
            session_dir: default_session_dir(),
        }
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the directory holding the session record.
    #[must_use]
    pub fn with_session_dir(mut self, session_dir: impl Into<Utf8PathBuf>) -> Self {
        self.session_dir = session_dir.into();
        self
    }

    /// Returns the API base URL without a trailing slash.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the directory holding the session record.
    #[must_use]
    pub fn session_dir(&self) -> &camino::Utf8Path {
        &self.session_dir
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn normalize_base_url(raw: String) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Returns `<platform config dir>/tablero`, falling back to `.tablero` in the
/// working directory when the platform directory is unknown or not UTF-8.
#[must_use]
pub fn default_session_dir() -> Utf8PathBuf {
    dirs::config_dir()
        .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok())
        .map_or_else(|| Utf8PathBuf::from(".tablero"), |dir| dir.join(APP_DIR))
}
