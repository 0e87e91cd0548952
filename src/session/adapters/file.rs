//! Session record persisted as a JSON file.

use std::io::ErrorKind;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use crate::session::{
    domain::StoredSession,
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

const SESSION_FILE: &str = "session.json";

/// Stores the session as `session.json` inside one directory.
///
/// All file access goes through a capability handle on that directory, so
/// the store cannot touch anything outside it. Filesystem calls run on the
/// blocking thread pool.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    root: Utf8PathBuf,
}

impl FileSessionStore {
    /// Creates a store rooted at `root`. The directory is created on first
    /// save.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory holding the session file.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    async fn run_blocking<F, T>(&self, f: F) -> SessionStoreResult<T>
    where
        F: FnOnce(&Utf8Path) -> SessionStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || f(&root))
            .await
            .map_err(|err| SessionStoreError::io(std::io::Error::other(err)))?
    }
}

fn open(root: &Utf8Path) -> Result<Option<Dir>, std::io::Error> {
    match Dir::open_ambient_dir(root, ambient_authority()) {
        Ok(dir) => Ok(Some(dir)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

fn open_or_create(root: &Utf8Path) -> Result<Dir, std::io::Error> {
    Dir::create_ambient_dir_all(root, ambient_authority())?;
    Dir::open_ambient_dir(root, ambient_authority())
}

fn read_session(root: &Utf8Path) -> SessionStoreResult<Option<StoredSession>> {
    let Some(dir) = open(root).map_err(SessionStoreError::io)? else {
        return Ok(None);
    };
    let contents = match dir.read_to_string(SESSION_FILE) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(SessionStoreError::io(err)),
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(SessionStoreError::corrupt)
}

fn write_session(root: &Utf8Path, contents: &str) -> SessionStoreResult<()> {
    open_or_create(root)
        .and_then(|dir| dir.write(SESSION_FILE, contents))
        .map_err(SessionStoreError::io)
}

fn remove_session(root: &Utf8Path) -> SessionStoreResult<()> {
    let Some(dir) = open(root).map_err(SessionStoreError::io)? else {
        return Ok(());
    };
    match dir.remove_file(SESSION_FILE) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(SessionStoreError::io(err)),
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> SessionStoreResult<Option<StoredSession>> {
        self.run_blocking(read_session).await
    }

    async fn save(&self, session: &StoredSession) -> SessionStoreResult<()> {
        let contents =
            serde_json::to_string_pretty(session).map_err(SessionStoreError::corrupt)?;
        self.run_blocking(move |root| write_session(root, &contents))
            .await?;
        debug!(root = %self.root(), "session saved");
        Ok(())
    }

    async fn clear(&self) -> SessionStoreResult<()> {
        self.run_blocking(remove_session).await?;
        debug!(root = %self.root(), "session cleared");
        Ok(())
    }
}
