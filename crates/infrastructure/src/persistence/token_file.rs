//! File-backed token storage.
//!
//! The session token is the only durable state of the client; it lives in
//! a single plain-text file under the platform config directory, e.g.
//! `~/.config/camphub/auth_token` on Linux.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use camphub_application::ports::{StorageError, TokenStorage};
use camphub_domain::AuthToken;
use tracing::debug;

/// `TokenStorage` adapter backed by one file.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    /// Creates storage at an explicit path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates storage at the platform default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform exposes no config directory.
    pub fn from_default_location() -> Result<Self, StorageError> {
        let base = dirs::config_dir().ok_or_else(|| {
            StorageError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no config directory on this platform",
            ))
        })?;
        Ok(Self::new(base.join("camphub").join("auth_token")))
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn load(&self) -> Result<Option<AuthToken>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(AuthToken::new(trimmed)))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, token: &AuthToken) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, token.as_str()).await?;
        debug!(path = %self.path.display(), "session token persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
