//! Durable token storage port.

use async_trait::async_trait;
use camphub_domain::AuthToken;
use thiserror::Error;

/// Errors from the durable token store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored value could not be interpreted.
    #[error("corrupt stored token: {0}")]
    Corrupt(String),
}

/// Port for the single durable key-value entry holding the session token.
///
/// Read once at startup, written on successful login, deleted on logout.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Loads the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    async fn load(&self) -> Result<Option<AuthToken>, StorageError>;

    /// Persists the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be written.
    async fn store(&self, token: &AuthToken) -> Result<(), StorageError>;

    /// Deletes the persisted token. Deleting an absent token is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion itself fails.
    async fn clear(&self) -> Result<(), StorageError>;
}
