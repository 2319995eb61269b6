//! Authentication API port.

use async_trait::async_trait;
use camphub_domain::{AuthError, AuthToken, Credentials, User};

/// Result of a successful login: the token to persist and the identity
/// record to hold in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Token for subsequent resource calls.
    pub token: AuthToken,
    /// The authenticated coordinator.
    pub user: User,
}

/// Port for the backend authentication endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for a token and identity record.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] if the backend rejects the pair,
    /// [`AuthError::NetworkFailure`] on transport or server failure.
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, AuthError>;

    /// Resolves a token to the identity it belongs to.
    ///
    /// Used to validate a persisted token during session restore.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidToken`] if the backend rejects the token,
    /// [`AuthError::NetworkFailure`] on transport or server failure.
    async fn me(&self, token: &AuthToken) -> Result<User, AuthError>;

    /// Notifies the backend that the session is ending.
    ///
    /// Best-effort: local teardown proceeds regardless of the outcome.
    ///
    /// # Errors
    ///
    /// [`AuthError::NetworkFailure`] on transport or server failure.
    async fn logout(&self, token: &AuthToken) -> Result<(), AuthError>;
}
