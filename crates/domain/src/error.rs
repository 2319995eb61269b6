//! Domain error taxonomies.

use thiserror::Error;

/// Errors surfaced by authentication operations.
///
/// Returned to the login form for direct display; the session store
/// records `AuthFailed` but never escalates further.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The backend rejected the email/password pair.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The backend rejected the presented token.
    #[error("session token rejected")]
    InvalidToken,

    /// Transport or server failure, retry may succeed.
    #[error("network failure: {0}")]
    NetworkFailure(String),
}

/// Errors surfaced by resource list/create operations.
///
/// Captured inside the owning list controller; never fatal, never a
/// trigger for logout or redirect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The backend rejected the token on a resource endpoint.
    #[error("unauthorized")]
    Unauthorized,

    /// Transport or server failure, retry may succeed.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The fetch exceeded the controller's bounded timeout.
    #[error("request timed out")]
    Timeout,
}
