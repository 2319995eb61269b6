//! Opaque session token.

use serde::{Deserialize, Serialize};

/// Opaque credential proving an authenticated session to the backend.
///
/// The token is the sole artifact persisted across restarts. The client
/// never inspects its contents; two tokens are the "same identity" exactly
/// when their string representations are equal, which is what the list
/// controllers use to decide whether a refetch is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token string, for Authorization headers and storage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AuthToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for AuthToken {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
