//! User identity and login credentials.

use serde::{Deserialize, Serialize};

/// Identity record for the signed-in coordinator, owned by the backend.
///
/// Immutable once obtained; a new `User` is only ever produced by a fresh
/// login or a session restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address, also the login identifier.
    pub email: String,
}

/// Login credentials, held only for the duration of a login attempt.
///
/// Never persisted. The `Debug` impl redacts the password so credentials
/// can pass through tracing without leaking.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login email.
    pub email: String,
    /// Plain-text password, sent to the backend over TLS.
    pub password: String,
}

impl Credentials {
    /// Creates credentials from a login form.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
