//! Authentication endpoints over HTTP.

use async_trait::async_trait;
use camphub_application::ports::{AuthApi, AuthSession};
use camphub_domain::{AuthError, AuthToken, Credentials, User};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// `AuthApi` adapter for the backend's `/api/auth` endpoints.
///
/// Login returns the access token in the body (`JwtResponse`); the
/// identity record is resolved with a follow-up `/api/auth/me` call, which
/// is also the validation round-trip used during session restore.
pub struct HttpAuthApi {
    client: reqwest::Client,
    base_url: Url,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JwtResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct IdentityResponse {
    id: i64,
    name: String,
    email: String,
}

impl From<IdentityResponse> for User {
    fn from(identity: IdentityResponse) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
        }
    }
}

impl HttpAuthApi {
    /// Creates the adapter against a backend base URL.
    #[must_use]
    pub const fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        self.base_url
            .join(path)
            .map_err(|e| AuthError::NetworkFailure(format!("invalid endpoint {path}: {e}")))
    }
}

fn transport(error: reqwest::Error) -> AuthError {
    AuthError::NetworkFailure(error.to_string())
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
        let response = self
            .client
            .post(self.endpoint("api/auth/login")?)
            .json(&LoginRequest {
                email: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(transport)?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST => {
                Err(AuthError::InvalidCredentials)
            }
            status if !status.is_success() => Err(AuthError::NetworkFailure(format!(
                "login failed with status {status}"
            ))),
            _ => {
                let jwt: JwtResponse = response.json().await.map_err(transport)?;
                let token = AuthToken::new(jwt.access_token);
                debug!("login accepted, resolving identity");
                // The login body carries only the token; the identity
                // record comes from /me. A failure here is a transport
                // problem, not bad credentials.
                let user = self
                    .me(&token)
                    .await
                    .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
                Ok(AuthSession { token, user })
            }
        }
    }

    async fn me(&self, token: &AuthToken) -> Result<User, AuthError> {
        let response = self
            .client
            .get(self.endpoint("api/auth/me")?)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(transport)?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AuthError::InvalidToken),
            status if !status.is_success() => Err(AuthError::NetworkFailure(format!(
                "identity lookup failed with status {status}"
            ))),
            _ => {
                let identity: IdentityResponse = response.json().await.map_err(transport)?;
                Ok(identity.into())
            }
        }
    }

    async fn logout(&self, token: &AuthToken) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.endpoint("api/auth/logout")?)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::NetworkFailure(format!(
                "logout failed with status {}",
                response.status()
            )))
        }
    }
}
