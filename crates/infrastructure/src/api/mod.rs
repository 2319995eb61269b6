//! HTTP adapters for the backend API.

mod auth_client;
mod resource_client;

pub use auth_client::HttpAuthApi;
pub use resource_client::HttpResourceApi;

/// User agent sent by both clients.
const USER_AGENT: &str = concat!("Camphub/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client with default settings.
///
/// # Errors
///
/// Returns the underlying builder error if the TLS backend cannot be
/// initialized.
pub fn default_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
}
