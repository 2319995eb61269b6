//! Camphub - Main Entry Point
//!
//! Composition root: wires the HTTP adapters and the token file into the
//! session store, restores the session, optionally logs in with
//! credentials from the environment, and demonstrates a protected list
//! fetch. A UI shell would own the controllers the same way.

use std::sync::Arc;

use camphub_application::session::decide;
use camphub_application::{
    CampListKind, CampsFetcher, ListStatus, ResourceApi, ResourceListController, Route,
    SessionStatus, SessionStore,
};
use camphub_domain::Credentials;
use camphub_infrastructure::api::default_client;
use camphub_infrastructure::{FileTokenStorage, HttpAuthApi, HttpResourceApi};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_url = std::env::var("CAMPHUB_API_URL")
        .unwrap_or_else(|_| "http://localhost:8080/".to_string());
    let base_url = Url::parse(&base_url)?;

    let client = default_client()?;
    let auth = HttpAuthApi::new(client.clone(), base_url.clone());
    let storage = FileTokenStorage::from_default_location()?;
    let session = SessionStore::new(auth, storage);

    session.initialize().await;
    info!(status = ?session.status(), "session settled");

    if session.status() != SessionStatus::Authenticated {
        match (
            std::env::var("CAMPHUB_EMAIL"),
            std::env::var("CAMPHUB_PASSWORD"),
        ) {
            (Ok(email), Ok(password)) => {
                match session.login(&Credentials::new(email, password)).await {
                    Ok(user) => info!(user = %user.name, "logged in"),
                    Err(login_error) => error!(%login_error, "login failed"),
                }
            }
            _ => info!("no CAMPHUB_EMAIL/CAMPHUB_PASSWORD in environment, staying anonymous"),
        }
    }

    for route in [Route::Camps, Route::Archive, Route::Coordinators] {
        info!(
            path = route.path(),
            decision = ?decide(route, session.status()),
            "route guard"
        );
    }

    let Some(token) = session.current_token() else {
        return Ok(());
    };

    let resources: Arc<dyn ResourceApi> = Arc::new(HttpResourceApi::new(client, base_url));
    let my_camps = ResourceListController::new(Arc::new(CampsFetcher::new(
        resources,
        CampListKind::Mine,
    )));

    if let Some(ticket) = my_camps.set_token(Some(token)).await {
        my_camps.run(ticket).await;
    }

    if my_camps.status().await == ListStatus::Loaded {
        for camp in my_camps.items().await {
            info!(id = camp.id, name = %camp.name, country = %camp.country, "my camp");
        }
    } else if let Some(fetch_error) = my_camps.error().await {
        warn!(%fetch_error, "could not load my camps");
    }

    Ok(())
}
