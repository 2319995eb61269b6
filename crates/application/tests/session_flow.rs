//! Session lifecycle tests against fake ports.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, missing_docs)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use camphub_application::{
    AuthApi, AuthSession, LoginError, RouteDecision, SessionStatus, SessionStore, StorageError,
    TokenStorage,
};
use camphub_domain::{AuthError, AuthToken, Credentials, User};
use pretty_assertions::assert_eq;
use tokio::sync::Semaphore;

const VALID_EMAIL: &str = "coordinator@example.com";
const VALID_PASSWORD: &str = "password";
const ISSUED_TOKEN: &str = "issued.jwt.token";

fn coordinator() -> User {
    User {
        id: 1,
        name: "Jan Kowalski".to_string(),
        email: VALID_EMAIL.to_string(),
    }
}

/// Backend fake: one valid credential pair, one valid token. An optional
/// gate holds `login` in flight until the test releases it.
#[derive(Default)]
struct FakeAuthApi {
    unreachable: bool,
    gate: Option<Arc<Semaphore>>,
    logout_calls: Mutex<u32>,
}

impl FakeAuthApi {
    fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    fn gated(gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        if self.unreachable {
            return Err(AuthError::NetworkFailure("backend down".to_string()));
        }
        if credentials.email == VALID_EMAIL && credentials.password == VALID_PASSWORD {
            Ok(AuthSession {
                token: AuthToken::new(ISSUED_TOKEN),
                user: coordinator(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn me(&self, token: &AuthToken) -> Result<User, AuthError> {
        if self.unreachable {
            return Err(AuthError::NetworkFailure("backend down".to_string()));
        }
        if token.as_str() == ISSUED_TOKEN {
            Ok(coordinator())
        } else {
            Err(AuthError::InvalidToken)
        }
    }

    async fn logout(&self, _token: &AuthToken) -> Result<(), AuthError> {
        *self.logout_calls.lock().unwrap() += 1;
        if self.unreachable {
            return Err(AuthError::NetworkFailure("backend down".to_string()));
        }
        Ok(())
    }
}

/// In-memory stand-in for the durable token entry. Clones share the cell
/// so tests can inspect what the store persisted.
#[derive(Default, Clone)]
struct MemoryTokenStorage {
    token: Arc<Mutex<Option<AuthToken>>>,
}

impl MemoryTokenStorage {
    fn seeded(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(AuthToken::new(token)))),
        }
    }

    fn stored(&self) -> Option<AuthToken> {
        self.token.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenStorage for MemoryTokenStorage {
    async fn load(&self) -> Result<Option<AuthToken>, StorageError> {
        Ok(self.stored())
    }

    async fn store(&self, token: &AuthToken) -> Result<(), StorageError> {
        *self.token.lock().unwrap() = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

async fn wait_for_status(
    store: &SessionStore<FakeAuthApi, MemoryTokenStorage>,
    status: SessionStatus,
) {
    let mut session = store.subscribe();
    while session.borrow_and_update().status() != status {
        session.changed().await.unwrap();
    }
}

#[tokio::test]
async fn initialize_without_persisted_token_is_anonymous() {
    let store = SessionStore::new(FakeAuthApi::default(), MemoryTokenStorage::default());
    store.initialize().await;

    assert_eq!(store.status(), SessionStatus::Anonymous);
    assert!(store.current_token().is_none());
}

#[tokio::test]
async fn initialize_twice_is_a_no_op() {
    let store = SessionStore::new(
        FakeAuthApi::default(),
        MemoryTokenStorage::seeded(ISSUED_TOKEN),
    );
    store.initialize().await;
    store.initialize().await;

    assert_eq!(store.status(), SessionStatus::Authenticated);
}

#[tokio::test]
async fn restore_with_accepted_token_never_redirects() {
    // End-to-end scenario A: no observable snapshot during restore maps
    // to RedirectToLogin.
    let store = SessionStore::new(
        FakeAuthApi::default(),
        MemoryTokenStorage::seeded(ISSUED_TOKEN),
    );

    assert_eq!(
        RouteDecision::for_status(store.status()),
        RouteDecision::ShowLoading
    );

    store.initialize().await;

    assert_eq!(
        RouteDecision::for_status(store.status()),
        RouteDecision::RenderProtected
    );
    assert!(store.snapshot().is_authenticated());
    assert_eq!(store.snapshot().user(), Some(&coordinator()));
    assert_eq!(store.current_token(), Some(AuthToken::new(ISSUED_TOKEN)));
}

#[tokio::test]
async fn restore_with_rejected_token_clears_storage() {
    let storage = MemoryTokenStorage::seeded("expired.token");
    let store = SessionStore::new(FakeAuthApi::default(), storage.clone());

    store.initialize().await;

    assert_eq!(store.status(), SessionStatus::Anonymous);
    assert!(storage.stored().is_none());
}

#[tokio::test]
async fn restore_with_unreachable_backend_degrades_to_anonymous() {
    let storage = MemoryTokenStorage::seeded(ISSUED_TOKEN);
    let store = SessionStore::new(FakeAuthApi::unreachable(), storage.clone());
    store.initialize().await;

    assert_eq!(store.status(), SessionStatus::Anonymous);
    // The token survives for the next start; only a rejected token is
    // deleted.
    assert_eq!(storage.stored(), Some(AuthToken::new(ISSUED_TOKEN)));
}

#[tokio::test]
async fn login_passes_through_authenticating_to_authenticated() {
    let gate = Arc::new(Semaphore::new(0));
    let storage = MemoryTokenStorage::default();
    let store = Arc::new(SessionStore::new(
        FakeAuthApi::gated(Arc::clone(&gate)),
        storage.clone(),
    ));
    store.initialize().await;
    assert_eq!(store.status(), SessionStatus::Anonymous);

    let login = tokio::spawn({
        let store = Arc::clone(&store);
        async move {
            store
                .login(&Credentials::new(VALID_EMAIL, VALID_PASSWORD))
                .await
        }
    });

    wait_for_status(&store, SessionStatus::Authenticating).await;

    gate.add_permits(1);
    let user = login.await.unwrap().unwrap();

    assert_eq!(user, coordinator());
    assert_eq!(store.status(), SessionStatus::Authenticated);
    assert_eq!(storage.stored(), Some(AuthToken::new(ISSUED_TOKEN)));
}

#[tokio::test]
async fn concurrent_login_is_rejected() {
    let gate = Arc::new(Semaphore::new(0));
    let store = Arc::new(SessionStore::new(
        FakeAuthApi::gated(Arc::clone(&gate)),
        MemoryTokenStorage::default(),
    ));
    store.initialize().await;

    let first = tokio::spawn({
        let store = Arc::clone(&store);
        async move {
            store
                .login(&Credentials::new(VALID_EMAIL, VALID_PASSWORD))
                .await
        }
    });

    wait_for_status(&store, SessionStatus::Authenticating).await;

    let second = store
        .login(&Credentials::new(VALID_EMAIL, VALID_PASSWORD))
        .await;
    assert_eq!(second.unwrap_err(), LoginError::InProgress);

    gate.add_permits(1);
    assert!(first.await.unwrap().is_ok());
}

#[tokio::test]
async fn logout_during_login_is_not_undone_by_late_success() {
    let gate = Arc::new(Semaphore::new(0));
    let storage = MemoryTokenStorage::default();
    let store = Arc::new(SessionStore::new(
        FakeAuthApi::gated(Arc::clone(&gate)),
        storage.clone(),
    ));
    store.initialize().await;

    let login = tokio::spawn({
        let store = Arc::clone(&store);
        async move {
            store
                .login(&Credentials::new(VALID_EMAIL, VALID_PASSWORD))
                .await
        }
    });

    wait_for_status(&store, SessionStatus::Authenticating).await;

    store.logout().await;
    assert_eq!(store.status(), SessionStatus::Anonymous);

    gate.add_permits(1);
    assert_eq!(login.await.unwrap().unwrap(), coordinator());

    // The backend accepted the credentials, but the logout already
    // settled the session; the late result must not resurrect it or
    // re-persist the token.
    let session = store.snapshot();
    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert!(session.user().is_none());
    assert!(session.token().is_none());
    assert!(storage.stored().is_none());
}

#[tokio::test]
async fn login_with_invalid_credentials_fails_without_session() {
    let storage = MemoryTokenStorage::default();
    let store = SessionStore::new(FakeAuthApi::default(), storage.clone());
    store.initialize().await;

    let error = store
        .login(&Credentials::new(VALID_EMAIL, "wrong"))
        .await
        .unwrap_err();

    assert_eq!(error, LoginError::Auth(AuthError::InvalidCredentials));
    assert_eq!(store.status(), SessionStatus::AuthFailed);
    let session = store.snapshot();
    assert!(session.user().is_none());
    assert!(session.token().is_none());
    assert!(storage.stored().is_none());
}

#[tokio::test]
async fn retry_after_auth_failure_is_allowed() {
    let store = SessionStore::new(FakeAuthApi::default(), MemoryTokenStorage::default());
    store.initialize().await;

    let _failed = store.login(&Credentials::new(VALID_EMAIL, "wrong")).await;
    assert_eq!(store.status(), SessionStatus::AuthFailed);

    store
        .login(&Credentials::new(VALID_EMAIL, VALID_PASSWORD))
        .await
        .unwrap();
    assert_eq!(store.status(), SessionStatus::Authenticated);
}

#[tokio::test]
async fn login_rejected_while_already_authenticated() {
    let store = SessionStore::new(FakeAuthApi::default(), MemoryTokenStorage::default());
    store.initialize().await;
    store
        .login(&Credentials::new(VALID_EMAIL, VALID_PASSWORD))
        .await
        .unwrap();

    let error = store
        .login(&Credentials::new(VALID_EMAIL, VALID_PASSWORD))
        .await
        .unwrap_err();
    assert_eq!(error, LoginError::NotAllowed(SessionStatus::Authenticated));
}

#[tokio::test]
async fn login_with_unreachable_backend_reports_network_failure() {
    let store = SessionStore::new(FakeAuthApi::unreachable(), MemoryTokenStorage::default());
    store.initialize().await;

    let error = store
        .login(&Credentials::new(VALID_EMAIL, VALID_PASSWORD))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        LoginError::Auth(AuthError::NetworkFailure(_))
    ));
    assert_eq!(store.status(), SessionStatus::AuthFailed);
}

#[tokio::test]
async fn logout_clears_memory_and_storage_from_any_state() {
    let storage = MemoryTokenStorage::seeded(ISSUED_TOKEN);
    let store = SessionStore::new(FakeAuthApi::default(), storage.clone());
    store.initialize().await;
    assert_eq!(store.status(), SessionStatus::Authenticated);

    store.logout().await;

    let session = store.snapshot();
    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert!(session.user().is_none());
    assert!(session.token().is_none());
    assert!(storage.stored().is_none());

    // Logout is also fine when nothing is logged in.
    store.logout().await;
    assert_eq!(store.status(), SessionStatus::Anonymous);
}

#[tokio::test]
async fn logout_proceeds_when_backend_notification_fails() {
    let storage = MemoryTokenStorage::default();
    let store = SessionStore::new(FakeAuthApi::unreachable(), storage.clone());
    store.initialize().await;

    // No backend, no token; teardown must still settle Anonymous with an
    // empty store.
    store.logout().await;
    assert_eq!(store.status(), SessionStatus::Anonymous);
    assert!(storage.stored().is_none());
}
