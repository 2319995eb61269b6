//! Session state machine and its owning store.

use camphub_domain::{AuthError, AuthToken, Credentials, User};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::ports::{AuthApi, TokenStorage};

/// Authentication status of the current session.
///
/// Transitions: `Uninitialized → Restoring → {Authenticated | Anonymous}`;
/// `Anonymous ⇄ Authenticating → {Authenticated | AuthFailed}`;
/// `AuthFailed → Authenticating` (retry) or `→ Anonymous` (abandon);
/// `Authenticated → Anonymous` (logout only — an authenticated session is
/// never downgraded to `AuthFailed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Application just started, persisted token not yet consulted.
    #[default]
    Uninitialized,
    /// A persisted token was found and is being validated.
    Restoring,
    /// No session; the user must log in.
    Anonymous,
    /// A login attempt is in flight.
    Authenticating,
    /// Logged in with a valid token.
    Authenticated,
    /// The last login attempt failed; retry or abandon.
    AuthFailed,
}

/// The authenticated-or-not state of the current user.
///
/// `user` and `token` are both present iff the status is
/// [`SessionStatus::Authenticated`]; the fields are private so the
/// invariant cannot be violated from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    status: SessionStatus,
    user: Option<User>,
    token: Option<AuthToken>,
}

impl Session {
    const fn with_status(status: SessionStatus) -> Self {
        Self {
            status,
            user: None,
            token: None,
        }
    }

    const fn authenticated(user: User, token: AuthToken) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            user: Some(user),
            token: Some(token),
        }
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// The signed-in user, present only when authenticated.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The session token, present only when authenticated.
    #[must_use]
    pub const fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Whether protected content may be rendered.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_status(SessionStatus::Uninitialized)
    }
}

/// Errors returned by [`SessionStore::login`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// A login attempt is already in flight; at most one is allowed.
    #[error("a login attempt is already in flight")]
    InProgress,

    /// Login is only allowed from `Anonymous` or `AuthFailed`.
    #[error("login not allowed in the {0:?} state")]
    NotAllowed(SessionStatus),

    /// The authentication call itself failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Owner and single writer of session state.
///
/// Observers subscribe to the session via [`SessionStore::subscribe`];
/// token-identity changes seen there drive every active list controller
/// to refetch or reset. Nothing outside this store mutates the session.
#[derive(Debug)]
pub struct SessionStore<A, S> {
    auth: A,
    storage: S,
    state: watch::Sender<Session>,
}

impl<A: AuthApi, S: TokenStorage> SessionStore<A, S> {
    /// Creates a store in the `Uninitialized` state.
    #[must_use]
    pub fn new(auth: A, storage: S) -> Self {
        Self {
            auth,
            storage,
            state: watch::Sender::new(Session::default()),
        }
    }

    /// A receiver that observes every session transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// A clone of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.state.borrow().status()
    }

    /// The session token; absent unless authenticated.
    #[must_use]
    pub fn current_token(&self) -> Option<AuthToken> {
        self.state.borrow().token().cloned()
    }

    /// Consults the persisted token and settles the session into
    /// `Authenticated` or `Anonymous`.
    ///
    /// A found token is validated against the backend while the session
    /// shows `Restoring`; a token the backend rejects is deleted from
    /// storage. Validation that fails for transport reasons degrades to
    /// `Anonymous` without deleting the token, so the next start can try
    /// again. Calling this more than once is a no-op.
    pub async fn initialize(&self) {
        if self.status() != SessionStatus::Uninitialized {
            debug!("initialize called twice, ignoring");
            return;
        }

        let stored = match self.storage.load().await {
            Ok(stored) => stored,
            Err(error) => {
                warn!(%error, "failed to read persisted token");
                None
            }
        };

        let Some(token) = stored else {
            self.transition(Session::with_status(SessionStatus::Anonymous));
            return;
        };

        self.transition(Session::with_status(SessionStatus::Restoring));

        match self.auth.me(&token).await {
            Ok(user) => {
                debug!(user = %user.email, "session restored from persisted token");
                self.transition(Session::authenticated(user, token));
            }
            Err(AuthError::InvalidToken) => {
                debug!("persisted token rejected, clearing");
                if let Err(error) = self.storage.clear().await {
                    warn!(%error, "failed to clear rejected token");
                }
                self.transition(Session::with_status(SessionStatus::Anonymous));
            }
            Err(error) => {
                warn!(%error, "token validation unreachable, starting anonymous");
                self.transition(Session::with_status(SessionStatus::Anonymous));
            }
        }
    }

    /// Attempts a login, transitioning through `Authenticating`.
    ///
    /// On success the token is persisted and the session becomes
    /// `Authenticated`; on failure the session becomes `AuthFailed` and
    /// the error is returned for the login form to display. A logout
    /// that interleaves while the request is in flight wins: the late
    /// result is dropped and the session stays `Anonymous`.
    ///
    /// # Errors
    ///
    /// [`LoginError::InProgress`] if a login is already in flight,
    /// [`LoginError::NotAllowed`] from any state other than `Anonymous`
    /// or `AuthFailed`, [`LoginError::Auth`] when the backend rejects the
    /// credentials or cannot be reached.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, LoginError> {
        let mut allowed = Ok(());
        self.state.send_if_modified(|session| match session.status() {
            SessionStatus::Anonymous | SessionStatus::AuthFailed => {
                *session = Session::with_status(SessionStatus::Authenticating);
                true
            }
            SessionStatus::Authenticating => {
                allowed = Err(LoginError::InProgress);
                false
            }
            other => {
                allowed = Err(LoginError::NotAllowed(other));
                false
            }
        });
        allowed?;

        // The request suspended; a logout may have settled the session
        // at Anonymous in the meantime. Either outcome commits only if
        // the session is still Authenticating, so a late login result
        // cannot resurrect a torn-down session.
        match self.auth.login(credentials).await {
            Ok(outcome) => {
                let committed = self.state.send_if_modified(|session| {
                    if session.status() == SessionStatus::Authenticating {
                        *session =
                            Session::authenticated(outcome.user.clone(), outcome.token.clone());
                        true
                    } else {
                        false
                    }
                });
                if committed {
                    if let Err(error) = self.storage.store(&outcome.token).await {
                        // The in-memory session still works; only restart
                        // restore is lost.
                        warn!(%error, "failed to persist session token");
                    }
                    debug!(user = %outcome.user.email, "login succeeded");
                } else {
                    debug!("late login result dropped, session no longer authenticating");
                }
                Ok(outcome.user)
            }
            Err(error) => {
                self.state.send_if_modified(|session| {
                    if session.status() == SessionStatus::Authenticating {
                        *session = Session::with_status(SessionStatus::AuthFailed);
                        true
                    } else {
                        false
                    }
                });
                debug!(%error, "login failed");
                Err(error.into())
            }
        }
    }

    /// Tears the session down to `Anonymous` from any state.
    ///
    /// The backend is notified best-effort, the persisted token is
    /// deleted, and user/token leave memory. Dependent list controllers
    /// observe the token-identity change and abandon in-flight fetches.
    pub async fn logout(&self) {
        if let Some(token) = self.current_token() {
            if let Err(error) = self.auth.logout(&token).await {
                debug!(%error, "backend logout notification failed");
            }
        }

        if let Err(error) = self.storage.clear().await {
            warn!(%error, "failed to delete persisted token");
        }

        self.transition(Session::with_status(SessionStatus::Anonymous));
    }

    fn transition(&self, next: Session) {
        self.state.send_replace(next);
    }
}
