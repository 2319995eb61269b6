//! Route guarding: pure decisions over session status.

use super::SessionStatus;

/// What a routing layer should render for a guarded view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session restore has not settled; show a placeholder. Protected
    /// content must never appear, even transiently, before restore
    /// completes.
    ShowLoading,
    /// No authenticated session; navigate to the login route.
    RedirectToLogin,
    /// Render the protected content.
    RenderProtected,
}

impl RouteDecision {
    /// The decision for a protected view given the session status.
    #[must_use]
    pub const fn for_status(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Uninitialized | SessionStatus::Restoring => Self::ShowLoading,
            // A login in flight keeps the user on the login page.
            SessionStatus::Anonymous
            | SessionStatus::Authenticating
            | SessionStatus::AuthFailed => Self::RedirectToLogin,
            SessionStatus::Authenticated => Self::RenderProtected,
        }
    }
}

/// The navigation surface of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public login form.
    Login,
    /// Current camps, own and others'.
    Camps,
    /// Past camp editions.
    Archive,
    /// Coordinator profiles.
    Coordinators,
}

impl Route {
    /// The route's path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Camps => "/camps",
            Self::Archive => "/archive",
            Self::Coordinators => "/coordinators",
        }
    }

    /// Whether the route requires an authenticated session.
    ///
    /// `/login` stays reachable for authenticated users as well.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Resolves a path to a route; `/` is an alias for the camps view.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/login" => Some(Self::Login),
            "/" | "/camps" => Some(Self::Camps),
            "/archive" => Some(Self::Archive),
            "/coordinators" => Some(Self::Coordinators),
            _ => None,
        }
    }
}

/// The decision for navigating to `route` with the given session status.
///
/// Public routes render unconditionally; protected routes defer to
/// [`RouteDecision::for_status`].
#[must_use]
pub const fn decide(route: Route, status: SessionStatus) -> RouteDecision {
    if route.requires_auth() {
        RouteDecision::for_status(status)
    } else {
        RouteDecision::RenderProtected
    }
}
