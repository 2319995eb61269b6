//! Fetch/filter/error state for one server-owned list.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use camphub_domain::{AuthToken, ResourceError, Searchable};
use tokio::sync::RwLock;
use tracing::debug;

/// Default bound on a single list fetch.
const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the items of one list for a given session token.
#[async_trait]
pub trait ListFetcher<T>: Send + Sync {
    /// Fetches the full item sequence.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] on transport failure or token
    /// rejection; the error stays local to the owning controller.
    async fn fetch(&self, token: &AuthToken) -> Result<Vec<T>, ResourceError>;
}

/// Load state of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStatus {
    /// No token bound, nothing fetched.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed; previous items remain visible.
    Failed,
}

/// Authorization for one fetch attempt.
///
/// Carries the generation stamp assigned when the fetch was initiated and
/// the token to fetch with. A result presented with a superseded ticket is
/// discarded unconditionally.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    token: AuthToken,
}

impl FetchTicket {
    /// The generation this ticket was issued for.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The token this fetch runs with.
    #[must_use]
    pub const fn token(&self) -> &AuthToken {
        &self.token
    }
}

/// Point-in-time view of a controller, for rendering and assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<T> {
    /// Load state.
    pub status: ListStatus,
    /// Unfiltered items, last known-good on failure.
    pub items: Vec<T>,
    /// The failure of the last fetch, if it failed.
    pub error: Option<ResourceError>,
    /// Current filter text.
    pub query: String,
    /// Current generation stamp.
    pub generation: u64,
}

#[derive(Debug)]
struct ListState<T> {
    status: ListStatus,
    items: Vec<T>,
    error: Option<ResourceError>,
    query: String,
    generation: u64,
    token: Option<AuthToken>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            status: ListStatus::Idle,
            items: Vec::new(),
            error: None,
            query: String::new(),
            generation: 0,
            token: None,
        }
    }
}

/// Owns the load/error/filter state of one server-owned list.
///
/// The token is read-only here; only the session store changes it, and
/// each identity change arrives through [`ResourceListController::set_token`].
/// All state transitions are guarded by the generation stamp: if fetch A is
/// superseded by fetch B and A resolves later, A's result is dropped no
/// matter what it carried.
pub struct ResourceListController<T> {
    fetcher: Arc<dyn ListFetcher<T>>,
    timeout: Duration,
    state: RwLock<ListState<T>>,
}

impl<T> ResourceListController<T> {
    /// Creates an idle controller bound to a fetcher.
    #[must_use]
    pub fn new(fetcher: Arc<dyn ListFetcher<T>>) -> Self {
        Self {
            fetcher,
            timeout: DEFAULT_FETCH_TIMEOUT,
            state: RwLock::new(ListState::default()),
        }
    }

    /// Overrides the fetch timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Binds the controller to a (possibly absent) session token.
    ///
    /// If the token identity is unchanged this is a no-op and no ticket is
    /// issued. Any identity change recreates the list state: items and
    /// filter text are dropped and the generation advances, so an
    /// in-flight result for the previous identity is invalidated and one
    /// user's items are never visible under another user's token. A new
    /// token then moves the list to `Loading` and returns the ticket for
    /// the fetch the caller must now run; an absent token settles at
    /// `Idle` (logout, teardown).
    pub async fn set_token(&self, token: Option<AuthToken>) -> Option<FetchTicket> {
        let mut state = self.state.write().await;
        if state.token == token {
            return None;
        }

        state.generation += 1;
        state.token.clone_from(&token);
        state.error = None;
        state.items.clear();
        state.query.clear();

        match token {
            Some(token) => {
                state.status = ListStatus::Loading;
                Some(FetchTicket {
                    generation: state.generation,
                    token,
                })
            }
            None => {
                state.status = ListStatus::Idle;
                None
            }
        }
    }

    /// Re-issues a fetch for the currently bound token.
    ///
    /// The remount/retry path: the previous generation is superseded just
    /// as if the token had changed. Returns `None` when no token is bound.
    pub async fn refresh(&self) -> Option<FetchTicket> {
        let mut state = self.state.write().await;
        let token = state.token.clone()?;
        state.generation += 1;
        state.status = ListStatus::Loading;
        state.error = None;
        Some(FetchTicket {
            generation: state.generation,
            token,
        })
    }

    /// Applies a fetch outcome if, and only if, the ticket is current.
    ///
    /// Returns whether the result was applied. On success the items are
    /// replaced wholesale; on failure the error is recorded and the last
    /// known-good items stay visible so a transient failure does not blank
    /// a previously successful view.
    pub async fn complete(
        &self,
        ticket: &FetchTicket,
        result: Result<Vec<T>, ResourceError>,
    ) -> bool {
        let mut state = self.state.write().await;
        if ticket.generation != state.generation {
            debug!(
                stale = ticket.generation,
                current = state.generation,
                "discarding superseded fetch result"
            );
            return false;
        }

        match result {
            Ok(items) => {
                state.status = ListStatus::Loaded;
                state.items = items;
                state.error = None;
            }
            Err(error) => {
                state.status = ListStatus::Failed;
                state.error = Some(error);
            }
        }
        true
    }

    /// Runs the ticket's fetch under the bounded timeout and applies the
    /// outcome. Returns whether the result was applied (a superseded
    /// ticket's result is dropped).
    pub async fn run(&self, ticket: FetchTicket) -> bool {
        let result = match tokio::time::timeout(self.timeout, self.fetcher.fetch(&ticket.token))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(ResourceError::Timeout),
        };
        self.complete(&ticket, result).await
    }

    /// Updates the filter text. Never triggers a refetch.
    pub async fn set_query(&self, query: impl Into<String>) {
        self.state.write().await.query = query.into();
    }

    /// Inserts a freshly created item at the front of the list.
    ///
    /// Optimistic: no refetch, no reconciliation with the backend's
    /// authoritative order. The next natural refetch restores consistency.
    pub async fn prepend(&self, item: T) {
        self.state.write().await.items.insert(0, item);
    }

    /// Current load state.
    pub async fn status(&self) -> ListStatus {
        self.state.read().await.status
    }

    /// The failure of the last fetch, if it failed.
    pub async fn error(&self) -> Option<ResourceError> {
        self.state.read().await.error.clone()
    }

    /// Current filter text.
    pub async fn query(&self) -> String {
        self.state.read().await.query.clone()
    }

    /// Current generation stamp.
    pub async fn generation(&self) -> u64 {
        self.state.read().await.generation
    }
}

impl<T: Clone> ResourceListController<T> {
    /// The unfiltered item sequence.
    pub async fn items(&self) -> Vec<T> {
        self.state.read().await.items.clone()
    }

    /// A full point-in-time view.
    pub async fn snapshot(&self) -> ListSnapshot<T> {
        let state = self.state.read().await;
        ListSnapshot {
            status: state.status,
            items: state.items.clone(),
            error: state.error.clone(),
            query: state.query.clone(),
            generation: state.generation,
        }
    }
}

impl<T: Clone + Searchable> ResourceListController<T> {
    /// The externally visible, filtered view of the list.
    ///
    /// A pure projection of `(items, query)` recomputed on every read;
    /// the empty query matches everything.
    pub async fn filtered_items(&self) -> Vec<T> {
        let state = self.state.read().await;
        state
            .items
            .iter()
            .filter(|item| item.matches(&state.query))
            .cloned()
            .collect()
    }
}
