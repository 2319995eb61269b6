//! Camphub Application - Session and protected-resource core
//!
//! This crate implements the stateful core of the client: the session
//! lifecycle, the route guard, the generic resource-list controller with
//! its stale-result discard, and the detail/create selection state.
//! External systems (backend API, durable token storage) are reached
//! through the ports in [`ports`]; the infrastructure crate provides the
//! adapters.

pub mod lists;
pub mod ports;
pub mod selection;
pub mod session;

pub use lists::{
    CampListKind, CampsFetcher, CoordinatorsFetcher, FetchTicket, ListFetcher, ListSnapshot,
    ListStatus, ResourceListController,
};
pub use ports::{AuthApi, AuthSession, ResourceApi, StorageError, TokenStorage};
pub use selection::{Selection, SelectionController, SelectionMode};
pub use session::{
    LoginError, Route, RouteDecision, Session, SessionStatus, SessionStore,
};
