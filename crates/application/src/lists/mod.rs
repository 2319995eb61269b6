//! Generic resource-list controllers.
//!
//! One [`ResourceListController`] is instantiated per resource kind
//! (my camps, other camps, archived camps, coordinators). The controller
//! owns fetch/filter/error state for its list; the generation stamp on
//! each fetch is the sole authority on which result is current.

mod controller;
mod fetchers;

pub use controller::{
    FetchTicket, ListFetcher, ListSnapshot, ListStatus, ResourceListController,
};
pub use fetchers::{CampListKind, CampsFetcher, CoordinatorsFetcher};
