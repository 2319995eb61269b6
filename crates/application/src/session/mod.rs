//! Session lifecycle and protected-route gating.
//!
//! [`SessionStore`] is the single writer of session state; everything else
//! observes it. [`RouteDecision`] turns the observed status into one of the
//! three renderable outcomes a routing layer needs.

mod guard;
mod store;

pub use guard::{decide, Route, RouteDecision};
pub use store::{LoginError, Session, SessionStatus, SessionStore};
