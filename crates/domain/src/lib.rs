//! Camphub Domain - Core business types
//!
//! This crate defines the domain model for the Camphub exchange-camp
//! client. All types here are pure Rust with no I/O dependencies.

pub mod camp;
pub mod coordinator;
pub mod error;
pub mod search;
pub mod token;
pub mod user;

pub use camp::{Camp, CampDraft, CampRef, CampStatus};
pub use coordinator::Coordinator;
pub use error::{AuthError, ResourceError};
pub use search::Searchable;
pub use token::AuthToken;
pub use user::{Credentials, User};
