//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer; tests substitute in-memory fakes.

mod auth_api;
mod resource_api;
mod token_storage;

pub use auth_api::{AuthApi, AuthSession};
pub use resource_api::ResourceApi;
pub use token_storage::{StorageError, TokenStorage};
