//! Camphub Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: HTTP clients for the backend API and the
//! file-backed token store.

pub mod api;
pub mod persistence;

pub use api::{HttpAuthApi, HttpResourceApi};
pub use persistence::FileTokenStorage;
