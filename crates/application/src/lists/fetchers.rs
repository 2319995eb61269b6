//! Fetchers binding the generic controller to the resource API.

use std::sync::Arc;

use async_trait::async_trait;
use camphub_domain::{AuthToken, Camp, Coordinator, ResourceError};

use super::ListFetcher;
use crate::ports::ResourceApi;

/// Which camp list a [`CampsFetcher`] serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampListKind {
    /// Camps created by the signed-in coordinator.
    Mine,
    /// Other coordinators' camps active this year.
    Other,
    /// Past editions.
    Archived,
}

/// Fetcher for one of the camp lists.
pub struct CampsFetcher {
    api: Arc<dyn ResourceApi>,
    kind: CampListKind,
}

impl CampsFetcher {
    /// Binds a camp list kind to the resource API.
    #[must_use]
    pub fn new(api: Arc<dyn ResourceApi>, kind: CampListKind) -> Self {
        Self { api, kind }
    }
}

#[async_trait]
impl ListFetcher<Camp> for CampsFetcher {
    async fn fetch(&self, token: &AuthToken) -> Result<Vec<Camp>, ResourceError> {
        match self.kind {
            CampListKind::Mine => self.api.my_camps(token).await,
            CampListKind::Other => self.api.other_camps(token).await,
            CampListKind::Archived => self.api.archived_camps(token).await,
        }
    }
}

/// Fetcher for the coordinator directory.
pub struct CoordinatorsFetcher {
    api: Arc<dyn ResourceApi>,
}

impl CoordinatorsFetcher {
    /// Binds the coordinator list to the resource API.
    #[must_use]
    pub fn new(api: Arc<dyn ResourceApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListFetcher<Coordinator> for CoordinatorsFetcher {
    async fn fetch(&self, token: &AuthToken) -> Result<Vec<Coordinator>, ResourceError> {
        self.api.coordinators(token).await
    }
}
