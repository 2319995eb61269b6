//! Resource API port.

use async_trait::async_trait;
use camphub_domain::{AuthToken, Camp, CampDraft, Coordinator, ResourceError};

/// Port for the backend resource endpoints.
///
/// Every call carries the session token; the core treats the returned
/// records as opaque apart from display and filtering. Failures stay
/// local to the calling list controller (see the error taxonomy notes on
/// [`ResourceError`]).
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// Camps created by the authenticated coordinator.
    ///
    /// # Errors
    ///
    /// [`ResourceError::Unauthorized`] if the token is rejected, otherwise
    /// [`ResourceError::NetworkFailure`].
    async fn my_camps(&self, token: &AuthToken) -> Result<Vec<Camp>, ResourceError>;

    /// Other coordinators' camps active this year.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`ResourceApi::my_camps`].
    async fn other_camps(&self, token: &AuthToken) -> Result<Vec<Camp>, ResourceError>;

    /// Camps from past editions.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`ResourceApi::my_camps`].
    async fn archived_camps(&self, token: &AuthToken) -> Result<Vec<Camp>, ResourceError>;

    /// All coordinator profiles.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`ResourceApi::my_camps`].
    async fn coordinators(&self, token: &AuthToken) -> Result<Vec<Coordinator>, ResourceError>;

    /// Creates a camp and returns the backend's authoritative record.
    ///
    /// # Errors
    ///
    /// Same failure kinds as [`ResourceApi::my_camps`].
    async fn create_camp(
        &self,
        token: &AuthToken,
        draft: &CampDraft,
    ) -> Result<Camp, ResourceError>;
}
