//! Camp and coordinator endpoints over HTTP.

use async_trait::async_trait;
use camphub_application::ports::ResourceApi;
use camphub_domain::{AuthToken, Camp, CampDraft, CampStatus, Coordinator, ResourceError};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

/// `ResourceApi` adapter for the backend's camp and coordinator endpoints.
pub struct HttpResourceApi {
    client: reqwest::Client,
    base_url: Url,
}

/// List endpoints return either a plain array or a Spring `Page`
/// envelope; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Paged { content: Vec<T> },
    Plain(Vec<T>),
}

impl<T> ListPayload<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Self::Paged { content } => content,
            Self::Plain(items) => items,
        }
    }
}

fn transport(error: reqwest::Error) -> ResourceError {
    ResourceError::NetworkFailure(error.to_string())
}

fn reject(status: StatusCode) -> ResourceError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        ResourceError::Unauthorized
    } else {
        ResourceError::NetworkFailure(format!("unexpected status {status}"))
    }
}

impl HttpResourceApi {
    /// Creates the adapter against a backend base URL.
    #[must_use]
    pub const fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ResourceError> {
        self.base_url
            .join(path)
            .map_err(|e| ResourceError::NetworkFailure(format!("invalid endpoint {path}: {e}")))
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        token: &AuthToken,
    ) -> Result<Vec<T>, ResourceError> {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .query(query)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(reject(response.status()));
        }

        let payload: ListPayload<T> = response.json().await.map_err(transport)?;
        Ok(payload.into_items())
    }
}

#[async_trait]
impl ResourceApi for HttpResourceApi {
    async fn my_camps(&self, token: &AuthToken) -> Result<Vec<Camp>, ResourceError> {
        self.get_list("api/camps/my-camps", &[], token).await
    }

    async fn other_camps(&self, token: &AuthToken) -> Result<Vec<Camp>, ResourceError> {
        // Camps of the other coordinators in the caller's district; the
        // backend derives the district from the bearer token.
        self.get_list("api/camps/district", &[], token).await
    }

    async fn archived_camps(&self, token: &AuthToken) -> Result<Vec<Camp>, ResourceError> {
        self.get_list("api/camps", &[("status", "ARCHIVED")], token)
            .await
    }

    async fn coordinators(&self, token: &AuthToken) -> Result<Vec<Coordinator>, ResourceError> {
        self.get_list("api/coordinators", &[], token).await
    }

    async fn create_camp(
        &self,
        token: &AuthToken,
        draft: &CampDraft,
    ) -> Result<Camp, ResourceError> {
        debug_assert_eq!(draft.status, CampStatus::Open);

        let response = self
            .client
            .post(self.endpoint("api/camps")?)
            .bearer_auth(token.as_str())
            .json(draft)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(reject(response.status()));
        }

        response.json().await.map_err(transport)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_resolve_against_base_url() {
        let api = HttpResourceApi::new(
            reqwest::Client::new(),
            Url::parse("http://localhost:8080/").unwrap(),
        );
        assert_eq!(
            api.endpoint("api/camps/my-camps").unwrap().as_str(),
            "http://localhost:8080/api/camps/my-camps"
        );
        assert_eq!(
            api.endpoint("api/camps/district").unwrap().as_str(),
            "http://localhost:8080/api/camps/district"
        );
        assert_eq!(
            api.endpoint("api/coordinators").unwrap().as_str(),
            "http://localhost:8080/api/coordinators"
        );
    }

    #[test]
    fn test_rejection_distinguishes_unauthorized() {
        assert_eq!(
            reject(StatusCode::UNAUTHORIZED),
            ResourceError::Unauthorized
        );
        assert_eq!(reject(StatusCode::FORBIDDEN), ResourceError::Unauthorized);
        assert!(matches!(
            reject(StatusCode::INTERNAL_SERVER_ERROR),
            ResourceError::NetworkFailure(_)
        ));
    }

    #[test]
    fn test_list_payload_accepts_plain_array() {
        let payload: ListPayload<i64> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(payload.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn test_list_payload_accepts_page_envelope() {
        let payload: ListPayload<i64> = serde_json::from_str(
            r#"{"content":[4,5],"totalElements":2,"totalPages":1,"number":0}"#,
        )
        .unwrap();
        assert_eq!(payload.into_items(), vec![4, 5]);
    }
}
