//! HTTP client helpers (REST).

use crate::core::feed::{build_deals_path, build_status_path};
use gloo_net::http::Request;
use moorage_api_models::{ApiEnvelope, ContentStatusResponse, ContentSummary, Viewer};

/// Errors surfaced by API calls, already shaped for presentation decisions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The resource does not exist.
    #[error("not found")]
    NotFound,
    /// The server answered with a non-success status.
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
    /// The server answered with an application-level error payload.
    #[error("api error: {0}")]
    Api(String),
}

/// Thin client over the Moorage REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// Origin the API is served from, without a trailing slash.
    pub base_url: String,
}

impl ApiClient {
    /// Build a client for the given origin.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, FetchError> {
        let response = Request::get(&format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        if response.status() == 404 {
            return Err(FetchError::NotFound);
        }
        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
            });
        }
        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))?;
        match envelope {
            ApiEnvelope::Success(value) => Ok(value),
            ApiEnvelope::Failure { error } => Err(FetchError::Api(error)),
        }
    }

    /// Fetch one page of the deals listing.
    pub async fn fetch_deals(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<ContentSummary>, FetchError> {
        self.get_json(&build_deals_path(offset, limit)).await
    }

    /// Fetch the full status payload for one content item.
    pub async fn fetch_content_status(
        &self,
        id: u64,
    ) -> Result<ContentStatusResponse, FetchError> {
        self.get_json(&build_status_path(id)).await
    }

    /// Fetch the signed-in viewer. Missing or rejected sessions resolve to
    /// `Ok(None)` so callers can branch on signed-out without error plumbing.
    pub async fn fetch_viewer(&self) -> Result<Option<Viewer>, FetchError> {
        match self.get_json::<Viewer>("/viewer").await {
            Ok(viewer) => Ok(Some(viewer)),
            Err(FetchError::NotFound | FetchError::Status { status: 401 | 403 }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
