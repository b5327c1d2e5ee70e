//! HTTP client for the search API

use crate::api::error::{ApiError, Result};
use crate::api::types::{ApiResponse, Developer, PagedResult, Project};
use crate::api::SearchBackend;
use crate::search::query::{DeveloperQuery, ProjectQuery};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Path of the developer search endpoint, relative to the API URL
const DEVELOPERS_PATH: &str = "developers/search";

/// Path of the project search endpoint, relative to the API URL
const PROJECTS_PATH: &str = "projects/search";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the developer and project search endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the URL is not http(s), or
    /// `ApiError::Network` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: trimmed.to_string(),
            client,
        })
    }

    /// Base URL every endpoint is resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn fetch<T, Q>(&self, path: &str, query: &Q) -> Result<PagedResult<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + std::fmt::Debug,
    {
        let url = self.endpoint(path);
        debug!(%url, ?query, "Sending search request");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header(ACCEPT, "application/json")
            .header(
                USER_AGENT,
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown error");
            let body = response.text().unwrap_or_default();
            let message = if body.trim().is_empty() {
                reason.to_string()
            } else {
                body
            };
            warn!(status = status.as_u16(), %url, "Search API returned an error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text()?;
        let parsed: ApiResponse<T> =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        debug!(
            hits = parsed.result.hits.len(),
            total = parsed.result.nb_hits,
            "Search response received"
        );
        Ok(parsed.result)
    }
}

impl SearchBackend for ApiClient {
    fn search_developers(&self, query: &DeveloperQuery) -> Result<PagedResult<Developer>> {
        self.fetch(DEVELOPERS_PATH, query)
    }

    fn search_projects(&self, query: &ProjectQuery) -> Result<PagedResult<Project>> {
        self.fetch(PROJECTS_PATH, query)
    }
}
