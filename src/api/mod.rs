//! Search API access
//!
//! This module wraps the backend search endpoints used by the developer
//! search page and the home page. The [`SearchBackend`] trait is the seam
//! between the search session and the network: the production
//! implementation is [`ApiClient`], tests use an in-memory backend.
//!
//! # Endpoints
//!
//! - `GET {api_url}/developers/search` - paged developer search
//! - `GET {api_url}/projects/search` - paged project search (top projects)
//!
//! Both endpoints answer with `{ "result": { "hits": [...], "nbHits": n, "limit": l } }`.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use types::{ApiResponse, Developer, PagedResult, Project};

use crate::search::query::{DeveloperQuery, ProjectQuery};

/// Backend capable of answering developer and project searches
///
/// Implementations must be `Send + Sync` so they can be moved into the
/// search worker thread.
pub trait SearchBackend: Send + Sync {
    /// Search developers matching the given query parameters
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the response cannot be decoded.
    fn search_developers(&self, query: &DeveloperQuery) -> Result<PagedResult<Developer>>;

    /// Search projects matching the given query parameters
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the response cannot be decoded.
    fn search_projects(&self, query: &ProjectQuery) -> Result<PagedResult<Project>>;
}

impl<T: SearchBackend + ?Sized> SearchBackend for std::sync::Arc<T> {
    fn search_developers(&self, query: &DeveloperQuery) -> Result<PagedResult<Developer>> {
        (**self).search_developers(query)
    }

    fn search_projects(&self, query: &ProjectQuery) -> Result<PagedResult<Project>> {
        (**self).search_projects(query)
    }
}
