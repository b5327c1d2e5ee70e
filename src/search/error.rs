//! Search-specific error types
//!
//! These errors can occur while driving a search session: the backend
//! failed, the worker thread went away, or a handler was given input the
//! session cannot act on.

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search API call failed
    #[error("Search API error: {0}")]
    Api(#[from] crate::api::ApiError),

    /// The background search worker stopped accepting requests
    #[error("Search worker disconnected")]
    WorkerDisconnected,

    /// Pages start at 1
    #[error("Invalid page number: {0}")]
    InvalidPage(u32),
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
