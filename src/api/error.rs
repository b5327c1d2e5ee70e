//! Search API error types

use thiserror::Error;

/// Errors returned by the search API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, TLS, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("Search API returned {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// The response body was not a valid search result
    #[error("Failed to decode search response: {0}")]
    Decode(String),

    /// The configured API URL cannot be used
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Whether this error came from the transport rather than the API itself
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Result type for search API operations
pub type Result<T> = std::result::Result<T, ApiError>;
