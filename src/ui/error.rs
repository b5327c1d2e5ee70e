//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The search worker could not take a request
    #[error("Search error: {0}")]
    Search(#[from] crate::search::SearchError),

    /// An external action (browser, clipboard) failed
    #[error("Action failed: {0}")]
    ActionFailed(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
