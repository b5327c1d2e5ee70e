//! devfinder - find developers and browse top projects from the terminal
//!
//! This library keeps a developer-search page in sync with a remote search
//! API. The pieces are:
//!
//! - [`search::FilterState`]: the filter panel (title, tools, sort, OSS flag, page)
//! - [`search::build_developer_query`]: a pure mapping from filter state to query parameters
//! - [`search::SearchSession`]: the event handlers (submit, page, sort, reset)
//!   and the sequenced fetch-and-replace of results
//! - [`search::SearchWorker`]: background threads running searches against an
//!   [`api::SearchBackend`]
//! - [`api::ApiClient`]: the HTTP client for the search API
//! - [`ui`]: the terminal rendering of the search and home pages

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod logging;
pub mod output;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum DevfinderError {
    /// Search API error
    #[error("API error: {0}")]
    Api(#[from] api::ApiError),
    /// Search error
    #[error("Search error: {0}")]
    Search(#[from] search::SearchError),
    /// Interactive UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used by the command layer
pub type Result<T> = std::result::Result<T, DevfinderError>;
