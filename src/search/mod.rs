//! Developer search core
//!
//! Keeps the developer search page's filter state in sync with the query
//! sent to the search API:
//! 1. [`FilterState`] holds what the user picked in the filter panel
//! 2. [`build_developer_query`] derives the API query from it
//! 3. [`SearchSession`] turns user actions into sequenced requests and
//!    accepts only the latest response
//! 4. [`SearchWorker`] runs requests off the UI thread

pub mod error;
pub mod filter;
pub mod query;
pub mod session;
pub mod worker;

pub use error::SearchError;
pub use filter::FilterState;
pub use query::{
    DeveloperQuery, ProjectQuery, QueryOverrides, TOP_PROJECTS_SORT, build_developer_query,
};
pub use session::{ApplyOutcome, SearchRequest, SearchResponse, SearchSession, SelectionState};
pub use worker::SearchWorker;
