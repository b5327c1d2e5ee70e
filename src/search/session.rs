//! Developer search session
//!
//! This module implements the search trigger logic of the developer search
//! page. A [`SearchSession`] owns the filter state, the last accepted result
//! page and the details selection. Every handler that needs fresh results
//! returns a [`SearchRequest`] instead of calling the API itself; the caller
//! hands the request to a backend (directly or through the
//! [`SearchWorker`](super::worker::SearchWorker)) and feeds the
//! [`SearchResponse`] back through [`SearchSession::apply`].
//!
//! # Workflow
//!
//! ```text
//! Session created (inactive)
//!     ↓
//! mount() ──────────────→ default listing request
//!     ↓
//! ┌─→ User action
//! │   ├─ submit()       → search mode on, page 1, request
//! │   ├─ change_page(n) → page n, request
//! │   ├─ change_sort(s) → sort override, request
//! │   ├─ reset()        → defaults, search mode off, request (page 1)
//! │   └─ clear_title()  → title cleared, page 1, no request
//! │       ↓
//! │   apply(response)
//! │   ├─ seq == latest issued → results replaced (or error kept aside)
//! └── └─ older seq           → discarded
//! ```
//!
//! Requests are never cancelled. Instead each one carries a sequence number
//! and only the response to the most recently issued request is accepted,
//! so a slow response can never overwrite a newer one.

use crate::api::{self, Developer, PagedResult};
use crate::search::error::{Result, SearchError};
use crate::search::filter::FilterState;
use crate::search::query::{DeveloperQuery, QueryOverrides};

/// A developer search the session wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Monotonically increasing request number
    pub seq: u64,
    /// Query parameters to send
    pub query: DeveloperQuery,
}

/// Outcome of a [`SearchRequest`]
#[derive(Debug)]
pub struct SearchResponse {
    /// Sequence number of the request this answers
    pub seq: u64,
    /// Result page or the error the backend returned
    pub outcome: api::Result<PagedResult<Developer>>,
}

/// What [`SearchSession::apply`] did with a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The response was current and replaced the results
    Applied,
    /// A newer request was issued since; the response was dropped
    Stale,
    /// The response was current but the search failed; previous results kept
    Failed(String),
}

/// Selected developer and details modal visibility
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Id of the developer shown in the details modal
    pub selected_id: Option<String>,
    /// Whether the details modal is open
    pub modal_visible: bool,
}

/// Search session for the developer search page
#[derive(Debug, Default)]
pub struct SearchSession {
    filter: FilterState,
    results: Option<PagedResult<Developer>>,
    selection: SelectionState,
    mounted: bool,
    next_seq: u64,
    latest_issued: Option<u64>,
    latest_settled: Option<u64>,
    last_error: Option<String>,
}

impl SearchSession {
    /// Create a session with default filters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with pre-filled filters
    ///
    /// The filters are shown in the panel but search mode stays off until
    /// the first submit, exactly like a user typing before pressing Filter.
    #[must_use]
    pub fn with_filter(mut filter: FilterState) -> Self {
        filter.search_mode_active = false;
        filter.page = 1;
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Request the default unfiltered listing
    ///
    /// Only the first call issues a request; later calls return `None`.
    pub fn mount(&mut self) -> Option<SearchRequest> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        let query = FilterState::default().to_query(&QueryOverrides::none());
        Some(self.issue(query))
    }

    /// Submit the filter form
    ///
    /// Enters search mode and searches from the first page.
    pub fn submit(&mut self) -> SearchRequest {
        self.filter.search_mode_active = true;
        self.filter.page = 1;
        let query = self.filter.to_query(&QueryOverrides::none());
        self.issue(query)
    }

    /// Jump to another result page
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidPage` for page 0.
    pub fn change_page(&mut self, page: u32) -> Result<SearchRequest> {
        if page == 0 {
            return Err(SearchError::InvalidPage(page));
        }
        self.filter.page = page;
        let query = self.filter.to_query(&QueryOverrides::none().page(page));
        Ok(self.issue(query))
    }

    /// Change the sort method and search again
    ///
    /// Search mode is left as it is.
    pub fn change_sort(&mut self, method: impl Into<String>) -> SearchRequest {
        let method = method.into();
        self.filter.sort_method.clone_from(&method);
        let query = self.filter.to_query(&QueryOverrides::none().sort_type(method));
        self.issue(query)
    }

    /// Leave search mode, restore default filters and fetch the default listing
    pub fn reset(&mut self) -> SearchRequest {
        self.filter.reset();
        self.results = None;
        self.last_error = None;
        let query = self.filter.to_query(&QueryOverrides::none().page(1));
        self.issue(query)
    }

    /// Clear only the title
    ///
    /// Unlike [`reset`](Self::reset) this does not search again; the new
    /// criteria take effect on the next submit.
    pub fn clear_title(&mut self) {
        self.filter.clear_title();
    }

    /// Apply a search response
    ///
    /// Responses to anything but the latest issued request are discarded.
    /// A failed search leaves the previous results on display.
    pub fn apply(&mut self, response: SearchResponse) -> ApplyOutcome {
        if self.latest_issued != Some(response.seq) {
            tracing::debug!(
                seq = response.seq,
                latest = ?self.latest_issued,
                "Discarding stale search response"
            );
            return ApplyOutcome::Stale;
        }

        self.latest_settled = Some(response.seq);

        match response.outcome {
            Ok(page) => {
                tracing::debug!(
                    seq = response.seq,
                    hits = page.hits.len(),
                    total = page.nb_hits,
                    "Search results applied"
                );
                self.results = Some(page);
                self.last_error = None;
                ApplyOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(seq = response.seq, error = %err, "Search failed, keeping previous results");
                let message = err.to_string();
                self.last_error = Some(message.clone());
                ApplyOutcome::Failed(message)
            }
        }
    }

    /// Whether the latest issued request has not been answered yet
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.latest_issued.is_some() && self.latest_issued != self.latest_settled
    }

    /// Current filter state
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Mutable filter state for field edits (title, tools, OSS toggle)
    pub const fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    /// Last accepted result page, if any
    #[must_use]
    pub const fn results(&self) -> Option<&PagedResult<Developer>> {
        self.results.as_ref()
    }

    /// Error message from the latest failed search, if it was the latest request
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Sequence number of the most recently issued request
    #[must_use]
    pub const fn latest_seq(&self) -> Option<u64> {
        self.latest_issued
    }

    /// Details selection
    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Open the details modal for a developer
    pub fn open_details(&mut self, developer_id: impl Into<String>) {
        self.selection.selected_id = Some(developer_id.into());
        self.selection.modal_visible = true;
    }

    /// Close the details modal and forget the selection
    pub fn close_details(&mut self) {
        self.selection.selected_id = None;
        self.selection.modal_visible = false;
    }

    /// The developer currently selected for details, if still on the page
    #[must_use]
    pub fn selected_developer(&self) -> Option<&Developer> {
        let id = self.selection.selected_id.as_deref()?;
        self.results.as_ref()?.hits.iter().find(|dev| dev.id == id)
    }

    fn issue(&mut self, query: DeveloperQuery) -> SearchRequest {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest_issued = Some(seq);
        tracing::debug!(seq, ?query, "Issuing developer search");
        SearchRequest { seq, query }
    }
}
