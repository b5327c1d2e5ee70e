//! Filter panel state
//!
//! [`FilterState`] is the single record behind the developer search form:
//! free-text title, selected tools, sort method, the open-source filter,
//! the current page and whether an explicit search has been submitted.
//!
//! Field edits live here as small methods so that every handler in the
//! session goes through the same rules (page resets while searching,
//! duplicate tools ignored, ...).

use crate::search::query::{DeveloperQuery, QueryOverrides, build_developer_query};
use serde::{Deserialize, Serialize};

/// User-adjustable search criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text job title
    pub title: String,
    /// Selected tool identifiers, in selection order
    pub tools: Vec<String>,
    /// Sort method understood by the backend (empty = relevance)
    pub sort_method: String,
    /// Only developers with open-source contributions
    pub oss_only: bool,
    /// Current page, starting at 1
    pub page: u32,
    /// Whether an explicit filtered search is active
    pub search_mode_active: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            title: String::new(),
            tools: Vec::new(),
            sort_method: String::new(),
            oss_only: false,
            page: 1,
            search_mode_active: false,
        }
    }
}

impl FilterState {
    /// Build search parameters for this state
    #[must_use]
    pub fn to_query(&self, overrides: &QueryOverrides) -> DeveloperQuery {
        build_developer_query(self, overrides)
    }

    /// Replace the title
    ///
    /// While search mode is active the page goes back to 1 so the next
    /// submit starts from the top of the new result set.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.restart_paging_if_searching();
    }

    /// Clear the title and go back to page 1 (no refetch happens here)
    pub fn clear_title(&mut self) {
        self.title.clear();
        self.page = 1;
    }

    /// Replace the whole tool list
    ///
    /// Blank entries are dropped and duplicates keep their first position.
    pub fn set_tools<I, S>(&mut self, tools: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for tool in tools {
            let tool = tool.into().trim().to_string();
            if !tool.is_empty() && !normalized.contains(&tool) {
                normalized.push(tool);
            }
        }
        self.tools = normalized;
        self.restart_paging_if_searching();
    }

    /// Add a tool to the selection
    ///
    /// Returns `false` if the tool was blank or already selected.
    pub fn add_tool(&mut self, tool: impl Into<String>) -> bool {
        let tool = tool.into().trim().to_string();
        if tool.is_empty() || self.tools.contains(&tool) {
            return false;
        }
        self.tools.push(tool);
        self.restart_paging_if_searching();
        true
    }

    /// Remove a tool from the selection
    ///
    /// Returns `false` if the tool was not selected.
    pub fn remove_tool(&mut self, tool: &str) -> bool {
        let before = self.tools.len();
        self.tools.retain(|t| t != tool);
        if self.tools.len() == before {
            return false;
        }
        self.restart_paging_if_searching();
        true
    }

    /// Flip the open-source filter
    pub const fn toggle_oss(&mut self) {
        self.oss_only = !self.oss_only;
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether any criterion differs from the default listing
    #[must_use]
    pub fn has_criteria(&self) -> bool {
        !self.title.is_empty() || !self.tools.is_empty() || self.oss_only
    }

    const fn restart_paging_if_searching(&mut self) {
        if self.search_mode_active {
            self.page = 1;
        }
    }
}
