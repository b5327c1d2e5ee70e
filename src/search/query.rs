//! Query builder for the search API
//!
//! Turns the filter panel's [`FilterState`] into the query parameters sent
//! to the backend. Derivation is pure: the same state and overrides always
//! produce the same query, nothing else is consulted.
//!
//! Overrides are applied last and win field by field. The stored page is
//! only honoured while search mode is active; the default listing always
//! asks for page 1 unless a page override is given (pagination clicks).

use crate::search::filter::FilterState;
use serde::{Deserialize, Serialize};

/// Sort method used for the home page's top projects
pub const TOP_PROJECTS_SORT: &str = "popularity";

/// Page requested for the home page's top projects
pub const TOP_PROJECTS_PAGE: u32 = 1;

/// Number of top projects shown on the home page
pub const DEFAULT_TOP_PROJECTS: u32 = 6;

/// Query parameters for the developer search endpoint
///
/// Empty string fields are left out of the query string so the default
/// listing request stays minimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperQuery {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub title: String,
    /// Space-joined tool identifiers
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub tools: String,
    pub page: u32,
    #[serde(rename = "sortType", skip_serializing_if = "String::is_empty", default)]
    pub sort_type: String,
    #[serde(rename = "ossFilter")]
    pub oss_filter: bool,
}

/// Partial set of query fields that replace derived values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOverrides {
    pub title: Option<String>,
    pub tools: Option<String>,
    pub page: Option<u32>,
    pub sort_type: Option<String>,
    pub oss_filter: Option<bool>,
}

impl QueryOverrides {
    /// No overrides: the query is derived from state only
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Override the requested page
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Override the sort method
    #[must_use]
    pub fn sort_type(mut self, sort_type: impl Into<String>) -> Self {
        self.sort_type = Some(sort_type.into());
        self
    }

    /// Override the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Override the space-joined tool list
    #[must_use]
    pub fn tools(mut self, tools: impl Into<String>) -> Self {
        self.tools = Some(tools.into());
        self
    }

    /// Override the open-source filter
    #[must_use]
    pub fn oss_filter(mut self, oss_filter: bool) -> Self {
        self.oss_filter = Some(oss_filter);
        self
    }

    /// Whether no field is overridden
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.tools.is_none()
            && self.page.is_none()
            && self.sort_type.is_none()
            && self.oss_filter.is_none()
    }
}

/// Build developer search parameters from filter state and overrides
///
/// # Examples
///
/// ```
/// use devfinder::search::{FilterState, QueryOverrides, build_developer_query};
///
/// let mut state = FilterState::default();
/// state.title = "Backend".into();
/// state.page = 3;
///
/// // Not in search mode yet: the stored page is ignored
/// let query = build_developer_query(&state, &QueryOverrides::none());
/// assert_eq!(query.page, 1);
///
/// // An explicit page override always wins
/// let query = build_developer_query(&state, &QueryOverrides::none().page(2));
/// assert_eq!(query.page, 2);
/// ```
#[must_use]
pub fn build_developer_query(state: &FilterState, overrides: &QueryOverrides) -> DeveloperQuery {
    let derived = DeveloperQuery {
        title: state.title.clone(),
        tools: state.tools.join(" "),
        page: if state.search_mode_active { state.page } else { 1 },
        sort_type: state.sort_method.clone(),
        oss_filter: state.oss_only,
    };

    DeveloperQuery {
        title: overrides.title.clone().unwrap_or(derived.title),
        tools: overrides.tools.clone().unwrap_or(derived.tools),
        page: overrides.page.unwrap_or(derived.page),
        sort_type: overrides.sort_type.clone().unwrap_or(derived.sort_type),
        oss_filter: overrides.oss_filter.unwrap_or(derived.oss_filter),
    }
}

/// Query parameters for the project search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectQuery {
    pub page: u32,
    pub count: u32,
    #[serde(rename = "sortMethod", skip_serializing_if = "String::is_empty", default)]
    pub sort_method: String,
}

impl ProjectQuery {
    /// Query used by the home page: first page of the most popular projects
    #[must_use]
    pub fn top_projects(count: u32) -> Self {
        Self {
            page: TOP_PROJECTS_PAGE,
            count,
            sort_method: TOP_PROJECTS_SORT.to_string(),
        }
    }
}

impl Default for ProjectQuery {
    fn default() -> Self {
        Self::top_projects(DEFAULT_TOP_PROJECTS)
    }
}
