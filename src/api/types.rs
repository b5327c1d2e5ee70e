//! Wire types for the search API
//!
//! Result items are deserialized leniently: only the fields needed for
//! display are modelled and everything optional defaults to `None`, so
//! additions on the API side do not break the client.

use serde::{Deserialize, Serialize};

/// Envelope returned by both search endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub result: PagedResult<T>,
}

/// One page of search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagedResult<T> {
    /// Items on this page, in ranking order
    #[serde(default = "Vec::new")]
    pub hits: Vec<T>,
    /// Total number of matching items across all pages
    #[serde(rename = "nbHits", default)]
    pub nb_hits: u64,
    /// Page size used by the backend
    #[serde(default)]
    pub limit: u32,
}

impl<T> PagedResult<T> {
    /// Create a result page
    #[must_use]
    pub const fn new(hits: Vec<T>, nb_hits: u64, limit: u32) -> Self {
        Self {
            hits,
            nb_hits,
            limit,
        }
    }

    /// An empty page
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), 0, 0)
    }

    /// Whether the page has nothing to render
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A developer profile returned by the developer search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Developer {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub public_repos: Option<u64>,
    #[serde(default)]
    pub followers: Option<u64>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Developer {
    /// Name to show in lists: the full name when present, else the login
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

/// A repository returned by the project search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
}

/// Accept ids encoded either as JSON numbers or strings
fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}
