//! Testing utilities for devfinder
//!
//! This module provides an in-memory [`MockBackend`] standing in for the
//! search API, a [`RecordingWriter`] capturing command output, plus small
//! fixture builders for developers and projects.
//!
//! Only available when compiled with `cfg(test)`.

use crate::api::{ApiError, Developer, PagedResult, Project, SearchBackend};
use crate::search::{DeveloperQuery, ProjectQuery};
use crate::ui::OutputWriter;
use std::cell::RefCell;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Build a developer with the given id and login
#[must_use]
pub fn developer(id: &str, login: &str) -> Developer {
    Developer {
        id: id.to_string(),
        login: login.to_string(),
        html_url: Some(format!("https://github.com/{login}")),
        ..Developer::default()
    }
}

/// Build a page of `count` developers out of `total` matches
#[must_use]
pub fn developer_page(count: usize, total: u64, limit: u32) -> PagedResult<Developer> {
    let hits = (1..=count)
        .map(|i| developer(&i.to_string(), &format!("dev{i}")))
        .collect();
    PagedResult::new(hits, total, limit)
}

/// Build a project with a name and star count
#[must_use]
pub fn project(name: &str, stars: u64) -> Project {
    Project {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        language: Some("Rust".to_string()),
        html_url: Some(format!("https://github.com/example/{name}")),
        stargazers_count: stars,
    }
}

/// In-memory search backend
///
/// Returns canned pages and records every query it receives. Clones share
/// the same recorded queries, so a test can keep one clone and hand the
/// other to a worker thread.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    developers: PagedResult<Developer>,
    projects: PagedResult<Project>,
    fail_status: Option<u16>,
    delay: Option<Duration>,
    developer_queries: Arc<Mutex<Vec<DeveloperQuery>>>,
    project_queries: Arc<Mutex<Vec<ProjectQuery>>>,
}

impl MockBackend {
    /// Backend answering developer searches with a generated page
    #[must_use]
    pub fn with_developers(count: usize, total: u64, limit: u32) -> Self {
        Self {
            developers: developer_page(count, total, limit),
            ..Self::default()
        }
    }

    /// Backend answering project searches with the given projects
    #[must_use]
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let total = projects.len() as u64;
        Self {
            projects: PagedResult::new(projects, total, 6),
            ..Self::default()
        }
    }

    /// Backend failing every call with the given HTTP status
    #[must_use]
    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    /// Make every developer search sleep for `delay` before answering
    #[must_use]
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Developer queries received so far
    ///
    /// # Panics
    /// Panics if the query log mutex is poisoned.
    #[must_use]
    pub fn developer_queries(&self) -> Vec<DeveloperQuery> {
        self.developer_queries.lock().unwrap().clone()
    }

    /// Project queries received so far
    ///
    /// # Panics
    /// Panics if the query log mutex is poisoned.
    #[must_use]
    pub fn project_queries(&self) -> Vec<ProjectQuery> {
        self.project_queries.lock().unwrap().clone()
    }

    fn failure(&self) -> Option<ApiError> {
        self.fail_status.map(|status| ApiError::Status {
            status,
            message: "mock failure".to_string(),
        })
    }
}

impl SearchBackend for MockBackend {
    fn search_developers(&self, query: &DeveloperQuery) -> crate::api::Result<PagedResult<Developer>> {
        self.developer_queries.lock().unwrap().push(query.clone());
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        match self.failure() {
            Some(err) => Err(err),
            None => Ok(self.developers.clone()),
        }
    }

    fn search_projects(&self, query: &ProjectQuery) -> crate::api::Result<PagedResult<Project>> {
        self.project_queries.lock().unwrap().push(query.clone());
        match self.failure() {
            Some(err) => Err(err),
            None => Ok(self.projects.clone()),
        }
    }
}

/// Output writer that keeps every line for later assertions
#[derive(Debug, Default)]
pub struct RecordingWriter {
    lines: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl RecordingWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything except errors, in order
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl OutputWriter for RecordingWriter {
    fn write(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.write(message);
    }

    fn warning(&self, message: &str) {
        self.write(message);
    }

    fn info(&self, message: &str) {
        self.write(message);
    }
}
