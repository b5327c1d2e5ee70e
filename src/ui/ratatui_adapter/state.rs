//! Application state for the ratatui TUI
//!
//! Wraps the [`SearchSession`] with everything that only matters on screen:
//! the current mode, the card cursor, open input modals and status
//! messages.

use crate::search::{ApplyOutcome, SearchRequest, SearchResponse, SearchSession};
use crate::ui::Pager;
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::widgets::{HelpBar, KeyHint, TextInputState};
use std::time::{Duration, Instant};

/// Sort methods offered by the sort cycle (empty = relevance)
pub const SORT_METHODS: &[&str] = &["", "popularity"];

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing filters and results
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// Text input modal is active
    Input,
    /// Developer details modal is visible
    Details,
}

/// Which filter field a text input modal edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    /// The job title
    Title,
    /// Tools to add
    Tools,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the developer search page
#[derive(Debug)]
pub struct AppState {
    /// Filters, results and selection
    pub session: SearchSession,
    /// Current UI mode
    pub mode: Mode,
    /// Index of the highlighted card on the current page
    pub cursor: usize,
    /// First visible row of cards
    pub scroll_rows: usize,
    /// Card columns in the grid (set during render)
    pub grid_columns: usize,
    /// Card rows that fit on screen (set during render)
    pub grid_rows: usize,
    /// State for the text input modal
    pub text_input_state: Option<TextInputState>,
    /// Field the text input modal edits
    pub input_target: Option<InputTarget>,
    /// Tool identifiers offered for autocomplete
    pub tool_suggestions: Vec<String>,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Hints shown in the help bar
    pub hints: Vec<KeyHint>,
    /// Whether the event loop should exit
    pub should_exit: bool,
}

impl AppState {
    /// Create application state around a session
    #[must_use]
    pub fn new(session: SearchSession, tool_suggestions: Vec<String>) -> Self {
        Self {
            session,
            mode: Mode::Normal,
            cursor: 0,
            scroll_rows: 0,
            grid_columns: 1,
            grid_rows: 1,
            text_input_state: None,
            input_target: None,
            tool_suggestions,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            hints: HelpBar::default_hints(),
            should_exit: false,
        }
    }

    /// Number of cards on the current page
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.session.results().map_or(0, |r| r.hits.len())
    }

    /// Pager for the current result page
    #[must_use]
    pub fn pager(&self) -> Option<Pager> {
        self.session
            .results()
            .map(|r| Pager::new(self.session.filter().page, r.nb_hits, r.limit))
    }

    /// Move the card cursor by `delta` positions, staying on the page
    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.hit_count();
        if count == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(count - 1);
        self.adjust_scroll();
    }

    /// Move one card left/right
    pub fn cursor_step(&mut self, forward: bool) {
        self.move_cursor(if forward { 1 } else { -1 });
    }

    /// Move one row up/down
    pub fn cursor_row(&mut self, down: bool) {
        let columns = isize::try_from(self.grid_columns.max(1)).unwrap_or(1);
        self.move_cursor(if down { columns } else { -columns });
    }

    /// Adjust scroll offset to keep the cursor row visible
    pub fn adjust_scroll(&mut self) {
        let row = self.cursor / self.grid_columns.max(1);
        let rows = self.grid_rows.max(1);
        if row < self.scroll_rows {
            self.scroll_rows = row;
        } else if row >= self.scroll_rows + rows {
            self.scroll_rows = row + 1 - rows;
        }
    }

    /// Request the next or previous result page, if there is one
    pub fn turn_page(&mut self, forward: bool) -> Option<SearchRequest> {
        let pager = self.pager()?;
        let target = if forward { pager.next() } else { pager.prev() };
        let Some(page) = target else {
            self.info(if forward {
                "Already on the last page"
            } else {
                "Already on the first page"
            });
            return None;
        };
        self.session.change_page(page).ok()
    }

    /// Request results sorted by the next method in [`SORT_METHODS`]
    pub fn cycle_sort(&mut self) -> SearchRequest {
        let current = &self.session.filter().sort_method;
        let next = SORT_METHODS
            .iter()
            .position(|m| *m == current.as_str())
            .map_or(0, |i| (i + 1) % SORT_METHODS.len());
        let method = SORT_METHODS[next];
        self.info(&format!(
            "Sorting by {}",
            if method.is_empty() { "relevance" } else { method }
        ));
        self.session.change_sort(method)
    }

    /// Feed a worker response into the session
    pub fn apply_response(&mut self, response: SearchResponse) {
        match self.session.apply(response) {
            ApplyOutcome::Applied => {
                self.cursor = 0;
                self.scroll_rows = 0;
                if self.hit_count() == 0 {
                    self.add_message(MessageLevel::Warning, "No developers found".to_string());
                }
            }
            ApplyOutcome::Failed(message) => {
                self.add_message(MessageLevel::Error, format!("Search failed: {message}"));
            }
            ApplyOutcome::Stale => {}
        }
    }

    /// Open the title editor
    pub fn enter_title_input(&mut self) {
        let state = TextInputState::new("Job title").with_initial(&self.session.filter().title);
        self.text_input_state = Some(state);
        self.input_target = Some(InputTarget::Title);
        self.mode = Mode::Input;
    }

    /// Open the tool picker
    pub fn enter_tool_input(&mut self) {
        let state = TextInputState::new("Add tools")
            .with_multi_value(true)
            .with_autocomplete(
                self.tool_suggestions.clone(),
                self.session.filter().tools.clone(),
            );
        self.text_input_state = Some(state);
        self.input_target = Some(InputTarget::Tools);
        self.mode = Mode::Input;
    }

    /// Apply the text input to its field and close the modal
    pub fn submit_input(&mut self) {
        let input = self.text_input_state.take();
        let target = self.input_target.take();
        self.mode = Mode::Normal;

        let (Some(input), Some(target)) = (input, target) else {
            return;
        };
        let values = input.values();
        let filter = self.session.filter_mut();
        match target {
            InputTarget::Title => filter.set_title(values.concat()),
            InputTarget::Tools => {
                let added = values.into_iter().filter(|tool| filter.add_tool(tool.as_str())).count();
                if added > 0 {
                    self.info(&format!("Added {added} tool(s), press f to search"));
                }
            }
        }
    }

    /// Close the text input without applying it
    pub fn cancel_input(&mut self) {
        self.text_input_state = None;
        self.input_target = None;
        self.mode = Mode::Normal;
    }

    /// Remove the most recently added tool
    pub fn remove_last_tool(&mut self) {
        if let Some(tool) = self.session.filter().tools.last().cloned() {
            self.session.filter_mut().remove_tool(&tool);
            self.info(&format!("Removed {tool}"));
        }
    }

    /// Show details for the highlighted developer
    pub fn open_details(&mut self) {
        let id = self
            .session
            .results()
            .and_then(|r| r.hits.get(self.cursor))
            .map(|dev| dev.id.clone());
        if let Some(id) = id {
            self.session.open_details(id);
            self.mode = Mode::Details;
        }
    }

    /// Hide the details modal
    pub fn close_details(&mut self) {
        self.session.close_details();
        self.mode = Mode::Normal;
    }

    /// Profile URL of the developer shown in the details modal
    #[must_use]
    pub fn selected_profile_url(&self) -> Option<String> {
        self.session.selected_developer()?.html_url.clone()
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Add an info message
    pub fn info(&mut self, text: &str) {
        self.add_message(MessageLevel::Info, text.to_string());
    }

    /// Messages that have not expired yet
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Drop expired messages
    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::developer_page;

    fn state_with_page(count: usize, total: u64, limit: u32) -> AppState {
        let mut state = AppState::new(SearchSession::new(), vec!["go".into(), "rust".into()]);
        let request = state.session.mount().unwrap();
        state.apply_response(SearchResponse {
            seq: request.seq,
            outcome: Ok(developer_page(count, total, limit)),
        });
        state
    }

    #[test]
    fn test_cursor_stays_on_page() {
        let mut state = state_with_page(5, 5, 20);
        state.grid_columns = 2;

        state.cursor_row(true);
        assert_eq!(state.cursor, 2);
        state.cursor_step(true);
        assert_eq!(state.cursor, 3);
        state.cursor_row(true);
        assert_eq!(state.cursor, 4);
        state.cursor_step(true);
        assert_eq!(state.cursor, 4);
        state.move_cursor(-10);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut state = state_with_page(10, 10, 20);
        state.grid_columns = 2;
        state.grid_rows = 2;

        state.move_cursor(6);
        assert_eq!(state.scroll_rows, 2);
        state.move_cursor(-6);
        assert_eq!(state.scroll_rows, 0);
    }

    #[test]
    fn test_turn_page_respects_bounds() {
        let mut state = state_with_page(20, 45, 20);

        assert!(state.turn_page(false).is_none());
        let request = state.turn_page(true).unwrap();
        assert_eq!(request.query.page, 2);
        assert_eq!(state.session.filter().page, 2);
    }

    #[test]
    fn test_cycle_sort_wraps() {
        let mut state = state_with_page(1, 1, 20);

        let request = state.cycle_sort();
        assert_eq!(request.query.sort_type, "popularity");
        let request = state.cycle_sort();
        assert_eq!(request.query.sort_type, "");
    }

    #[test]
    fn test_failed_response_reports_error() {
        let mut state = state_with_page(3, 3, 20);
        let request = state.session.submit();
        state.apply_response(SearchResponse {
            seq: request.seq,
            outcome: Err(crate::api::ApiError::Decode("bad body".to_string())),
        });

        assert_eq!(state.hit_count(), 3);
        let last = state.active_messages().pop().unwrap();
        assert_eq!(last.level, MessageLevel::Error);
        assert!(last.text.contains("bad body"));
    }

    #[test]
    fn test_title_input_round_trip() {
        let mut state = state_with_page(1, 1, 20);
        state.enter_title_input();
        assert_eq!(state.mode, Mode::Input);

        for c in "Backend".chars() {
            state.text_input_state.as_mut().unwrap().insert_char(c);
        }
        state.submit_input();

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.session.filter().title, "Backend");
        assert!(state.text_input_state.is_none());
    }

    #[test]
    fn test_tool_input_adds_new_tools_only() {
        let mut state = state_with_page(1, 1, 20);
        state.session.filter_mut().add_tool("go");
        state.enter_tool_input();
        state.text_input_state = Some(
            state
                .text_input_state
                .take()
                .unwrap()
                .with_initial("go rust"),
        );
        state.submit_input();

        assert_eq!(state.session.filter().tools, vec!["go".to_string(), "rust".to_string()]);

        state.remove_last_tool();
        assert_eq!(state.session.filter().tools, vec!["go".to_string()]);
    }

    #[test]
    fn test_details_follow_cursor() {
        let mut state = state_with_page(3, 3, 20);
        state.move_cursor(1);
        state.open_details();

        assert_eq!(state.mode, Mode::Details);
        assert_eq!(state.session.selection().selected_id.as_deref(), Some("2"));
        assert_eq!(
            state.selected_profile_url().as_deref(),
            Some("https://github.com/dev2")
        );

        state.close_details();
        assert_eq!(state.mode, Mode::Normal);
        assert!(!state.session.selection().modal_visible);
    }
}
