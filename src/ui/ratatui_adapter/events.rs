//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events onto filter edits and search requests.
//! Handlers never talk to the network: anything that needs a search
//! returns [`EventResult::Search`] and the event loop hands the request to
//! the worker.

use super::state::{AppState, Mode};
use crate::search::SearchRequest;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Something the event loop should do outside the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalAction {
    /// Open a URL in the system browser
    OpenUrl(String),
    /// Copy text to the clipboard
    CopyToClipboard(String),
}

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the browser
    Exit,
    /// Run a search
    Search(SearchRequest),
    /// Perform an external action
    Action(ExternalAction),
    /// No action taken
    Ignored,
}

impl From<Option<SearchRequest>> for EventResult {
    fn from(request: Option<SearchRequest>) -> Self {
        request.map_or(Self::Continue, Self::Search)
    }
}

/// Handle events in normal mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            EventResult::Exit
        }

        // Filters
        (KeyCode::Char('t'), _) => {
            state.enter_title_input();
            EventResult::Continue
        }
        (KeyCode::Char('c'), _) => {
            state.session.clear_title();
            EventResult::Continue
        }
        (KeyCode::Char('a'), _) => {
            state.enter_tool_input();
            EventResult::Continue
        }
        (KeyCode::Char('d'), _) => {
            state.remove_last_tool();
            EventResult::Continue
        }
        (KeyCode::Char('o'), _) => {
            state.session.filter_mut().toggle_oss();
            EventResult::Continue
        }
        (KeyCode::Char('f'), _) => EventResult::Search(state.session.submit()),
        (KeyCode::Char('s'), _) => EventResult::Search(state.cycle_sort()),
        (KeyCode::Char('r'), _) => {
            state.cursor = 0;
            state.scroll_rows = 0;
            state.info("Filters reset");
            EventResult::Search(state.session.reset())
        }

        // Pages
        (KeyCode::Char('n') | KeyCode::PageDown, _) => state.turn_page(true).into(),
        (KeyCode::Char('p') | KeyCode::PageUp, _) => state.turn_page(false).into(),

        // Cards
        (KeyCode::Left | KeyCode::Char('h'), _) => {
            state.cursor_step(false);
            EventResult::Continue
        }
        (KeyCode::Right | KeyCode::Char('l'), _) => {
            state.cursor_step(true);
            EventResult::Continue
        }
        (KeyCode::Up | KeyCode::Char('k'), _) => {
            state.cursor_row(false);
            EventResult::Continue
        }
        (KeyCode::Down | KeyCode::Char('j'), _) => {
            state.cursor_row(true);
            EventResult::Continue
        }
        (KeyCode::Enter, _) => {
            state.open_details();
            EventResult::Continue
        }

        (KeyCode::F(1) | KeyCode::Char('?'), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while the details modal is open
fn handle_details_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('b') | KeyCode::Char('y') => {
            let Some(url) = state.selected_profile_url() else {
                state.info("This developer has no profile URL");
                return EventResult::Continue;
            };
            if key.code == KeyCode::Char('b') {
                EventResult::Action(ExternalAction::OpenUrl(url))
            } else {
                EventResult::Action(ExternalAction::CopyToClipboard(url))
            }
        }
        _ => {
            state.close_details();
            EventResult::Continue
        }
    }
}

/// Handle events while a text input modal is open
fn handle_input_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Esc {
        state.cancel_input();
        return EventResult::Continue;
    }
    if key.code == KeyCode::Enter {
        state.submit_input();
        return EventResult::Continue;
    }

    let Some(input) = state.text_input_state.as_mut() else {
        state.cancel_input();
        return EventResult::Continue;
    };

    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => input.clear_line(),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => input.delete_word_backwards(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => input.insert_char(c),
        (KeyCode::Backspace, _) => input.backspace(),
        (KeyCode::Delete, _) => input.delete(),
        (KeyCode::Left, _) => input.cursor_left(),
        (KeyCode::Right, _) => input.cursor_right(),
        (KeyCode::Home, _) => input.cursor_home(),
        (KeyCode::End, _) => input.cursor_end(),
        (KeyCode::Tab, _) => input.accept_suggestion(),
        (KeyCode::Up, _) => input.suggestion_up(),
        (KeyCode::Down, _) => input.suggestion_down(),
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

/// Handle a key event in the current mode
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Help => {
            // Any key closes help
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        Mode::Input => handle_input_mode(state, key),
        Mode::Details => handle_details_mode(state, key),
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    if state.mode != Mode::Normal {
        return EventResult::Ignored;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_row(false);
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_row(true);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
