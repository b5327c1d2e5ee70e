//! Developer search page event loop
//!
//! Owns the terminal while the browser is open. Each iteration applies any
//! finished searches, redraws, then waits briefly for input; searches run
//! on the [`SearchWorker`] so typing never blocks on the network.

use super::events::{EventResult, ExternalAction, poll_and_handle};
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{
    CARD_HEIGHT, DetailsModal, FilterPanel, HelpBar, HelpOverlay, PaginationBar, ResultGrid,
    StatusBar, TextInputModal,
};
use crate::search::{SearchSession, SearchWorker};
use crate::ui::error::{Result, UiError};
use crate::ui::output::MessageLevel;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Interactive developer search page
pub struct DeveloperBrowser {
    theme: Theme,
    tool_suggestions: Vec<String>,
}

impl DeveloperBrowser {
    /// Create a browser offering `tool_suggestions` in the tool picker
    #[must_use]
    pub fn new(tool_suggestions: Vec<String>) -> Self {
        Self {
            theme: Theme::default(),
            tool_suggestions,
        }
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the browser until the user quits
    ///
    /// The default listing is requested as soon as the page is shown.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be driven or the search
    /// worker has shut down.
    pub fn run(&self, worker: &SearchWorker, session: SearchSession) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, worker, session);
        Self::cleanup_terminal()?;
        result
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        worker: &SearchWorker,
        session: SearchSession,
    ) -> Result<()> {
        let mut state = AppState::new(session, self.tool_suggestions.clone());

        if let Some(request) = state.session.mount() {
            worker.submit(request)?;
        }

        while !state.should_exit {
            for response in worker.drain() {
                state.apply_response(response);
            }
            state.cleanup_messages();

            terminal.draw(|frame| render(frame, &mut state, &self.theme))?;

            match poll_and_handle(&mut state, POLL_INTERVAL)? {
                EventResult::Exit => state.should_exit = true,
                EventResult::Search(request) => worker.submit(request)?,
                EventResult::Action(action) => match perform_action(&action) {
                    Ok(done) => state.add_message(MessageLevel::Success, done),
                    Err(err) => {
                        tracing::warn!(error = %err, "Browser action failed");
                        state.add_message(MessageLevel::Error, err.to_string());
                    }
                },
                EventResult::Continue | EventResult::Ignored => {}
            }
        }

        Ok(())
    }
}

/// Open a URL or copy it, returning a confirmation message
fn perform_action(action: &ExternalAction) -> Result<String> {
    match action {
        ExternalAction::OpenUrl(url) => {
            open::that(url).map_err(|e| UiError::ActionFailed(format!("Could not open {url}: {e}")))?;
            Ok(format!("Opened {url}"))
        }
        ExternalAction::CopyToClipboard(text) => {
            arboard::Clipboard::new()
                .and_then(|mut clipboard| clipboard.set_text(text.clone()))
                .map_err(|e| UiError::ActionFailed(format!("Could not copy to clipboard: {e}")))?;
            Ok(format!("Copied {text}"))
        }
    }
}

/// Draw the whole page
pub(crate) fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let [filters, top_pager, grid, bottom_pager, status, help] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    state.grid_columns = ResultGrid::columns_for(grid.width);
    state.grid_rows = ResultGrid::rows_for(grid.height);
    state.adjust_scroll();

    let loading = state.session.is_loading();
    let results = state.session.results();
    let page = state.session.filter().page;

    frame.render_widget(
        FilterPanel::new(state.session.filter(), theme).loading(loading),
        filters,
    );
    frame.render_widget(PaginationBar::new(results, page, theme), top_pager);
    frame.render_widget(
        ResultGrid::new(results, theme)
            .cursor(state.cursor)
            .scroll(state.scroll_rows),
        grid,
    );
    frame.render_widget(PaginationBar::new(results, page, theme), bottom_pager);

    let summary = results.map(|r| format!("{} developers", r.nb_hits));
    let messages = state.active_messages();
    frame.render_widget(
        StatusBar::new(&messages, theme).with_summary(summary.as_deref()),
        status,
    );
    frame.render_widget(HelpBar::new(&state.hints, theme), help);

    match state.mode {
        Mode::Help => frame.render_widget(HelpOverlay::new(theme), frame.area()),
        Mode::Input => {
            if let Some(input) = &state.text_input_state {
                frame.render_widget(TextInputModal::new(input, theme), frame.area());
            }
        }
        Mode::Details => {
            if let Some(dev) = state.session.selected_developer() {
                frame.render_widget(DetailsModal::new(dev, theme), frame.area());
            }
        }
        Mode::Normal => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchResponse;
    use crate::testing::developer_page;
    use ratatui::backend::TestBackend;

    fn draw(state: &mut AppState) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, state, &theme)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_first_frame_is_loading() {
        let mut state = AppState::new(SearchSession::new(), Vec::new());
        let _ = state.session.mount();

        let text = draw(&mut state);
        assert!(text.contains("searching..."));
        assert!(!text.contains("Page 1 of"));
    }

    #[test]
    fn test_renders_results_and_pagination() {
        let mut state = AppState::new(SearchSession::new(), Vec::new());
        let request = state.session.mount().unwrap();
        state.apply_response(SearchResponse {
            seq: request.seq,
            outcome: Ok(developer_page(20, 45, 20)),
        });

        let text = draw(&mut state);
        assert!(text.contains("@dev1"));
        assert_eq!(text.matches("Page 1 of 3").count(), 2);
        assert!(text.contains("45 developers"));
        assert_eq!(state.grid_columns, 3);
    }

    #[test]
    fn test_details_modal_drawn_over_page() {
        let mut state = AppState::new(SearchSession::new(), Vec::new());
        let request = state.session.mount().unwrap();
        state.apply_response(SearchResponse {
            seq: request.seq,
            outcome: Ok(developer_page(3, 3, 20)),
        });
        state.open_details();

        let text = draw(&mut state);
        assert!(text.contains(" Developer "));
        assert!(text.contains("https://github.com/dev1"));
    }
}
