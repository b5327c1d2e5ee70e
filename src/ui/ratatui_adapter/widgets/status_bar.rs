//! Status bar widget for displaying messages

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget showing the latest message and a result summary
pub struct StatusBar<'a> {
    messages: &'a [&'a StatusMessage],
    theme: &'a Theme,
    summary: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(messages: &'a [&'a StatusMessage], theme: &'a Theme) -> Self {
        Self {
            messages,
            theme,
            summary: None,
        }
    }

    /// Right-aligned summary, e.g. the hit count
    #[must_use]
    pub const fn with_summary(mut self, summary: Option<&'a str>) -> Self {
        self.summary = summary;
        self
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame_style(false))
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Percentage(75), Constraint::Percentage(25)]).split(inner);

        if let Some(msg) = self.messages.last() {
            let style = self.theme.message_style(msg.level);
            Paragraph::new(Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]))
            .render(chunks[0], buf);
        }

        if let Some(summary) = self.summary {
            Paragraph::new(Line::styled(summary, self.theme.muted_style()))
                .alignment(Alignment::Right)
                .render(chunks[1], buf);
        }
    }
}
