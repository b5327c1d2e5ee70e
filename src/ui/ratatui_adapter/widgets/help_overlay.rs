//! Help overlay widget for displaying the full keybind reference

use super::modal;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Key reference shown over the page (F1 or ?)
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn section(&self, title: &'static str) -> Line<'static> {
        Line::styled(
            title,
            self.theme.accent_style().add_modifier(Modifier::UNDERLINED),
        )
    }

    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), self.theme.accent_style()),
            Span::raw(desc),
        ])
    }

    fn lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            self.section("  Filters"),
            self.help_line("t", "Edit job title"),
            self.help_line("c", "Clear title (no search)"),
            self.help_line("a", "Add tools"),
            self.help_line("d", "Remove last tool"),
            self.help_line("o", "Toggle open-source only"),
            self.help_line("f", "Search with current filters"),
            self.help_line("s", "Cycle sort method (searches)"),
            self.help_line("r", "Reset filters and results"),
            Line::default(),
            self.section("  Results"),
            self.help_line("←↑↓→ hjkl", "Move between cards"),
            self.help_line("n / PgDn", "Next page"),
            self.help_line("p / PgUp", "Previous page"),
            self.help_line("Enter", "Developer details"),
            self.help_line("b / y", "Open / copy profile URL"),
            Line::default(),
            self.help_line("q / ESC", "Quit"),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.muted_style()),
        ]
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
        let inner = modal::frame(modal::centered(area, 48, height), buf, "Help", self.theme);
        Paragraph::new(lines).render(inner, buf);
    }
}
