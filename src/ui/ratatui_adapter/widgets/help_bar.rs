//! One-line key reference at the bottom of the page

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const PAGE_HINTS: &[(&str, &str)] = &[
    ("t", "title"),
    ("a", "add tool"),
    ("o", "oss"),
    ("f", "search"),
    ("s", "sort"),
    ("r", "reset"),
    ("n/p", "page"),
    ("Enter", "details"),
    ("?", "help"),
    ("q", "quit"),
];

/// A key and what it does, e.g. `f` / `search`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the developer search page
    #[must_use]
    pub fn default_hints() -> Vec<KeyHint> {
        PAGE_HINTS
            .iter()
            .map(|(key, action)| KeyHint::new(*key, *action))
            .collect()
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line: Line = self
            .hints
            .iter()
            .enumerate()
            .flat_map(|(i, hint)| {
                [
                    Span::raw(if i == 0 { "" } else { "  " }),
                    Span::styled(hint.key.as_str(), self.theme.accent_style()),
                    Span::styled(":", self.theme.muted_style()),
                    Span::raw(hint.action.as_str()),
                ]
            })
            .collect();

        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_hints_in_order() {
        let hints = vec![KeyHint::new("f", "search"), KeyHint::new("q", "quit")];
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        HelpBar::new(&hints, &theme).render(area, &mut buf);
        let text: String = buf.content().iter().map(ratatui::buffer::Cell::symbol).collect();
        assert!(text.starts_with("f:search  q:quit"));
    }

    #[test]
    fn test_default_hints_cover_search_and_quit() {
        let hints = HelpBar::default_hints();
        assert!(hints.contains(&KeyHint::new("f", "search")));
        assert_eq!(hints.last(), Some(&KeyHint::new("q", "quit")));
    }
}
