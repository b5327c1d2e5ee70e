//! Colors for the developer search page

use crate::ui::output::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Palette used by every widget
#[derive(Debug, Clone)]
pub struct Theme {
    /// Highlighted card background
    pub highlight_bg: Color,
    /// Highlighted card text
    pub highlight_fg: Color,
    /// Logins, key names, input cursor
    pub accent: Color,
    pub ok: Color,
    pub failure: Color,
    pub caution: Color,
    /// Pane borders
    pub frame: Color,
    /// Border of the pane or modal that has focus
    pub frame_focused: Color,
    /// Secondary text such as hints and placeholders
    pub muted: Color,
    /// Tool pill background
    pub tool: Color,
    /// Language lists on cards
    pub language: Color,
    /// Profile and repository URLs
    pub link: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for dark terminals
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,
            accent: Color::Cyan,
            ok: Color::Green,
            failure: Color::Red,
            caution: Color::Yellow,
            frame: Color::DarkGray,
            frame_focused: Color::Cyan,
            muted: Color::DarkGray,
            tool: Color::Magenta,
            language: Color::Yellow,
            link: Color::Blue,
        }
    }

    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .fg(self.highlight_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Plain body text
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default()
    }

    /// Card body, highlighted when the cursor is on it
    #[must_use]
    pub fn card_style(&self, highlighted: bool) -> Style {
        if highlighted {
            self.highlight_style()
        } else {
            self.text_style()
        }
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Status bar text for a message level
    #[must_use]
    pub fn message_style(&self, level: MessageLevel) -> Style {
        let style = Style::default();
        match level {
            MessageLevel::Success => style.fg(self.ok),
            MessageLevel::Error => style.fg(self.failure),
            MessageLevel::Warning => style.fg(self.caution),
            MessageLevel::Info => style.fg(self.accent),
            MessageLevel::Normal => style,
        }
    }

    #[must_use]
    pub fn frame_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.frame_focused } else { self.frame })
    }

    #[must_use]
    pub fn title_style(&self, focused: bool) -> Style {
        if focused {
            self.frame_style(true).add_modifier(Modifier::BOLD)
        } else {
            self.muted_style()
        }
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Selected tool shown as a pill
    #[must_use]
    pub fn tool_style(&self) -> Style {
        Style::default()
            .bg(self.tool)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn language_style(&self) -> Style {
        Style::default().fg(self.language)
    }

    #[must_use]
    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_changes_frame() {
        let theme = Theme::default();
        assert_ne!(theme.frame_style(true), theme.frame_style(false));
        assert_eq!(theme.card_style(true), theme.highlight_style());
        assert_eq!(theme.card_style(false), Style::default());
    }

    #[test]
    fn test_message_styles_differ_by_level() {
        let theme = Theme::default();
        assert_eq!(theme.message_style(MessageLevel::Error).fg, Some(Color::Red));
        assert_eq!(theme.message_style(MessageLevel::Normal), Style::default());
    }
}
