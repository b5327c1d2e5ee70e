//! Details modal widget for displaying a developer profile

use super::modal;
use crate::api::Developer;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

const MODAL_WIDTH: u16 = 70;

/// Profile of the developer under the cursor
pub struct DetailsModal<'a> {
    developer: &'a Developer,
    theme: &'a Theme,
}

impl<'a> DetailsModal<'a> {
    #[must_use]
    pub const fn new(developer: &'a Developer, theme: &'a Theme) -> Self {
        Self { developer, theme }
    }

    fn field(&self, label: &'static str, value: Option<String>) -> Option<Line<'static>> {
        value.map(|value| {
            Line::from(vec![
                Span::styled(format!("{label:<10}"), self.theme.muted_style()),
                Span::raw(value),
            ])
        })
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let dev = self.developer;
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    dev.display_name().to_string(),
                    self.theme.text_style().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  @{}", dev.login), self.theme.accent_style()),
            ]),
            Line::from("─".repeat(usize::from(MODAL_WIDTH) - 4)),
        ];

        if let Some(bio) = &dev.bio {
            lines.push(Line::from(Span::styled(
                bio.clone(),
                self.theme.text_style().add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::default());
        }

        lines.extend(
            [
                self.field("Location", dev.location.clone()),
                self.field("Company", dev.company.clone()),
                self.field("Repos", dev.public_repos.map(|n| n.to_string())),
                self.field("Followers", dev.followers.map(|n| n.to_string())),
                self.field(
                    "Languages",
                    (!dev.languages.is_empty()).then(|| dev.languages.join(", ")),
                ),
            ]
            .into_iter()
            .flatten(),
        );

        if let Some(url) = &dev.html_url {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(url.clone(), self.theme.link_style())));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "b: open in browser | y: copy profile URL | ESC: close",
            self.theme.muted_style().add_modifier(Modifier::ITALIC),
        )));

        lines
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        // Border plus two spare rows for a wrapped bio
        let height = u16::try_from(lines.len() + 4).unwrap_or(u16::MAX);
        let inner = modal::frame(modal::centered(area, MODAL_WIDTH, height), buf, "Developer", self.theme);

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::developer;

    #[test]
    fn test_renders_profile_fields() {
        let mut dev = developer("7", "octocat");
        dev.name = Some("The Octocat".to_string());
        dev.company = Some("GitHub".to_string());
        dev.followers = Some(42);
        let theme = Theme::default();

        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        DetailsModal::new(&dev, &theme).render(area, &mut buf);
        let text: String = buf.content().iter().map(ratatui::buffer::Cell::symbol).collect();

        assert!(text.contains("The Octocat"));
        assert!(text.contains("@octocat"));
        assert!(text.contains("GitHub"));
        assert!(text.contains("42"));
        assert!(text.contains("https://github.com/octocat"));
        assert!(!text.contains("Location"));
    }
}
