//! Filter panel widget
//!
//! Shows the current search criteria: title, selected tools, the
//! open-source filter and the sort method, plus whether the results on
//! screen come from a submitted search or the default listing.

use crate::search::FilterState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Filter panel widget
pub struct FilterPanel<'a> {
    filter: &'a FilterState,
    theme: &'a Theme,
    loading: bool,
}

impl<'a> FilterPanel<'a> {
    /// Create a new filter panel
    #[must_use]
    pub const fn new(filter: &'a FilterState, theme: &'a Theme) -> Self {
        Self {
            filter,
            theme,
            loading: false,
        }
    }

    /// Show a loading marker in the title
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn label(&self, text: &'static str) -> Span<'static> {
        Span::styled(text, self.theme.muted_style())
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let title = if self.filter.title.is_empty() {
            Span::styled("(any)", self.theme.muted_style())
        } else {
            Span::raw(self.filter.title.clone())
        };

        let mut tools = vec![self.label("Tools: ")];
        if self.filter.tools.is_empty() {
            tools.push(Span::styled("(any)", self.theme.muted_style()));
        } else {
            for tool in &self.filter.tools {
                tools.push(Span::styled(format!(" {tool} "), self.theme.tool_style()));
                tools.push(Span::raw(" "));
            }
        }

        let oss = if self.filter.oss_only { "[x]" } else { "[ ]" };
        let sort = if self.filter.sort_method.is_empty() {
            "relevance".to_string()
        } else {
            self.filter.sort_method.clone()
        };

        vec![
            Line::from(vec![self.label("Title: "), title]),
            Line::from(tools),
            Line::from(vec![
                self.label("Open source only: "),
                Span::styled(oss, self.theme.accent_style()),
                self.label("   Sort: "),
                Span::raw(sort),
            ]),
        ]
    }
}

impl Widget for FilterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = if self.filter.search_mode_active {
            " Filters (search) "
        } else {
            " Filters (all developers) "
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame_style(false))
            .title(Span::styled(mode, self.theme.title_style(true)));
        if self.loading {
            block = block.title_bottom(Span::styled(" searching... ", self.theme.accent_style()));
        }

        Paragraph::new(self.build_lines()).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(panel: FilterPanel<'_>) -> String {
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        buf.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_renders_criteria() {
        let mut filter = FilterState::default();
        filter.set_title("Backend");
        filter.set_tools(["go", "rust"]);
        filter.oss_only = true;
        let theme = Theme::default();

        let text = render_to_string(FilterPanel::new(&filter, &theme));
        assert!(text.contains("Backend"));
        assert!(text.contains(" go "));
        assert!(text.contains(" rust "));
        assert!(text.contains("[x]"));
        assert!(text.contains("relevance"));
        assert!(text.contains("all developers"));
    }

    #[test]
    fn test_loading_marker() {
        let filter = FilterState {
            search_mode_active: true,
            ..FilterState::default()
        };
        let theme = Theme::default();

        let text = render_to_string(FilterPanel::new(&filter, &theme).loading(true));
        assert!(text.contains("Filters (search)"));
        assert!(text.contains("searching..."));
    }
}
