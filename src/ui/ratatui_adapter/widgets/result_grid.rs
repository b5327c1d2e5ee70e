//! Result grid widget
//!
//! Lays developer cards out in as many columns as fit the area. Draws
//! nothing when there is no result page or the page has no hits.

use crate::api::{Developer, PagedResult};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Width of one developer card, borders included
pub const CARD_WIDTH: u16 = 32;
/// Height of one developer card, borders included
pub const CARD_HEIGHT: u16 = 5;

/// Grid of developer cards
pub struct ResultGrid<'a> {
    result: Option<&'a PagedResult<Developer>>,
    cursor: usize,
    scroll_rows: usize,
    theme: &'a Theme,
}

impl<'a> ResultGrid<'a> {
    /// Create a grid for `result`
    #[must_use]
    pub const fn new(result: Option<&'a PagedResult<Developer>>, theme: &'a Theme) -> Self {
        Self {
            result,
            cursor: 0,
            scroll_rows: 0,
            theme,
        }
    }

    /// Highlight the card at `cursor`
    #[must_use]
    pub const fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Skip the first `rows` rows of cards
    #[must_use]
    pub const fn scroll(mut self, rows: usize) -> Self {
        self.scroll_rows = rows;
        self
    }

    /// Number of card columns that fit in `width`
    #[must_use]
    pub fn columns_for(width: u16) -> usize {
        usize::from((width / CARD_WIDTH).max(1))
    }

    /// Number of card rows that fit in `height`
    #[must_use]
    pub fn rows_for(height: u16) -> usize {
        usize::from((height / CARD_HEIGHT).max(1))
    }

    fn card_lines(&self, dev: &Developer) -> Vec<Line<'static>> {
        let mut first = vec![Span::styled(format!("@{}", dev.login), self.theme.accent_style())];
        if let Some(followers) = dev.followers {
            first.push(Span::styled(
                format!("  {followers} followers"),
                self.theme.muted_style(),
            ));
        }

        let second = dev.location.as_ref().map_or_else(
            || Span::styled("-", self.theme.muted_style()),
            |location| Span::raw(location.clone()),
        );

        let third = if dev.languages.is_empty() {
            Span::raw("")
        } else {
            Span::styled(dev.languages.join(", "), self.theme.language_style())
        };

        vec![Line::from(first), Line::from(second), Line::from(third)]
    }
}

impl Widget for ResultGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(result) = self.result.filter(|r| !r.is_empty()) else {
            return;
        };

        let columns = Self::columns_for(area.width);
        let rows = Self::rows_for(area.height);
        #[allow(clippy::cast_possible_truncation)]
        let card_width = (area.width / columns as u16).max(1);

        let first = self.scroll_rows * columns;
        for (offset, dev) in result.hits.iter().skip(first).take(rows * columns).enumerate() {
            let index = first + offset;
            #[allow(clippy::cast_possible_truncation)]
            let (col, row) = ((offset % columns) as u16, (offset / columns) as u16);

            let card_area = Rect::new(
                area.x + col * card_width,
                area.y + row * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            )
            .intersection(area);
            if card_area.is_empty() {
                continue;
            }

            let selected = index == self.cursor;
            let title_style = self.theme.card_style(selected);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.frame_style(selected))
                .title(Span::styled(format!(" {} ", dev.display_name()), title_style));

            Paragraph::new(self.card_lines(dev))
                .block(block)
                .render(card_area, buf);
        }
    }
}
