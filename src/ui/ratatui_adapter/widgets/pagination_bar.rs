//! Pagination bar widget
//!
//! Rendered above and below the result grid. It draws nothing at all when
//! there is no result page yet or the page is empty.

use crate::api::PagedResult;
use crate::ui::Pager;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Page indicator with previous/next markers
pub struct PaginationBar<'a, T> {
    result: Option<&'a PagedResult<T>>,
    page: u32,
    theme: &'a Theme,
}

impl<'a, T> PaginationBar<'a, T> {
    /// Create a pagination bar for `result` showing `page`
    #[must_use]
    pub const fn new(result: Option<&'a PagedResult<T>>, page: u32, theme: &'a Theme) -> Self {
        Self {
            result,
            page,
            theme,
        }
    }

    /// Pager for the current page, `None` when nothing should be drawn
    fn pager(&self) -> Option<Pager> {
        let result = self.result.filter(|r| !r.is_empty())?;
        let pager = Pager::new(self.page, result.nb_hits, result.limit);
        (!pager.is_empty()).then_some(pager)
    }
}

impl<T> Widget for PaginationBar<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(pager) = self.pager() else {
            return;
        };

        let marker = |enabled: bool, text: &'static str| {
            if enabled {
                Span::styled(text, self.theme.accent_style())
            } else {
                Span::styled(text, self.theme.muted_style())
            }
        };

        let line = Line::from(vec![
            marker(pager.prev().is_some(), "◀ prev"),
            Span::raw(format!("   Page {} of {}   ", pager.current(), pager.total_pages())),
            marker(pager.next().is_some(), "next ▶"),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
