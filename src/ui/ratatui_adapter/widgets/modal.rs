//! Placement and frame shared by the modal overlays

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Clear, Widget},
};

/// A `width` x `height` rectangle centered in `area`, clipped to it
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, modal, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(row);
    modal
}

/// Blank out `area`, draw a titled border and return the space inside it
pub(crate) fn frame(area: Rect, buf: &mut Buffer, title: &str, theme: &Theme) -> Rect {
    Clear.render(area, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.frame_style(true))
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}
