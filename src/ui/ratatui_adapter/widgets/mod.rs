//! Ratatui widgets for the developer search page

mod details_modal;
mod filter_panel;
mod help_bar;
mod help_overlay;
mod modal;
mod pagination_bar;
mod result_grid;
mod status_bar;
mod text_input;

pub use details_modal::DetailsModal;
pub use filter_panel::FilterPanel;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use pagination_bar::PaginationBar;
pub use result_grid::{CARD_HEIGHT, CARD_WIDTH, ResultGrid};
pub use status_bar::StatusBar;
pub use text_input::{TextInputModal, TextInputState};
