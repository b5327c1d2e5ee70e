//! Ratatui-based developer search page
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           DeveloperBrowser                  │
//! │  (terminal setup, event loop)               │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │ (session)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Features
//!
//! - **Filter panel** with title editing and tool autocomplete
//! - **Result grid** of developer cards with top/bottom pagination
//! - **Details modal** with open-in-browser and copy-URL actions
//! - **Status bar** for search errors and confirmations
//! - **Help overlay** (F1 or ?)

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::DeveloperBrowser;
pub use events::{EventResult, ExternalAction, handle_key};
pub use state::{AppState, InputTarget, Mode, SORT_METHODS, StatusMessage};
pub use theme::Theme;
