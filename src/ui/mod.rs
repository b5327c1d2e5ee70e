//! Terminal user interface
//!
//! The developer search page and its pieces, rendered with ratatui on top
//! of crossterm.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   DeveloperBrowser (event loop)         │
//! │   crossterm events ─→ AppState          │
//! └───────┬─────────────────────┬───────────┘
//!         │ SearchRequest       │ render
//!         ▼                     ▼
//! ┌────────────────┐    ┌──────────────────┐
//! │ SearchWorker   │    │ Widgets          │
//! │ (threads)      │    │ - FilterPanel    │
//! └───────┬────────┘    │ - ResultGrid     │
//!         │ response    │ - PaginationBar  │
//!         ▼             │ - DetailsModal   │
//! SearchSession::apply  └──────────────────┘
//! ```
//!
//! [`Pager`] and [`output`] are shared with the one-shot CLI commands.

pub mod error;
pub mod output;
pub mod pager;
pub mod ratatui_adapter;

pub use error::UiError;
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use pager::Pager;
