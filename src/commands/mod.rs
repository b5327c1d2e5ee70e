//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against a search backend.

pub mod browse;
pub mod completions;
pub mod config;
pub mod developers;
pub mod home;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use config::execute as config;
pub use developers::execute as developers;
pub use home::execute as home;
