//! Interactive setup wizard for first-time configuration
//!
//! This module handles the prompts shown when devfinder runs for the first
//! time in an interactive terminal.

use super::DevfinderConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::Path;

/// Interactive first-time setup - prompts for the search API location
///
/// 1. Prompts for the search API URL (default: local development server)
/// 2. Prompts for the request timeout
/// 3. Saves the configuration to `path`
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read, a value is invalid,
/// or the configuration cannot be saved.
pub fn first_time_setup(path: &Path) -> Result<DevfinderConfig, ConfigError> {
    println!("Welcome to devfinder! Let's point it at your search API.\n");

    let mut config = DevfinderConfig::default();

    let api_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Search API URL")
        .default(config.api_url.clone())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;
    config.set("api_url", api_url.trim())?;

    let timeout: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Request timeout (seconds)")
        .default(config.timeout_secs.to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;
    config.set("timeout_secs", timeout.trim())?;

    config.save_to(path)?;

    println!("\nConfiguration saved to {}", path.display());
    Ok(config)
}
