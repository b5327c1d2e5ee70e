//! Config command - read and update settings

use crate::{
    cli::ConfigCommands,
    config::{CONFIG_KEYS, DevfinderConfig},
    ui::OutputWriter,
    DevfinderError,
};
use std::path::Path;

type Result<T> = std::result::Result<T, DevfinderError>;

/// Split a `key=value` argument
///
/// # Errors
/// Returns `InvalidInput` when there is no `=` or the key is empty.
pub fn parse_setting(setting: &str) -> Result<(&str, &str)> {
    match setting.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(DevfinderError::InvalidInput(
            "Invalid format. Use: devfinder config set key=value".into(),
        )),
    }
}

/// Execute a config subcommand against the file at `path`
///
/// # Errors
/// Returns an error for unknown keys, invalid values or when saving fails.
pub fn execute(
    mut config: DevfinderConfig,
    command: &ConfigCommands,
    path: &Path,
    out: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            config.set(key, value)?;
            config.save_to(path)?;
            tracing::info!(key, value, "Configuration updated");
            out.success(&format!("Set {key} = {value}"));
        }
        ConfigCommands::Get { key } => {
            let value = config.get(key).ok_or_else(|| {
                DevfinderError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    CONFIG_KEYS.join(", ")
                ))
            })?;
            out.write(&value);
        }
        ConfigCommands::Path => {
            out.write(&path.display().to_string());
        }
    }
    Ok(())
}
