//! Configuration module for devfinder
//!
//! Manages application configuration: where the search API lives, how long
//! to wait for it, and a few display defaults. Configuration is stored as
//! TOML in the user's config directory (`~/.config/devfinder/config.toml`
//! on Linux). Environment variables prefixed with `DEVFINDER_` override the
//! file, e.g. `DEVFINDER_API_URL=https://api.example.com`.

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Keys accepted by `devfinder config get/set`
pub const CONFIG_KEYS: &[&str] = &["api_url", "timeout_secs", "quiet", "top_projects"];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DevfinderConfig {
    /// Base URL of the search API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Number of projects shown by `devfinder home`
    #[serde(default = "default_top_projects")]
    pub top_projects: u32,

    /// Tool identifiers offered for autocomplete in the filter panel
    #[serde(default = "default_tool_suggestions")]
    pub tool_suggestions: Vec<String>,
}

fn default_api_url() -> String {
    "http://localhost:8000/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_top_projects() -> u32 {
    crate::search::query::DEFAULT_TOP_PROJECTS
}

fn default_tool_suggestions() -> Vec<String> {
    [
        "c", "cpp", "csharp", "go", "java", "javascript", "kotlin", "php", "python", "ruby",
        "rust", "scala", "swift", "typescript",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

impl Default for DevfinderConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            quiet: false,
            top_projects: default_top_projects(),
            tool_suggestions: default_tool_suggestions(),
        }
    }
}

impl DevfinderConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("devfinder").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating a default file if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Environment::with_prefix("DEVFINDER").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// Setup is only interactive when stdin is a terminal; otherwise the
    /// defaults are written silently.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        use std::io::IsTerminal;

        let config_path = Self::config_path()?;

        if config_path.exists() || !std::io::stdin().is_terminal() {
            Self::load_from(&config_path)
        } else {
            first_time_setup(&config_path)
        }
    }

    /// HTTP request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read a setting by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api_url" => Some(self.api_url.clone()),
            "timeout_secs" => Some(self.timeout_secs.to_string()),
            "quiet" => Some(self.quiet.to_string()),
            "top_projects" => Some(self.top_projects.to_string()),
            _ => None,
        }
    }

    /// Update a setting by key (does not save)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |expected: &str| {
            ConfigError::Message(format!(
                "Invalid value for {key}: '{value}'. Expected {expected}"
            ))
        };

        match key {
            "api_url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(invalid("an http(s) URL"));
                }
                self.api_url = value.to_string();
            }
            "timeout_secs" => {
                self.timeout_secs = value
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| invalid("a positive number of seconds"))?;
            }
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| invalid("'true' or 'false'"))?;
            }
            "top_projects" => {
                self.top_projects = value
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| invalid("a positive number"))?;
            }
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DevfinderConfig::default();
        assert_eq!(config.api_url, "http://localhost:8000/api");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.top_projects, 6);
        assert!(!config.quiet);
        assert!(config.tool_suggestions.contains(&"rust".to_string()));
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = DevfinderConfig::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.top_projects, DevfinderConfig::default().top_projects);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = DevfinderConfig::default();
        config.set("top_projects", "9").unwrap();
        config.set("quiet", "true").unwrap();
        config.save_to(&path).unwrap();

        let reloaded = DevfinderConfig::load_from(&path).unwrap();
        assert_eq!(reloaded.top_projects, 9);
        assert!(reloaded.quiet);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = 5\n").unwrap();

        let config = DevfinderConfig::load_from(&path).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.top_projects, 6);
        assert!(!config.tool_suggestions.is_empty());
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = DevfinderConfig::default();
        assert_eq!(config.get("quiet"), Some("false".to_string()));
        assert_eq!(config.get("timeout_secs"), Some("30".to_string()));
        assert!(config.get("database").is_none());
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = DevfinderConfig::default();
        assert!(config.set("api_url", "localhost").is_err());
        assert!(config.set("timeout_secs", "0").is_err());
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, DevfinderConfig::default());
    }
}
