//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for devfinder using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive developer search page (default)
//! - **developers**: One-shot developer search, printed to stdout
//! - **home**: Top projects shown on the home page
//! - **config**: Read and update configuration values
//! - **completions**: Generate shell completions
//!
//! # Examples
//!
//! ```
//! use devfinder::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["devfinder", "developers", "--tool", "rust", "--page", "2"]);
//! match cli.get_command() {
//!     Commands::Developers { filter, page, .. } => {
//!         assert_eq!(filter.tools, vec!["rust".to_string()]);
//!         assert_eq!(page, 2);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::search::FilterState;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Filter panel fields shared by `browse` and `developers`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Job title to search for
    #[arg(short = 't', long = "title", value_name = "TITLE")]
    pub title: Option<String>,

    /// Tool the developer uses (repeatable)
    #[arg(short = 'T', long = "tool", value_name = "TOOL", num_args = 1)]
    #[cfg_attr(
        feature = "dynamic-completions",
        arg(add = clap_complete::engine::ArgValueCompleter::new(crate::completions::complete_tools))
    )]
    pub tools: Vec<String>,

    /// Only developers with open-source contributions
    #[arg(long = "oss")]
    pub oss: bool,

    /// Sort method understood by the search API (e.g. popularity)
    #[arg(short = 's', long = "sort", value_name = "METHOD")]
    pub sort: Option<String>,
}

impl FilterArgs {
    /// Build the filter state these flags describe
    ///
    /// Search mode stays off; callers decide whether the filters are a
    /// submitted search or just pre-filled panel values.
    #[must_use]
    pub fn to_filter_state(&self) -> FilterState {
        let mut state = FilterState::default();
        if let Some(title) = &self.title {
            state.set_title(title.trim());
        }
        state.set_tools(self.tools.iter().map(String::as_str));
        if let Some(sort) = &self.sort {
            state.sort_method = sort.trim().to_string();
        }
        state.oss_only = self.oss;
        state
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., api_url=https://api.example.com)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., api_url)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the path of the configuration file
    Path,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Browse developers interactively
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Search developers once and print the results
    #[command(visible_alias = "d")]
    Developers {
        #[command(flatten)]
        filter: FilterArgs,

        /// Result page to fetch
        #[arg(short = 'p', long = "page", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Print the raw result page as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show the top projects from the home page
    Home {
        /// Number of projects to show (defaults to the configured value)
        #[arg(short = 'n', long = "count", value_parser = clap::value_parser!(u32).range(1..))]
        count: Option<u32>,

        /// Print the raw result page as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
#[command(name = "devfinder")]
#[command(version, about = "Find developers and browse top projects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Search API base URL (overrides configuration)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            filter: FilterArgs::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_browse() {
        let cli = Cli::parse_from(["devfinder"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.get_command(), Commands::Browse { .. }));
    }

    #[test]
    fn test_browse_with_filters() {
        let cli = Cli::parse_from([
            "devfinder", "browse", "--title", "Backend", "--tool", "go", "--tool", "rust", "--oss",
        ]);
        let Commands::Browse { filter } = cli.get_command() else {
            panic!("Expected Browse command");
        };
        assert_eq!(filter.title.as_deref(), Some("Backend"));
        assert_eq!(filter.tools, vec!["go".to_string(), "rust".to_string()]);
        assert!(filter.oss);
    }

    #[test]
    fn test_filter_args_to_state() {
        let args = FilterArgs {
            title: Some("  Backend ".to_string()),
            tools: vec!["go".to_string(), "go".to_string(), " ".to_string()],
            oss: true,
            sort: Some("popularity".to_string()),
        };
        let state = args.to_filter_state();
        assert_eq!(state.title, "Backend");
        assert_eq!(state.tools, vec!["go".to_string()]);
        assert_eq!(state.sort_method, "popularity");
        assert!(state.oss_only);
        assert_eq!(state.page, 1);
        assert!(!state.search_mode_active);
    }

    #[test]
    fn test_developers_page_and_json() {
        let cli = Cli::parse_from(["devfinder", "developers", "-p", "3", "--json"]);
        let Commands::Developers { page, json, .. } = cli.get_command() else {
            panic!("Expected Developers command");
        };
        assert_eq!(page, 3);
        assert!(json);
    }

    #[test]
    fn test_developers_rejects_page_zero() {
        assert!(Cli::try_parse_from(["devfinder", "developers", "--page", "0"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["devfinder", "home", "-vv", "-q", "--api-url", "http://api.test"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert_eq!(cli.api_url.as_deref(), Some("http://api.test"));
    }

    #[test]
    fn test_config_set() {
        let cli = Cli::parse_from(["devfinder", "config", "set", "quiet=true"]);
        let Commands::Config { command: ConfigCommands::Set { setting } } = cli.get_command() else {
            panic!("Expected Config Set command");
        };
        assert_eq!(setting, "quiet=true");
    }
}
