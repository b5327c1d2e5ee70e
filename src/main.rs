//! devfinder CLI application entry point
//!
//! This is the main executable for devfinder. It provides an interactive
//! developer search page and one-shot commands for scripting.
//!
//! # Features
//!
//! - **Browse Mode**: Interactive developer search with filters and paging
//! - **Developers**: One-shot filtered search, plain or JSON output
//! - **Home**: The most popular projects
//! - **Quiet Mode**: Suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # Browse developers interactively (default command)
//! devfinder
//! devfinder browse --tool rust --oss
//!
//! # Search once and print page 2
//! devfinder developers -t "Backend" -T go -T rust -p 2
//!
//! # Top projects as JSON
//! devfinder home --json
//!
//! # Point at another API for one call
//! devfinder --api-url https://api.example.com developers -T go
//! ```
//!
//! # Configuration
//!
//! On first run, devfinder will prompt for initial setup. Configuration is
//! stored in the user's config directory (`~/.config/devfinder/config.toml`
//! on Linux).

use devfinder::{
    api::ApiClient,
    cli::{Cli, Commands},
    commands,
    config::DevfinderConfig,
    logging::{self, LogTarget},
    ui::StdoutWriter,
    DevfinderError,
};
use std::io;

type Result<T> = std::result::Result<T, DevfinderError>;

/// Main entry point for the devfinder application
///
/// Parses command-line arguments, loads configuration, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `DevfinderError` if configuration loading fails, the API client
/// cannot be built, or any command handler returns an error.
fn main() -> Result<()> {
    #[cfg(feature = "dynamic-completions")]
    devfinder::completions::init_dynamic_completions(<Cli as clap::CommandFactory>::command);

    let cli = Cli::parse_args();
    let command = cli.get_command();

    // Completion scripts are generated before any config file is touched
    if let Commands::Completions { shell } = &command {
        commands::completions(*shell, &mut io::stdout());
        return Ok(());
    }

    let log_target = if matches!(command, Commands::Browse { .. }) {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.verbose, log_target)?;

    let mut config = DevfinderConfig::load_or_setup()?;
    let out = StdoutWriter::new(cli.quiet || config.quiet);

    if let Commands::Config { command } = &command {
        let path = DevfinderConfig::config_path()?;
        return commands::config(config, command, &path, &out);
    }

    if let Some(api_url) = &cli.api_url {
        config.api_url.clone_from(api_url);
    }
    tracing::debug!(api_url = %config.api_url, "Using search API");
    let client = ApiClient::new(&config.api_url, config.timeout())?;

    match command {
        Commands::Browse { filter } => {
            commands::browse(client, filter.to_filter_state(), config.tool_suggestions)?;
        }
        Commands::Developers { filter, page, json } => {
            commands::developers(&client, filter.to_filter_state(), page, json, out.is_quiet(), &out)?;
        }
        Commands::Home { count, json } => {
            let count = count.unwrap_or(config.top_projects);
            commands::home(&client, count, json, out.is_quiet(), &out)?;
        }
        Commands::Config { .. } | Commands::Completions { .. } => {}
    }

    Ok(())
}
