//! Logging setup
//!
//! devfinder logs through `tracing`. One-shot commands write to stderr; the
//! interactive browser writes to a log file instead so log lines never land
//! on the alternate screen.
//!
//! The level is taken from `RUST_LOG` when set, otherwise from the number of
//! `-v` flags:
//!
//! ```text
//! (none) -> warn
//! -v     -> info
//! -vv    -> debug
//! -vvv   -> trace
//! ```

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error (one-shot commands)
    Stderr,
    /// The devfinder log file (interactive browser)
    File,
}

/// Map a `-v` count to a default level directive
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter used by [`init`]
///
/// `RUST_LOG` takes precedence over the verbosity count. HTTP internals are
/// capped at `warn` unless `RUST_LOG` says otherwise.
#[must_use]
pub fn build_filter(verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(format!(
        "{},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn",
        level_for_verbosity(verbose)
    ))
}

/// Path of the log file used by the interactive browser
///
/// # Errors
///
/// Returns an I/O error if the local data directory cannot be determined.
pub fn log_file_path() -> io::Result<PathBuf> {
    let data_dir = dirs::data_local_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
    })?;
    Ok(data_dir.join("devfinder").join("devfinder.log"))
}

fn open_log_file() -> io::Result<File> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be opened.
pub fn init(verbose: u8, target: LogTarget) -> io::Result<()> {
    let filter = build_filter(verbose);

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .try_init(),
        LogTarget::File => {
            let file = open_log_file()?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
    };

    if result.is_ok() {
        tracing::debug!(verbose, ?target, "logging initialized");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(3), "trace");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        assert!(init(0, LogTarget::Stderr).is_ok());
        assert!(init(2, LogTarget::Stderr).is_ok());
    }
}
