//! Output abstraction layer
//!
//! Commands report progress through [`OutputWriter`] so that quiet mode is
//! handled in one place. The interactive browser keeps its own status
//! messages and shares only [`MessageLevel`].

use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```
/// use devfinder::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.success("Configuration saved");
/// output.info("Using http://localhost:8000/api");
/// ```
pub trait OutputWriter {
    /// Write a result line (always shown)
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only results and errors are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Whether informational output is suppressed
    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_writer_quiet_flag() {
        assert!(StdoutWriter::new(true).is_quiet());
        assert!(!StdoutWriter::default().is_quiet());
    }

    #[test]
    fn test_message_level_equality() {
        assert_eq!(MessageLevel::Normal, MessageLevel::Normal);
        assert_ne!(MessageLevel::Error, MessageLevel::Success);
    }
}
