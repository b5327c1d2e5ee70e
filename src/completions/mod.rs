//! Shell completion support for devfinder
//!
//! - **Static completions** (always available): subcommands, flags and
//!   shell names, generated by `devfinder completions <shell>`
//! - **Dynamic completions** (behind the `dynamic-completions` feature):
//!   tool names for `--tool`, taken from the configured tool suggestions

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
/// * `buf` - Where to write the script
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, buf);
}

/// Tools matching what the user has typed so far
#[must_use]
pub fn matching_tools(tools: &[String], current: &str) -> Vec<String> {
    let current = current.to_lowercase();
    tools
        .iter()
        .filter(|tool| tool.to_lowercase().starts_with(&current))
        .cloned()
        .collect()
}

/// Handle a completion request from the shell, if this is one
///
/// Call this at the start of main() before argument parsing. It exits the
/// process when the `COMPLETE` environment variable is set.
#[cfg(feature = "dynamic-completions")]
pub fn init_dynamic_completions<F: Fn() -> Command>(factory: F) {
    clap_complete::CompleteEnv::with_factory(factory).complete();
}

/// Complete tool names for `--tool`
#[cfg(feature = "dynamic-completions")]
pub fn complete_tools(current: &std::ffi::OsStr) -> Vec<clap_complete::engine::CompletionCandidate> {
    let tools = crate::config::DevfinderConfig::load()
        .map(|config| config.tool_suggestions)
        .unwrap_or_default();

    matching_tools(&tools, &current.to_string_lossy())
        .into_iter()
        .map(clap_complete::engine::CompletionCandidate::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::CommandFactory;

    #[test]
    fn test_generate_bash_script() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate_static(Shell::Bash, &mut cmd, &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("devfinder"));
        assert!(script.contains("developers"));
    }

    #[test]
    fn test_matching_tools() {
        let tools = vec!["rust".to_string(), "ruby".to_string(), "go".to_string()];
        assert_eq!(matching_tools(&tools, "ru"), vec!["rust".to_string(), "ruby".to_string()]);
        assert_eq!(matching_tools(&tools, "G"), vec!["go".to_string()]);
        assert_eq!(matching_tools(&tools, "").len(), 3);
    }
}
