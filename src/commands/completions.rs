//! Completions command - print a shell completion script

use crate::{cli::Cli, completions::generate_static};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

/// Execute the completions command, writing the script to `buf`
pub fn execute<W: Write>(shell: Shell, buf: &mut W) {
    tracing::debug!(%shell, "Generating completions");
    generate_static(shell, &mut Cli::command(), buf);
}
