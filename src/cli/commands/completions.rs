//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;

/// Generate shell completions for the specified shell.
#[must_use]
pub fn completions(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "mindful", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
