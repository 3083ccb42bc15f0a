//! Completions command.
//!
//! Prints a completion script for `local-chamber` covering every subcommand
//! and flag, ready to be sourced by the shell.

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

use crate::cli::{Cli, Shell};
use crate::error::Result;

/// Write the completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let shell = match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
    };

    let mut cli = Cli::command();
    generate(shell, &mut cli, "local-chamber", &mut std::io::stdout());
    Ok(())
}
