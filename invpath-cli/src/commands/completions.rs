//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "invpath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            for line in install_hint(self.shell) {
                eprintln!("# {line}");
            }
            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn install_hint(shell: Shell) -> Vec<&'static str> {
    match shell {
        Shell::Bash => vec![
            "Install with:",
            "  invpath completions bash > ~/.local/share/bash-completion/completions/invpath",
            "Or source it directly in ~/.bashrc:",
            "  eval \"$(invpath completions bash)\"",
        ],
        Shell::Zsh => vec![
            "Install with:",
            "  invpath completions zsh > ~/.zsh/completions/_invpath",
            "Make sure ~/.zsh/completions is in your $fpath",
        ],
        Shell::Fish => vec![
            "Install with:",
            "  invpath completions fish > ~/.config/fish/completions/invpath.fish",
        ],
        Shell::PowerShell => vec![
            "Run:",
            "  invpath completions powershell | Out-String | Invoke-Expression",
        ],
        _ => Vec::new(),
    }
}
