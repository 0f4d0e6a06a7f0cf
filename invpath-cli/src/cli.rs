//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AncestorsCommand, ApplyCommand, CompletionsCommand, InspectCommand, ParseCommand,
    ValidateCommand,
};
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Parser, Subcommand};
use invpath::Config;
use std::path::PathBuf;

/// Command-line tool for working with inventory paths.
#[derive(Parser)]
#[command(name = "invpath")]
#[command(version, about = "Parse, inspect and resolve inventory paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "INVPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse a path and print its normalized encoding
    Parse(ParseCommand),

    /// Describe a path: kind, depth, segments and ids
    Inspect(InspectCommand),

    /// List the views from a path toward its root
    Ancestors(AncestorsCommand),

    /// Resolve a relative path against a canonical base
    Apply(ApplyCommand),

    /// Validate paths, one per line
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

impl Command {
    /// Run a command that needs the loaded configuration.
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        match self {
            Command::Parse(cmd) => cmd.execute(global, config),
            Command::Inspect(cmd) => cmd.execute(global, config),
            Command::Ancestors(cmd) => cmd.execute(global, config),
            Command::Apply(cmd) => cmd.execute(global, config),
            Command::Validate(cmd) => cmd.execute(global, config),
            Command::Completions(cmd) => cmd.execute(global),
        }
    }
}
