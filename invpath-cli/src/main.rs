//! Main entry point for the invpath CLI.
//!
//! This is the command-line interface for inventory paths. It provides
//! commands for working with them:
//! - `parse`: Parse and re-encode a path
//! - `inspect`: Describe a path
//! - `ancestors`: Walk a path toward its root
//! - `apply`: Resolve a relative path against a base
//! - `validate`: Check a list of paths

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        // completions must work even with a broken config
        Command::Completions(cmd) => {
            utils::logger_for(&global, None).install();
            cmd.execute(&global)
        }
        command => {
            let config = utils::load_configuration(&global);
            let configured = config.as_ref().ok().and_then(|c| c.log_mode);
            utils::logger_for(&global, configured).install();
            config.and_then(|config| command.execute(&global, &config))
        }
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
