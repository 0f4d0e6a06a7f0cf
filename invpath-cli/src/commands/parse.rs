//! Command to parse a path and print its normalized encoding.

use crate::error::CliError;
use crate::utils::{parse_path, GlobalOptions, KindArg};
use clap::Args;
use invpath::Config;

/// Parse a path and print it back in normalized form.
#[derive(Args)]
pub struct ParseCommand {
    /// The path to parse
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// How to read the path (defaults to the configured kind, then auto)
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

impl ParseCommand {
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let kind = KindArg::resolve(self.kind, config);
        let path = parse_path(&self.path, kind)?;

        if global.verbose {
            eprintln!("Parsed {} path with {} segments", path.kind(), path.core().len());
        }

        println!("{path}");
        Ok(())
    }
}
