//! Command to describe a path.

use crate::error::CliError;
use crate::utils::{parse_path, GlobalOptions, KindArg};
use clap::Args;
use invpath::output::PathReport;
use invpath::{Config, OutputFormat};

/// Describe a path: kind, depth, segments and entity ids.
#[derive(Args)]
pub struct InspectCommand {
    /// The path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// How to read the path (defaults to the configured kind, then auto)
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

impl InspectCommand {
    pub fn execute(self, _global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let path = parse_path(&self.path, KindArg::resolve(self.kind, config))?;
        let format = self
            .format
            .unwrap_or_else(|| config.output_format_or_default());

        let report = PathReport::new(&path);
        let output = format.create_formatter().format(&report)?;
        println!("{output}");

        Ok(())
    }
}
