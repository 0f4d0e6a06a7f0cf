//! Command to list the views of a path.

use crate::error::CliError;
use crate::utils::{parse_path, GlobalOptions, KindArg};
use clap::Args;
use invpath::{Config, OutputFormat, Path};

/// List the views of a path, from the full path toward its root.
///
/// The root segment on its own is not listed.
#[derive(Args)]
pub struct AncestorsCommand {
    /// The path to walk
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// List from the root toward the leaf instead
    #[arg(long)]
    pub descending: bool,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// How to read the path (defaults to the configured kind, then auto)
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

impl AncestorsCommand {
    pub fn execute(self, _global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let path = parse_path(&self.path, KindArg::resolve(self.kind, config))?;
        let views = views_of(&path, self.descending);

        let format = self
            .format
            .unwrap_or_else(|| config.output_format_or_default());
        match format {
            OutputFormat::Text => {
                for view in &views {
                    println!("{view}");
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&views)
                    .map_err(|e| CliError::Library(e.into()))?;
                println!("{json}");
            }
            OutputFormat::Yaml => {
                let yaml =
                    serde_yaml::to_string(&views).map_err(|e| CliError::Library(e.into()))?;
                print!("{yaml}");
            }
        }

        Ok(())
    }
}

fn views_of(path: &Path, descending: bool) -> Vec<String> {
    match (path, descending) {
        (Path::Canonical(p), false) => p.ascending_iter().map(|v| v.to_string()).collect(),
        (Path::Canonical(p), true) => p.descending_iter().map(|v| v.to_string()).collect(),
        (Path::Relative(p), false) => p.ascending_iter().map(|v| v.to_string()).collect(),
        (Path::Relative(p), true) => p.descending_iter().map(|v| v.to_string()).collect(),
    }
}
