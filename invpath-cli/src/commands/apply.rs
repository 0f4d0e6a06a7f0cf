//! Command to resolve a relative path against a canonical base.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use invpath::{CanonicalPath, Config, OutputFormat, RelativePath};
use serde::Serialize;

/// Resolve a relative path against a canonical base.
#[derive(Args)]
pub struct ApplyCommand {
    /// The relative path to apply
    #[arg(value_name = "RELATIVE", allow_hyphen_values = true)]
    pub relative: String,

    /// Canonical base path (defaults to the configured base)
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub base: Option<String>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Machine-readable result of `apply`.
#[derive(Debug, Serialize)]
struct Resolution {
    base: String,
    relative: String,
    result: String,
}

impl ApplyCommand {
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let base = self.resolve_base(config)?;
        let relative: RelativePath = self.relative.parse()?;

        let result = relative.apply_to(&base)?;
        if global.verbose {
            eprintln!("Applied {relative} to {base}");
        }

        let format = self
            .format
            .unwrap_or_else(|| config.output_format_or_default());
        let resolution = Resolution {
            base: base.to_string(),
            relative: relative.to_string(),
            result: result.to_string(),
        };
        match format {
            OutputFormat::Text => println!("{}", resolution.result),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&resolution)
                    .map_err(|e| CliError::Library(e.into()))?;
                println!("{json}");
            }
            OutputFormat::Yaml => {
                let yaml = serde_yaml::to_string(&resolution)
                    .map_err(|e| CliError::Library(e.into()))?;
                print!("{yaml}");
            }
        }

        Ok(())
    }

    fn resolve_base(&self, config: &Config) -> Result<CanonicalPath, CliError> {
        if let Some(ref text) = self.base {
            return Ok(text.parse()?);
        }
        config.base_path()?.ok_or_else(|| {
            CliError::InvalidArguments(
                "no base path given; pass --base or set `base` in the configuration".to_string(),
            )
        })
    }
}
