//! Command to validate a list of paths.

use crate::error::CliError;
use crate::utils::{parse_path, GlobalOptions, KindArg};
use clap::Args;
use invpath::Config;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Validate paths read one per line from a file or standard input.
///
/// Blank lines and lines starting with `#` are skipped.
#[derive(Args)]
pub struct ValidateCommand {
    /// File to read paths from (standard input when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// How to read each path (defaults to the configured kind, then auto)
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

/// Counts from one validation run.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    valid: usize,
    invalid: usize,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let kind = KindArg::resolve(self.kind, config);

        let summary = match self.file {
            Some(ref file) => {
                if !file.exists() {
                    return Err(CliError::InvalidArguments(format!(
                        "File not found: {}",
                        file.display()
                    )));
                }
                let reader = BufReader::new(std::fs::File::open(file)?);
                check_lines(reader, kind, global)?
            }
            None => check_lines(io::stdin().lock(), kind, global)?,
        };

        if !global.quiet {
            println!("{} valid, {} invalid", summary.valid, summary.invalid);
        }

        if summary.invalid > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{} invalid path(s)",
                summary.invalid
            )));
        }
        Ok(())
    }
}

fn check_lines(
    reader: impl BufRead,
    kind: Option<invpath::PathKind>,
    global: &GlobalOptions,
) -> Result<Summary, CliError> {
    let mut summary = Summary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        // ids may carry spaces, so only the line terminator is removed
        let text = line.trim_end_matches(['\r', '\n']);
        if text.trim().is_empty() || text.trim_start().starts_with('#') {
            continue;
        }

        match parse_path(text, kind) {
            Ok(path) => {
                summary.valid += 1;
                if global.verbose {
                    println!("ok  {}: {path}", index + 1);
                }
            }
            Err(e) => {
                summary.invalid += 1;
                eprintln!("line {}: {e}", index + 1);
            }
        }
    }

    Ok(summary)
}
