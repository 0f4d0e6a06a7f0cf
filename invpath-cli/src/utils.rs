//! Utility functions for CLI operations.
//!
//! Configuration loading, logger selection and path parsing shared by the
//! commands.

use crate::error::CliError;
use clap::ValueEnum;
use invpath::{init_logger, Config, ConfigBuilder, LogLevel, Logger, Path, PathKind};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// How to read a path argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Canonical if it starts with '/', relative otherwise.
    Auto,
    /// Always canonical; the leading '/' is optional.
    Canonical,
    /// Always relative.
    Relative,
}

impl KindArg {
    /// Resolve against the configured default.
    pub fn resolve(arg: Option<Self>, config: &Config) -> Option<PathKind> {
        match arg {
            Some(Self::Auto) => None,
            Some(Self::Canonical) => Some(PathKind::Canonical),
            Some(Self::Relative) => Some(PathKind::Relative),
            None => config.kind,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Project `invpath.yaml`
/// 3. User config (`--config-dir` or `~/.invpath`)
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the logger: CLI flags first, then the configured mode (which
/// already reflects `INVPATH_LOG_MODE`), then the default.
pub fn logger_for(global: &GlobalOptions, configured: Option<LogLevel>) -> Logger {
    if global.verbose || global.quiet {
        return init_logger(global.verbose, global.quiet);
    }
    configured.map_or_else(|| init_logger(false, false), Logger::new)
}

/// Parse `text` as `kind`, or by its leading '/' when `kind` is `None`.
pub fn parse_path(text: &str, kind: Option<PathKind>) -> Result<Path, CliError> {
    let path = match kind {
        Some(kind) => Path::parse_as(kind, text)?,
        None => Path::from_string(text)?,
    };
    Ok(path)
}
