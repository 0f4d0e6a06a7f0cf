//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered on top of
//! each other; see [`ConfigMerger`](super::ConfigMerger).

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::LogLevel;
use crate::output::OutputFormat;
use crate::path::{CanonicalPath, PathKind};

/// Output format used when nothing is configured.
pub const DEFAULT_OUTPUT_FORMAT: OutputFormat = OutputFormat::Text;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use invpath::config::Config;
/// use invpath::PathKind;
///
/// let config: Config = serde_yaml::from_str(
///     "base: /t;acme/e;prod\nkind: relative\n",
/// ).unwrap();
/// assert_eq!(config.kind, Some(PathKind::Relative));
///
/// let base = config.base_path().unwrap().unwrap();
/// assert_eq!(base.ids().environment_id(), Some("prod"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Canonical path that relative paths are applied to by default.
    pub base: Option<String>,

    /// Output format for reports.
    pub output_format: Option<OutputFormat>,

    /// Logging verbosity when no CLI flag is given.
    pub log_mode: Option<LogLevel>,

    /// How to read paths whose flavor is not given explicitly.
    pub kind: Option<PathKind>,
}

impl Config {
    /// Parse the configured base, if any.
    ///
    /// # Errors
    ///
    /// Returns the parse or validation error of the base path.
    pub fn base_path(&self) -> Result<Option<CanonicalPath>> {
        self.base.as_deref().map(str::parse).transpose()
    }

    /// Returns the configured output format, or the default.
    #[must_use]
    pub fn output_format_or_default(&self) -> OutputFormat {
        self.output_format.unwrap_or(DEFAULT_OUTPUT_FORMAT)
    }
}
