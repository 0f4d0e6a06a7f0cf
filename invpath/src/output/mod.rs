//! Output formatting for path reports.
//!
//! A [`PathReport`] is a plain, serializable description of a parsed path.
//! Formatters render it as human-readable text, JSON or YAML.

mod formatters;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::{CanonicalPath, Path, PathKind, Segment, SegmentType};
use crate::Result;

pub use formatters::{JsonFormatter, TextFormatter, YamlFormatter};

/// Trait for rendering path reports.
pub trait OutputFormatter {
    /// Format a single report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, report: &PathReport) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use invpath::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

/// One segment of a [`PathReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentReport {
    /// The segment type.
    #[serde(rename = "type")]
    pub element_type: SegmentType,
    /// The short type code used in the text encoding.
    pub code: String,
    /// The id, absent for `..`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl From<&Segment> for SegmentReport {
    fn from(segment: &Segment) -> Self {
        Self {
            element_type: segment.element_type(),
            code: segment.element_type().code().to_string(),
            id: segment.element_id().map(str::to_string),
        }
    }
}

/// A serializable description of a path.
///
/// # Examples
///
/// ```
/// use invpath::{Path, PathKind};
/// use invpath::output::PathReport;
///
/// let path: Path = "/t;acme/e;prod".parse().unwrap();
/// let report = PathReport::new(&path);
///
/// assert_eq!(report.kind, PathKind::Canonical);
/// assert_eq!(report.depth, 1);
/// assert_eq!(report.ids.get("environment").map(String::as_str), Some("prod"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathReport {
    /// Encoded form of the visible window.
    pub path: String,
    /// The path flavor.
    pub kind: PathKind,
    /// Signed depth of the view.
    pub depth: isize,
    /// Whether the view lies within its backbone.
    pub defined: bool,
    /// Visible segments, root to leaf.
    pub segments: Vec<SegmentReport>,
    /// Entity ids by level name; canonical paths only.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ids: BTreeMap<String, String>,
}

impl PathReport {
    /// Describe `path`.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        let core = path.core();
        Self {
            path: path.to_string(),
            kind: path.kind(),
            depth: core.depth(),
            defined: core.is_defined(),
            segments: core.path().iter().map(SegmentReport::from).collect(),
            ids: path.as_canonical().map(collect_ids).unwrap_or_default(),
        }
    }
}

fn collect_ids(path: &CanonicalPath) -> BTreeMap<String, String> {
    let ids = path.ids();
    [
        ("tenant", ids.tenant_id()),
        ("relationship", ids.relationship_id()),
        ("environment", ids.environment_id()),
        ("resource_type", ids.resource_type_id()),
        ("metric_type", ids.metric_type_id()),
        ("feed", ids.feed_id()),
        ("resource", ids.resource_id()),
        ("metric", ids.metric_id()),
    ]
    .into_iter()
    .filter_map(|(name, id)| id.map(|id| (name.to_string(), id.to_string())))
    .collect()
}
