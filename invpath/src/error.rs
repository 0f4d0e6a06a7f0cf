//! Error types for the invpath library.
//!
//! This module provides the error hierarchy for every fallible operation in
//! the library, using `thiserror` for ergonomic error handling. Parse and
//! validation failures are kept apart so callers can tell malformed text from
//! a well-formed path that breaks the progression rules.

use std::path::PathBuf;

use thiserror::Error;

use crate::path::{PathKind, SegmentType};

/// Result type alias for operations that may fail with an invpath error.
///
/// # Examples
///
/// ```
/// use invpath::{CanonicalPath, Result};
///
/// fn tenant_of(text: &str) -> Result<String> {
///     let path: CanonicalPath = text.parse()?;
///     Ok(path.ids().tenant_id().unwrap_or_default().to_string())
/// }
///
/// assert_eq!(tenant_of("/t;acme").unwrap(), "acme");
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the invpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text is not a well-formed path encoding.
    #[error("invalid path '{input}' at offset {position}: {reason}")]
    Parse {
        /// The full source text being decoded.
        input: String,
        /// Byte offset of the failure within `input`.
        position: usize,
        /// What was wrong at that offset.
        reason: String,
    },

    /// A segment type is not allowed to follow the previous one.
    #[error("validation error: {next} cannot follow {} in a {kind} path", describe_previous(.previous))]
    InvalidProgression {
        /// The flavor whose progression table was consulted.
        kind: PathKind,
        /// The type of the last segment, or `None` at the start of a path.
        previous: Option<SegmentType>,
        /// The rejected segment type.
        next: SegmentType,
    },

    /// A segment was constructed with an id it must not have, or without one
    /// it requires.
    #[error("validation error: invalid {segment_type} segment: {reason}")]
    InvalidSegment {
        /// The type of the offending segment.
        segment_type: SegmentType,
        /// Why the segment is invalid.
        reason: String,
    },

    /// A relative path walks up past the root of its base.
    #[error("validation error: relative path climbs above the root of '{base}'")]
    UpPastRoot {
        /// The encoded base path.
        base: String,
    },

    /// A path was finalized without any segments.
    #[error("path has no segments")]
    EmptyPath,

    /// An invalid configuration value was provided.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A filesystem path (such as a configuration file) could not be used.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending filesystem path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_previous(previous: &Option<SegmentType>) -> String {
    match previous {
        Some(ty) => ty.to_string(),
        None => "the start".to_string(),
    }
}

impl Error {
    pub(crate) fn parse(input: &str, position: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            position,
            reason: reason.into(),
        }
    }

    /// Check if the error comes from malformed source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use invpath::RelativePath;
    ///
    /// let err = "t;a\\".parse::<RelativePath>().unwrap_err();
    /// assert!(err.is_parse_error());
    /// ```
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if the error is a progression or segment validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use invpath::CanonicalPath;
    ///
    /// let err = "/t;t/e;e/t;t".parse::<CanonicalPath>().unwrap_err();
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidProgression { .. } | Self::InvalidSegment { .. } | Self::UpPastRoot { .. }
        )
    }

    /// Check if the error reports a path without segments.
    #[must_use]
    pub fn is_empty_path(&self) -> bool {
        matches!(self, Self::EmptyPath)
    }
}
