#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # invpath
//!
//! Typed hierarchical paths into an inventory graph.
//!
//! An inventory is organized as tenants owning environments, resource types
//! and metric types; environments own feeds, resources and metrics; feeds own
//! resources and metrics; resources nest. This library parses, validates,
//! encodes and navigates addresses into that hierarchy.
//!
//! ## Core Types
//!
//! - [`CanonicalPath`] and [`RelativePath`]: the two path flavors
//! - [`Path`]: either flavor, chosen by the text form
//! - [`Segment`] and [`SegmentType`]: typed path elements
//! - [`Extender`] and [`PathBuilder`]: runtime and compile-time construction
//! - [`PathCore`]: the shared backbone and visible window behind every path
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use invpath::{CanonicalPath, RelativePath};
//!
//! let host: CanonicalPath = "/t;acme/e;prod/f;agent-7/r;host".parse().unwrap();
//! assert_eq!(host.ids().feed_id(), Some("agent-7"));
//!
//! // walk toward the root without copying
//! let names: Vec<String> = host.ascending_iter().map(|p| p.to_string()).collect();
//! assert_eq!(names, [
//!     "/t;acme/e;prod/f;agent-7/r;host",
//!     "/t;acme/e;prod/f;agent-7",
//!     "/t;acme/e;prod",
//! ]);
//!
//! let cpu = RelativePath::to().up().metric("cpu").get().unwrap();
//! assert_eq!(cpu.apply_to(&host).unwrap().to_string(), "/t;acme/e;prod/f;agent-7/m;cpu");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter, PathReport};
pub use path::{
    CanonicalPath, Extender, IdExtractor, Path, PathBuilder, PathCore, PathFlavor, PathKind,
    RelativePath, Segment, SegmentType,
};
