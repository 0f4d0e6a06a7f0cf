//! Typed hierarchical paths into the inventory graph.
//!
//! A path is a sequence of typed [`Segment`]s such as
//! `tenant -> environment -> feed -> resource`. This module provides parsing,
//! encoding, validated construction and cheap navigation for the two path
//! flavors.
//!
//! # Key Concepts
//!
//! ## Text encoding
//!
//! Segments are written `code;id` and joined with `/`:
//!
//! | code | type | code | type |
//! |------|------|------|------|
//! | `t` | tenant | `m` | metric |
//! | `e` | environment | `r` | resource |
//! | `rt` | resource type | `f` | feed |
//! | `mt` | metric type | `rl` | relationship |
//! | `..` | up (relative only) | | |
//!
//! The characters `;`, `/` and `\` inside an id are escaped with `\`.
//! Canonical paths are written with a leading `/`, relative paths without.
//!
//! ## Progression
//!
//! Not every type may follow every other: a feed lives in an environment, a
//! tenant only ever appears first. See [`grammar`] for the tables. Both the
//! runtime [`Extender`] and the compile-time [`PathBuilder`] enforce them.
//!
//! ## Backbone and window
//!
//! A built path is a [`PathCore`]: a shared segment list plus a visible
//! window. `up`, `down` and the view iterators only move the window, so they
//! never copy or re-validate. A window that falls outside the list is
//! *undefined* instead of an error; check [`PathCore::is_defined`].
//!
//! # Examples
//!
//! ```
//! use invpath::{CanonicalPath, Path, RelativePath};
//!
//! let resource = CanonicalPath::of()
//!     .tenant("acme")
//!     .environment("prod")
//!     .resource("db")
//!     .get()
//!     .unwrap();
//! assert_eq!(resource.to_string(), "/t;acme/e;prod/r;db");
//! assert_eq!(resource.ids().environment_id(), Some("prod"));
//!
//! let sibling = RelativePath::to().up().metric("latency").get().unwrap();
//! let metric = sibling.apply_to(&resource).unwrap();
//! assert_eq!(metric.to_string(), "/t;acme/e;prod/m;latency");
//!
//! let parsed: Path = "../m;latency".parse().unwrap();
//! assert_eq!(parsed, Path::Relative(sibling));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Inherent navigation methods that return the wrapping path type rather
/// than a bare [`PathCore`].
macro_rules! path_views {
    ($ty:ident, $kind:ident) => {
        impl $ty {
            /// Returns the underlying backbone view.
            #[must_use]
            pub fn core(&self) -> &$crate::path::PathCore {
                &self.0
            }

            /// Returns `true` if the visible window lies within the backbone.
            #[must_use]
            pub fn is_defined(&self) -> bool {
                self.0.is_defined()
            }

            /// Returns the view one step toward the root.
            #[must_use]
            pub fn up(&self) -> Self {
                Self(self.0.up())
            }

            /// Returns the view `distance` steps toward the root.
            #[must_use]
            pub fn up_by(&self, distance: usize) -> Self {
                Self(self.0.up_by(distance))
            }

            /// Returns the view one step toward the leaf.
            #[must_use]
            pub fn down(&self) -> Self {
                Self(self.0.down())
            }

            /// Returns the view `distance` steps toward the leaf.
            #[must_use]
            pub fn down_by(&self, distance: usize) -> Self {
                Self(self.0.down_by(distance))
            }

            /// See [`PathCore::depth`](crate::path::PathCore::depth).
            #[must_use]
            pub fn depth(&self) -> isize {
                self.0.depth()
            }

            /// Returns the last visible segment.
            #[must_use]
            pub fn segment(&self) -> Option<&$crate::path::Segment> {
                self.0.segment()
            }

            /// Returns the visible segments, root to leaf.
            #[must_use]
            pub fn path(&self) -> &[$crate::path::Segment] {
                self.0.path()
            }

            /// Returns the view holding only the first visible segment.
            #[must_use]
            pub fn root(&self) -> Self {
                Self(self.0.root())
            }

            /// Returns the view reaching the end of the backbone.
            #[must_use]
            pub fn leaf(&self) -> Self {
                Self(self.0.leaf())
            }

            /// Iterates views toward the root, excluding the root-only view.
            #[must_use]
            pub fn ascending_iter(&self) -> $crate::path::AscendingViews<Self> {
                self.0.ascending_iter().map(Self as fn(_) -> Self)
            }

            /// Iterates views toward the leaf, starting below the root.
            #[must_use]
            pub fn descending_iter(&self) -> $crate::path::DescendingViews<Self> {
                self.0.descending_iter().map(Self as fn(_) -> Self)
            }
        }

        impl $crate::path::PathFlavor for $ty {
            const KIND: $crate::path::PathKind = $crate::path::PathKind::$kind;

            fn from_core(core: $crate::path::PathCore) -> Self {
                Self(core)
            }

            fn core(&self) -> &$crate::path::PathCore {
                &self.0
            }
        }
    };
}

mod backbone;
mod builder;
mod canonical;
pub mod decoder;
pub mod encoder;
mod extender;
mod flavor;
pub mod grammar;
mod relative;
mod segment;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use self::backbone::{PathCore, Views};
pub use self::builder::{
    AtEnvironment, AtFeed, AtMetric, AtMetricType, AtRelationship, AtResource, AtResourceType,
    AtRoot, AtTenant, AtUp, EnvironmentBuilder, FeedBuilder, MetricBuilder, MetricTypeBuilder,
    PathBuilder, RelationshipBuilder, ResourceBuilder, ResourceTypeBuilder, Started,
    TenantBuilder, UpBuilder,
};
pub use self::canonical::{CanonicalPath, IdExtractor};
pub use self::decoder::Decoder;
pub use self::extender::Extender;
pub use self::flavor::PathFlavor;
pub use self::grammar::PathKind;
pub use self::relative::RelativePath;
pub use self::segment::{Segment, SegmentType};

/// Typed views toward the root, returned by `ascending_iter` on the path
/// types.
pub type AscendingViews<P> = std::iter::Map<std::iter::Rev<Views>, fn(PathCore) -> P>;

/// Typed views toward the leaf, returned by `descending_iter` on the path
/// types.
pub type DescendingViews<P> = std::iter::Map<Views, fn(PathCore) -> P>;

/// Either flavor of path, as read from text without further context.
///
/// A leading `/` selects a canonical path; anything else is relative.
///
/// # Examples
///
/// ```
/// use invpath::{Path, PathKind};
///
/// let canonical = Path::from_string("/t;acme/e;prod").unwrap();
/// assert_eq!(canonical.kind(), PathKind::Canonical);
///
/// let relative = Path::from_string("../r;db").unwrap();
/// assert_eq!(relative.kind(), PathKind::Relative);
/// assert_eq!(relative.to_string(), "../r;db");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Path {
    /// An absolute path.
    Canonical(CanonicalPath),
    /// A path relative to some base.
    Relative(RelativePath),
}

impl Path {
    /// Parse either flavor, choosing by the leading `/`.
    ///
    /// # Errors
    ///
    /// Returns the decoding or validation error of the chosen flavor.
    pub fn from_string(s: &str) -> Result<Self> {
        if s.starts_with(encoder::DELIMITER) {
            CanonicalPath::from_str(s).map(Self::Canonical)
        } else {
            RelativePath::from_str(s).map(Self::Relative)
        }
    }

    /// Parse as the given flavor.
    ///
    /// # Errors
    ///
    /// Returns the decoding or validation error of that flavor.
    pub fn parse_as(kind: PathKind, s: &str) -> Result<Self> {
        match kind {
            PathKind::Canonical => CanonicalPath::from_str(s).map(Self::Canonical),
            PathKind::Relative => RelativePath::from_str(s).map(Self::Relative),
        }
    }

    /// Returns which flavor this is.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        match self {
            Self::Canonical(_) => PathKind::Canonical,
            Self::Relative(_) => PathKind::Relative,
        }
    }

    /// Returns the underlying backbone view.
    #[must_use]
    pub fn core(&self) -> &PathCore {
        match self {
            Self::Canonical(p) => p.core(),
            Self::Relative(p) => p.core(),
        }
    }

    /// Returns the canonical path, if this is one.
    #[must_use]
    pub fn as_canonical(&self) -> Option<&CanonicalPath> {
        match self {
            Self::Canonical(p) => Some(p),
            Self::Relative(_) => None,
        }
    }

    /// Returns the relative path, if this is one.
    #[must_use]
    pub fn as_relative(&self) -> Option<&RelativePath> {
        match self {
            Self::Relative(p) => Some(p),
            Self::Canonical(_) => None,
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical(p) => write!(f, "{p}"),
            Self::Relative(p) => write!(f, "{p}"),
        }
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl TryFrom<String> for Path {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::from_string(&s)
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.to_string()
    }
}

impl From<CanonicalPath> for Path {
    fn from(path: CanonicalPath) -> Self {
        Self::Canonical(path)
    }
}

impl From<RelativePath> for Path {
    fn from(path: RelativePath) -> Self {
        Self::Relative(path)
    }
}
