//! Paths relative to some canonical base, possibly climbing with `..`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::backbone::PathCore;
use super::builder::{AtRoot, PathBuilder};
use super::canonical::CanonicalPath;
use super::decoder::Decoder;
use super::encoder::{self, DELIMITER};
use super::extender::Extender;
use crate::error::{Error, Result};

/// A path that only gains meaning once applied to a [`CanonicalPath`].
///
/// A relative path starts at a root type or with `..`; after that `..` may
/// follow any segment. Its text form has no leading `/`.
///
/// # Examples
///
/// ```
/// use invpath::{CanonicalPath, RelativePath};
///
/// let base: CanonicalPath = "/t;acme/e;prod/f;agent/r;host".parse().unwrap();
/// let rel: RelativePath = "../../m;uptime".parse().unwrap();
///
/// let target = rel.apply_to(&base).unwrap();
/// assert_eq!(target.to_string(), "/t;acme/e;prod/m;uptime");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelativePath(PathCore);

path_views!(RelativePath, Relative);

impl RelativePath {
    /// Start a typed builder.
    #[must_use]
    pub fn to() -> PathBuilder<Self, AtRoot> {
        PathBuilder::new()
    }

    /// Start a runtime-validated extender with no segments.
    #[must_use]
    pub fn empty() -> Extender<Self> {
        Extender::new()
    }

    /// Returns an extender seeded with this path's visible segments.
    #[must_use]
    pub fn extender(&self) -> Extender<Self> {
        Extender::from_path(self)
    }

    /// Resolve this path against `base`.
    ///
    /// Segments are applied left to right: `..` removes the last segment of
    /// the result so far, so consecutive `..` climb one level each. Every
    /// other segment is appended under the canonical progression rules.
    ///
    /// # Errors
    ///
    /// - [`Error::UpPastRoot`] if `..` is applied to an already empty result
    /// - [`Error::InvalidProgression`] if an appended segment may not follow
    ///   the segment it lands on
    /// - [`Error::EmptyPath`] if every segment of `base` was removed and
    ///   nothing was appended afterwards
    ///
    /// # Examples
    ///
    /// ```
    /// use invpath::{CanonicalPath, RelativePath};
    ///
    /// let tenant = CanonicalPath::of().tenant("t").get().unwrap();
    ///
    /// let sibling = RelativePath::to().up().relationship("rl").get().unwrap();
    /// assert_eq!(sibling.apply_to(&tenant).unwrap().to_string(), "/rl;rl");
    ///
    /// let too_far = RelativePath::to().up().up().tenant("x").get().unwrap();
    /// assert!(too_far.apply_to(&tenant).is_err());
    /// ```
    pub fn apply_to(&self, base: &CanonicalPath) -> Result<CanonicalPath> {
        let mut extender = base.extender();
        for segment in self.0.path() {
            if segment.is_up() {
                if extender.pop().is_none() {
                    return Err(Error::UpPastRoot {
                        base: base.to_string(),
                    });
                }
            } else {
                extender.extend(segment.clone())?;
            }
        }
        log::debug!("applied {self} to {base}");
        extender.get()
    }

    /// Shift both ends of the visible window.
    ///
    /// Positive deltas move toward the leaf. The result may be undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use invpath::RelativePath;
    ///
    /// let rel: RelativePath = "../r;a/r;b".parse().unwrap();
    /// assert_eq!(rel.slide(1, 0).to_string(), "r;a/r;b");
    /// assert_eq!(rel.slide(1, -1).to_string(), "r;a");
    /// assert!(!rel.slide(3, 0).is_defined());
    /// ```
    #[must_use]
    pub fn slide(&self, start_delta: isize, end_delta: isize) -> Self {
        Self(self.0.slide(start_delta, end_delta))
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoder::encode(self.0.path()))
    }
}

impl FromStr for RelativePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with(DELIMITER) {
            return Err(Error::parse(
                s,
                0,
                "relative path must not start with a delimiter",
            ));
        }
        let mut extender = Self::empty();
        for segment in Decoder::new(s) {
            extender.extend(segment?)?;
        }
        extender.get()
    }
}

impl TryFrom<String> for RelativePath {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<RelativePath> for String {
    fn from(path: RelativePath) -> Self {
        path.to_string()
    }
}
