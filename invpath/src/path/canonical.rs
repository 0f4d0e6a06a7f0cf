//! Absolute paths, anchored at a tenant or a relationship.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::backbone::PathCore;
use super::builder::{AtRoot, PathBuilder};
use super::decoder::Decoder;
use super::encoder::{self, DELIMITER};
use super::extender::Extender;
use super::segment::{Segment, SegmentType};
use crate::error::{Error, Result};

/// An absolute address in the inventory, starting at the root.
///
/// The window of a canonical path always starts at the first segment of its
/// backbone; navigation only moves the end. Its text form carries a leading
/// `/`.
///
/// # Examples
///
/// ```
/// use invpath::CanonicalPath;
///
/// let path: CanonicalPath = "/t;acme/e;prod/f;agent-1/r;host".parse().unwrap();
/// assert_eq!(path.depth(), 3);
///
/// let ids = path.ids();
/// assert_eq!(ids.tenant_id(), Some("acme"));
/// assert_eq!(ids.feed_id(), Some("agent-1"));
/// assert_eq!(ids.resource_id(), Some("host"));
///
/// assert_eq!(path.up().to_string(), "/t;acme/e;prod/f;agent-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalPath(PathCore);

path_views!(CanonicalPath, Canonical);

impl CanonicalPath {
    /// Start a typed builder.
    #[must_use]
    pub fn of() -> PathBuilder<Self, AtRoot> {
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

    /// Returns a new path with `segment` appended to the visible segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProgression`] if the segment may not follow
    /// this path's last segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use invpath::{CanonicalPath, Segment, SegmentType};
    ///
    /// let tenant = CanonicalPath::of().tenant("t").get().unwrap();
    ///
    /// let rel = Segment::new(SegmentType::Relationship, "r").unwrap();
    /// assert!(tenant.extend(rel).unwrap_err().is_validation_error());
    ///
    /// let env = Segment::new(SegmentType::Environment, "e").unwrap();
    /// assert_eq!(tenant.extend(env).unwrap().to_string(), "/t;t/e;e");
    /// ```
    pub fn extend(&self, segment: Segment) -> Result<Self> {
        let mut extender = self.extender();
        extender.extend(segment)?;
        extender.get()
    }

    /// Returns the id extractor for this path.
    #[must_use]
    pub fn ids(&self) -> IdExtractor<'_> {
        IdExtractor {
            path: self.0.path(),
        }
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DELIMITER}{}", encoder::encode(self.0.path()))
    }
}

impl FromStr for CanonicalPath {
    type Err = Error;

    /// Parse a canonical path, with or without its leading `/`.
    fn from_str(s: &str) -> Result<Self> {
        let body = s.strip_prefix(DELIMITER).unwrap_or(s);
        let mut extender = Self::empty();
        for segment in Decoder::new(body) {
            extender.extend(segment.map_err(|e| shift_position(e, s.len() - body.len()))?)?;
        }
        extender.get()
    }
}

/// Re-base a decoder error from the stripped body onto the full input.
fn shift_position(err: Error, by: usize) -> Error {
    match err {
        Error::Parse {
            input,
            position,
            reason,
        } if by > 0 => Error::Parse {
            input: format!("{DELIMITER}{input}"),
            position: position + by,
            reason,
        },
        other => other,
    }
}

impl TryFrom<String> for CanonicalPath {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CanonicalPath> for String {
    fn from(path: CanonicalPath) -> Self {
        path.to_string()
    }
}

/// Reads entity ids from the fixed positions of a canonical path.
///
/// Each accessor returns `None` when the path does not reach that level, or
/// has a different type there.
///
/// Positions: tenant or relationship at 0; environment, resource type or
/// metric type at 1; feed, resource or metric at 2; resource or metric at 3
/// when a feed owns them.
#[derive(Debug, Clone, Copy)]
pub struct IdExtractor<'a> {
    path: &'a [Segment],
}

impl<'a> IdExtractor<'a> {
    fn id_at(&self, index: usize, element_type: SegmentType) -> Option<&'a str> {
        self.path
            .get(index)
            .filter(|segment| segment.element_type() == element_type)
            .and_then(Segment::element_id)
    }

    /// Returns the tenant id.
    #[must_use]
    pub fn tenant_id(&self) -> Option<&'a str> {
        self.id_at(0, SegmentType::Tenant)
    }

    /// Returns the relationship id.
    #[must_use]
    pub fn relationship_id(&self) -> Option<&'a str> {
        self.id_at(0, SegmentType::Relationship)
    }

    /// Returns the environment id.
    #[must_use]
    pub fn environment_id(&self) -> Option<&'a str> {
        self.id_at(1, SegmentType::Environment)
    }

    /// Returns the resource type id.
    #[must_use]
    pub fn resource_type_id(&self) -> Option<&'a str> {
        self.id_at(1, SegmentType::ResourceType)
    }

    /// Returns the metric type id.
    #[must_use]
    pub fn metric_type_id(&self) -> Option<&'a str> {
        self.id_at(1, SegmentType::MetricType)
    }

    /// Returns the feed id.
    #[must_use]
    pub fn feed_id(&self) -> Option<&'a str> {
        self.id_at(2, SegmentType::Feed)
    }

    /// Returns the id of the top-level resource, owned by either the
    /// environment or a feed.
    #[must_use]
    pub fn resource_id(&self) -> Option<&'a str> {
        self.id_at(2, SegmentType::Resource)
            .or_else(|| self.feed_id().and(self.id_at(3, SegmentType::Resource)))
    }

    /// Returns the metric id, owned by either the environment or a feed.
    #[must_use]
    pub fn metric_id(&self) -> Option<&'a str> {
        self.id_at(2, SegmentType::Metric)
            .or_else(|| self.feed_id().and(self.id_at(3, SegmentType::Metric)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource_path() -> CanonicalPath {
        CanonicalPath::of()
            .tenant("t")
            .environment("e")
            .resource("r")
            .get()
            .unwrap()
    }

    #[test]
    fn test_display_has_leading_delimiter() {
        assert_eq!(resource_path().to_string(), "/t;t/e;e/r;r");
    }

    #[test]
    fn test_parse_with_and_without_leading_delimiter() {
        let with: CanonicalPath = "/t;t/e;e/r;r".parse().unwrap();
        let without: CanonicalPath = "t;t/e;e/r;r".parse().unwrap();
        assert_eq!(with, resource_path());
        assert_eq!(without, resource_path());
    }

    #[test]
    fn test_parse_rejects_reappearing_tenant() {
        let err = "/t;t/e;e/t;t".parse::<CanonicalPath>().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidProgression {
                previous: Some(SegmentType::Environment),
                next: SegmentType::Tenant,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_up() {
        assert!("/t;t/..".parse::<CanonicalPath>().unwrap_err().is_validation_error());
    }

    #[test]
    fn test_parse_empty() {
        assert!("".parse::<CanonicalPath>().unwrap_err().is_empty_path());
        assert!("/".parse::<CanonicalPath>().unwrap_err().is_empty_path());
    }

    #[test]
    fn test_parse_error_positions_include_leading_delimiter() {
        let err = "/t;t/x;y".parse::<CanonicalPath>().unwrap_err();
        match err {
            Error::Parse {
                input, position, ..
            } => {
                assert_eq!(input, "/t;t/x;y");
                assert_eq!(position, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_undefined_after_up_from_tenant() {
        let tenant = CanonicalPath::of().tenant("t").get().unwrap();
        let above = tenant.up();
        assert!(!above.is_defined());
        assert_eq!(above.down(), tenant);
    }

    #[test]
    fn test_extend_from_environment_with_resource() {
        let env = CanonicalPath::of().tenant("t").environment("e").get().unwrap();
        let res = env
            .extend(Segment::new(SegmentType::Resource, "r").unwrap())
            .unwrap();
        assert_eq!(res, resource_path());
    }

    #[test]
    fn test_extend_from_view_uses_visible_segments() {
        let env = resource_path().up();
        let metric = env
            .extend(Segment::new(SegmentType::Metric, "m").unwrap())
            .unwrap();
        assert_eq!(metric.to_string(), "/t;t/e;e/m;m");
    }

    #[test]
    fn test_ids_of_feedless_resource() {
        let path = resource_path();
        let ids = path.ids();
        assert_eq!(ids.tenant_id(), Some("t"));
        assert_eq!(ids.environment_id(), Some("e"));
        assert_eq!(ids.resource_id(), Some("r"));
        assert_eq!(ids.feed_id(), None);
        assert_eq!(ids.metric_id(), None);
        assert_eq!(ids.relationship_id(), None);
    }

    #[test]
    fn test_ids_of_feed_resource() {
        let path = CanonicalPath::of()
            .tenant("t")
            .environment("e")
            .feed("f")
            .resource("r")
            .resource("child")
            .get()
            .unwrap();
        let ids = path.ids();
        assert_eq!(ids.feed_id(), Some("f"));
        assert_eq!(ids.resource_id(), Some("r"));
    }

    #[test]
    fn test_ids_of_feed_metric() {
        let path = CanonicalPath::of()
            .tenant("t")
            .environment("e")
            .feed("f")
            .metric("m")
            .get()
            .unwrap();
        assert_eq!(path.ids().metric_id(), Some("m"));
        assert_eq!(path.ids().resource_id(), None);
    }

    #[test]
    fn test_ids_of_types_and_relationships() {
        let rt = CanonicalPath::of().tenant("t").resource_type("rt").get().unwrap();
        assert_eq!(rt.ids().resource_type_id(), Some("rt"));
        assert_eq!(rt.ids().metric_type_id(), None);

        let mt = CanonicalPath::of().tenant("t").metric_type("mt").get().unwrap();
        assert_eq!(mt.ids().metric_type_id(), Some("mt"));

        let rl = CanonicalPath::of().relationship("rl").get().unwrap();
        assert_eq!(rl.ids().relationship_id(), Some("rl"));
        assert_eq!(rl.ids().tenant_id(), None);
    }

    #[test]
    fn test_ids_limited_to_visible_window() {
        let env = resource_path().up();
        assert_eq!(env.ids().resource_id(), None);
        assert_eq!(env.leaf().ids().resource_id(), Some("r"));
        assert_eq!(env.root().ids().environment_id(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let path = resource_path();
        let yaml = serde_yaml::to_string(&path).unwrap();
        let back: CanonicalPath = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, path);
    }
}
