//! Segment types and the short type codes used in the text encoding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The type of entity a path segment addresses.
///
/// The set is closed: every segment in a path is one of these. [`Up`] is a
/// sentinel that only relative paths may contain and is the only type without
/// an id.
///
/// [`Up`]: SegmentType::Up
///
/// # Examples
///
/// ```
/// use invpath::SegmentType;
///
/// assert_eq!(SegmentType::from_code("rt"), Some(SegmentType::ResourceType));
/// assert_eq!(SegmentType::Feed.code(), "f");
/// assert!(!SegmentType::Up.requires_id());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    /// A tenant, the root of all containment.
    Tenant,
    /// An environment within a tenant.
    Environment,
    /// A resource type defined by a tenant.
    ResourceType,
    /// A metric type defined by a tenant.
    MetricType,
    /// A feed reporting into an environment.
    Feed,
    /// A metric, owned by an environment or a feed.
    Metric,
    /// A resource, owned by an environment, a feed or another resource.
    Resource,
    /// A relationship between two entities.
    Relationship,
    /// One step toward the root (`..`), relative paths only.
    Up,
}

impl SegmentType {
    /// Every segment type, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Tenant,
        Self::Environment,
        Self::ResourceType,
        Self::MetricType,
        Self::Feed,
        Self::Metric,
        Self::Resource,
        Self::Relationship,
        Self::Up,
    ];

    /// Returns the short code used for this type in the text encoding.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Tenant => "t",
            Self::Environment => "e",
            Self::ResourceType => "rt",
            Self::MetricType => "mt",
            Self::Feed => "f",
            Self::Metric => "m",
            Self::Resource => "r",
            Self::Relationship => "rl",
            Self::Up => "..",
        }
    }

    /// Looks up a type by its short code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.code() == code)
    }

    /// Returns `true` if segments of this type carry an id.
    #[must_use]
    pub const fn requires_id(self) -> bool {
        !matches!(self, Self::Up)
    }

    /// Returns the lowercase human-readable name of this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::Environment => "environment",
            Self::ResourceType => "resource type",
            Self::MetricType => "metric type",
            Self::Feed => "feed",
            Self::Metric => "metric",
            Self::Resource => "resource",
            Self::Relationship => "relationship",
            Self::Up => "up",
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One typed hop in a path: an element type and, except for `Up`, an id.
///
/// Segments are validated on construction and immutable afterwards.
///
/// # Examples
///
/// ```
/// use invpath::{Segment, SegmentType};
///
/// let seg = Segment::new(SegmentType::Resource, "db;primary").unwrap();
/// assert_eq!(seg.element_id(), Some("db;primary"));
/// assert_eq!(seg.to_string(), "r;db\\;primary");
///
/// assert!(Segment::new(SegmentType::Resource, "").is_err());
/// assert_eq!(Segment::up().to_string(), "..");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    element_type: SegmentType,
    element_id: Option<String>,
}

impl Segment {
    /// Create an id-bearing segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] if `element_type` is `Up` (which has
    /// no id) or if `id` is empty.
    pub fn new(element_type: SegmentType, id: impl Into<String>) -> Result<Self> {
        Self::from_parts(element_type, Some(id.into()))
    }

    /// Create the `Up` sentinel.
    #[must_use]
    pub const fn up() -> Self {
        Self {
            element_type: SegmentType::Up,
            element_id: None,
        }
    }

    /// Create a segment from a type and an optional id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] if the presence of the id does not
    /// match [`SegmentType::requires_id`], or if a required id is empty.
    pub fn from_parts(element_type: SegmentType, element_id: Option<String>) -> Result<Self> {
        match (element_type.requires_id(), element_id.as_deref()) {
            (true, None) => Err(Error::InvalidSegment {
                segment_type: element_type,
                reason: "an id is required".to_string(),
            }),
            (true, Some("")) => Err(Error::InvalidSegment {
                segment_type: element_type,
                reason: "id must not be empty".to_string(),
            }),
            (false, Some(_)) => Err(Error::InvalidSegment {
                segment_type: element_type,
                reason: "this segment type does not take an id".to_string(),
            }),
            _ => Ok(Self {
                element_type,
                element_id,
            }),
        }
    }

    /// Returns the element type.
    #[must_use]
    pub const fn element_type(&self) -> SegmentType {
        self.element_type
    }

    /// Returns the element id, `None` only for `Up`.
    #[must_use]
    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    /// Returns `true` for the `Up` sentinel.
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self.element_type, SegmentType::Up)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::encoder::encode_segment(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_and_resolvable() {
        for ty in SegmentType::ALL {
            assert_eq!(SegmentType::from_code(ty.code()), Some(ty));
        }
        assert_eq!(SegmentType::from_code("x"), None);
        assert_eq!(SegmentType::from_code(""), None);
        assert_eq!(SegmentType::from_code("T"), None);
    }

    #[test]
    fn test_only_up_has_no_id() {
        for ty in SegmentType::ALL {
            assert_eq!(ty.requires_id(), ty != SegmentType::Up);
        }
    }

    #[test]
    fn test_segment_requires_id() {
        let err = Segment::from_parts(SegmentType::Tenant, None).unwrap_err();
        assert!(err.is_validation_error());
        assert!(format!("{err}").contains("id is required"));
    }

    #[test]
    fn test_segment_rejects_empty_id() {
        assert!(Segment::new(SegmentType::Metric, "").is_err());
    }

    #[test]
    fn test_up_rejects_id() {
        assert!(Segment::new(SegmentType::Up, "x").is_err());
        let up = Segment::from_parts(SegmentType::Up, None).unwrap();
        assert_eq!(up, Segment::up());
        assert!(up.is_up());
        assert_eq!(up.element_id(), None);
    }

    #[test]
    fn test_equality_uses_type_and_id() {
        let a = Segment::new(SegmentType::Feed, "x").unwrap();
        let b = Segment::new(SegmentType::Resource, "x").unwrap();
        let c = Segment::new(SegmentType::Feed, "y").unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, Segment::new(SegmentType::Feed, "x").unwrap());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SegmentType::ResourceType.to_string(), "resource type");
        assert_eq!(SegmentType::Up.to_string(), "up");
    }
}
