//! Progression tables: which segment type may follow which.
//!
//! Each path flavor has a static table keyed by the type of the last segment
//! (or `None` at the start of the path). Lookups are pure; the extender turns
//! a failed lookup into an [`Error::InvalidProgression`].
//!
//! [`Error::InvalidProgression`]: crate::Error::InvalidProgression

use std::fmt;

use serde::{Deserialize, Serialize};

use super::segment::SegmentType;
use SegmentType::{
    Environment, Feed, Metric, MetricType, Relationship, Resource, ResourceType, Tenant, Up,
};

/// The two path flavors, each with its own progression table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// Absolute address from a tenant or relationship root.
    Canonical,
    /// Address relative to an implicit base, may contain `..`.
    Relative,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical => write!(f, "canonical"),
            Self::Relative => write!(f, "relative"),
        }
    }
}

const CANONICAL_START: &[SegmentType] = &[Tenant, Relationship];
const CANONICAL_TENANT: &[SegmentType] = &[Environment, ResourceType, MetricType];
const CANONICAL_ENVIRONMENT: &[SegmentType] = &[Metric, Resource, Feed];
const CANONICAL_FEED: &[SegmentType] = &[Metric, Resource];
const CANONICAL_RESOURCE: &[SegmentType] = &[Resource];
const TERMINAL: &[SegmentType] = &[];

const RELATIVE_START: &[SegmentType] = &[Tenant, Relationship, Up];
const RELATIVE_TENANT: &[SegmentType] = &[Environment, ResourceType, MetricType, Up];
const RELATIVE_ENVIRONMENT: &[SegmentType] = &[Metric, Resource, Feed, Up];
const RELATIVE_FEED: &[SegmentType] = &[Metric, Resource, Up];
const RELATIVE_RESOURCE: &[SegmentType] = &[Resource, Up];
const RELATIVE_TERMINAL: &[SegmentType] = &[Up];
const RELATIVE_UP: &[SegmentType] = &[
    Tenant,
    Environment,
    ResourceType,
    MetricType,
    Feed,
    Resource,
    Metric,
    Up,
];

/// Returns the segment types allowed after `last` in a path of `kind`.
///
/// # Examples
///
/// ```
/// use invpath::path::grammar::allowed_next;
/// use invpath::{PathKind, SegmentType};
///
/// let next = allowed_next(PathKind::Canonical, Some(SegmentType::Feed));
/// assert_eq!(next, &[SegmentType::Metric, SegmentType::Resource]);
///
/// assert!(allowed_next(PathKind::Canonical, Some(SegmentType::Metric)).is_empty());
/// assert_eq!(allowed_next(PathKind::Relative, Some(SegmentType::Metric)), &[SegmentType::Up]);
/// ```
#[must_use]
pub fn allowed_next(kind: PathKind, last: Option<SegmentType>) -> &'static [SegmentType] {
    match kind {
        PathKind::Canonical => match last {
            None => CANONICAL_START,
            Some(Tenant) => CANONICAL_TENANT,
            Some(Environment) => CANONICAL_ENVIRONMENT,
            Some(Feed) => CANONICAL_FEED,
            Some(Resource) => CANONICAL_RESOURCE,
            Some(Metric | ResourceType | MetricType | Relationship | Up) => TERMINAL,
        },
        PathKind::Relative => match last {
            None => RELATIVE_START,
            Some(Tenant) => RELATIVE_TENANT,
            Some(Environment) => RELATIVE_ENVIRONMENT,
            Some(Feed) => RELATIVE_FEED,
            Some(Resource) => RELATIVE_RESOURCE,
            Some(Up) => RELATIVE_UP,
            Some(Metric | ResourceType | MetricType | Relationship) => RELATIVE_TERMINAL,
        },
    }
}

/// Returns `true` if `next` may follow `last` in a path of `kind`.
#[must_use]
pub fn is_allowed(kind: PathKind, last: Option<SegmentType>, next: SegmentType) -> bool {
    allowed_next(kind, last).contains(&next)
}
