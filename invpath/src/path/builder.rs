//! Typestate builders mirroring the progression tables.
//!
//! [`CanonicalPath::of`] and [`RelativePath::to`] start a [`PathBuilder`] in
//! the [`AtRoot`] state. Each state only offers the transitions its
//! progression table allows, so an invalid shape does not compile:
//!
//! ```compile_fail
//! use invpath::CanonicalPath;
//!
//! // metrics cannot follow a tenant directly
//! let _ = CanonicalPath::of().tenant("t").metric("m");
//! ```
//!
//! ```compile_fail
//! use invpath::CanonicalPath;
//!
//! // canonical paths have no `..`
//! let _ = CanonicalPath::of().tenant("t").up();
//! ```
//!
//! Every step still goes through [`Extender::extend`], so both front-ends
//! enforce the same rules. An invalid id (such as an empty string) is
//! remembered and reported by [`get`](PathBuilder::get).
//!
//! [`CanonicalPath::of`]: super::CanonicalPath::of
//! [`RelativePath::to`]: super::RelativePath::to

use std::marker::PhantomData;

use super::extender::Extender;
use super::flavor::PathFlavor;
use super::relative::RelativePath;
use super::segment::{Segment, SegmentType};
use crate::error::{Error, Result};

/// Nothing appended yet.
#[derive(Debug, Clone, Copy)]
pub struct AtRoot;
/// Last segment is a tenant.
#[derive(Debug, Clone, Copy)]
pub struct AtTenant;
/// Last segment is an environment.
#[derive(Debug, Clone, Copy)]
pub struct AtEnvironment;
/// Last segment is a feed.
#[derive(Debug, Clone, Copy)]
pub struct AtFeed;
/// Last segment is a resource.
#[derive(Debug, Clone, Copy)]
pub struct AtResource;
/// Last segment is a metric.
#[derive(Debug, Clone, Copy)]
pub struct AtMetric;
/// Last segment is a resource type.
#[derive(Debug, Clone, Copy)]
pub struct AtResourceType;
/// Last segment is a metric type.
#[derive(Debug, Clone, Copy)]
pub struct AtMetricType;
/// Last segment is a relationship.
#[derive(Debug, Clone, Copy)]
pub struct AtRelationship;
/// Last segment is `..`.
#[derive(Debug, Clone, Copy)]
pub struct AtUp;

/// States in which at least one segment has been appended.
pub trait Started {}

impl Started for AtTenant {}
impl Started for AtEnvironment {}
impl Started for AtFeed {}
impl Started for AtResource {}
impl Started for AtMetric {}
impl Started for AtResourceType {}
impl Started for AtMetricType {}
impl Started for AtRelationship {}
impl Started for AtUp {}

/// A path of flavor `P` under construction, currently in state `S`.
#[derive(Debug)]
pub struct PathBuilder<P, S> {
    extender: Extender<P>,
    error: Option<Error>,
    _state: PhantomData<S>,
}

/// Builder positioned after a tenant.
pub type TenantBuilder<P> = PathBuilder<P, AtTenant>;
/// Builder positioned after an environment.
pub type EnvironmentBuilder<P> = PathBuilder<P, AtEnvironment>;
/// Builder positioned after a feed.
pub type FeedBuilder<P> = PathBuilder<P, AtFeed>;
/// Builder positioned after a resource.
pub type ResourceBuilder<P> = PathBuilder<P, AtResource>;
/// Builder positioned after a metric.
pub type MetricBuilder<P> = PathBuilder<P, AtMetric>;
/// Builder positioned after a resource type.
pub type ResourceTypeBuilder<P> = PathBuilder<P, AtResourceType>;
/// Builder positioned after a metric type.
pub type MetricTypeBuilder<P> = PathBuilder<P, AtMetricType>;
/// Builder positioned after a relationship.
pub type RelationshipBuilder<P> = PathBuilder<P, AtRelationship>;
/// Builder positioned after `..`.
pub type UpBuilder = PathBuilder<RelativePath, AtUp>;

impl<P: PathFlavor> PathBuilder<P, AtRoot> {
    pub(crate) fn new() -> Self {
        Self {
            extender: Extender::new(),
            error: None,
            _state: PhantomData,
        }
    }
}

impl<P: PathFlavor, S> PathBuilder<P, S> {
    fn push<T>(mut self, segment: Result<Segment>) -> PathBuilder<P, T> {
        if self.error.is_none() {
            if let Err(e) = segment.and_then(|s| self.extender.extend(s).map(|_| ())) {
                self.error = Some(e);
            }
        }
        PathBuilder {
            extender: self.extender,
            error: self.error,
            _state: PhantomData,
        }
    }

    fn step<T>(self, element_type: SegmentType, id: impl Into<String>) -> PathBuilder<P, T> {
        self.push(Segment::new(element_type, id))
    }
}

impl<P: PathFlavor, S: Started> PathBuilder<P, S> {
    /// Finish the path.
    ///
    /// # Errors
    ///
    /// Returns the first error recorded while building, typically
    /// [`Error::InvalidSegment`] for an empty id.
    pub fn get(self) -> Result<P> {
        match self.error {
            Some(e) => Err(e),
            None => self.extender.get(),
        }
    }

    /// Returns the segments appended so far.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        self.extender.segments()
    }
}

impl<P: PathFlavor> PathBuilder<P, AtRoot> {
    /// Start at a tenant.
    #[must_use]
    pub fn tenant(self, id: impl Into<String>) -> TenantBuilder<P> {
        self.step(SegmentType::Tenant, id)
    }

    /// Start at a relationship.
    #[must_use]
    pub fn relationship(self, id: impl Into<String>) -> RelationshipBuilder<P> {
        self.step(SegmentType::Relationship, id)
    }
}

impl<P: PathFlavor> PathBuilder<P, AtTenant> {
    /// Descend into an environment.
    #[must_use]
    pub fn environment(self, id: impl Into<String>) -> EnvironmentBuilder<P> {
        self.step(SegmentType::Environment, id)
    }

    /// Descend into a resource type.
    #[must_use]
    pub fn resource_type(self, id: impl Into<String>) -> ResourceTypeBuilder<P> {
        self.step(SegmentType::ResourceType, id)
    }

    /// Descend into a metric type.
    #[must_use]
    pub fn metric_type(self, id: impl Into<String>) -> MetricTypeBuilder<P> {
        self.step(SegmentType::MetricType, id)
    }
}

impl<P: PathFlavor> PathBuilder<P, AtEnvironment> {
    /// Descend into a feed.
    #[must_use]
    pub fn feed(self, id: impl Into<String>) -> FeedBuilder<P> {
        self.step(SegmentType::Feed, id)
    }

    /// Descend into a resource.
    #[must_use]
    pub fn resource(self, id: impl Into<String>) -> ResourceBuilder<P> {
        self.step(SegmentType::Resource, id)
    }

    /// Descend into a metric.
    #[must_use]
    pub fn metric(self, id: impl Into<String>) -> MetricBuilder<P> {
        self.step(SegmentType::Metric, id)
    }
}

impl<P: PathFlavor> PathBuilder<P, AtFeed> {
    /// Descend into a resource.
    #[must_use]
    pub fn resource(self, id: impl Into<String>) -> ResourceBuilder<P> {
        self.step(SegmentType::Resource, id)
    }

    /// Descend into a metric.
    #[must_use]
    pub fn metric(self, id: impl Into<String>) -> MetricBuilder<P> {
        self.step(SegmentType::Metric, id)
    }
}

impl<P: PathFlavor> PathBuilder<P, AtResource> {
    /// Descend into a child resource.
    #[must_use]
    pub fn resource(self, id: impl Into<String>) -> ResourceBuilder<P> {
        self.step(SegmentType::Resource, id)
    }
}

impl<S> PathBuilder<RelativePath, S> {
    /// Step toward the root.
    #[must_use]
    pub fn up(self) -> UpBuilder {
        self.push(Ok(Segment::up()))
    }
}

impl PathBuilder<RelativePath, AtUp> {
    /// Continue with a tenant.
    #[must_use]
    pub fn tenant(self, id: impl Into<String>) -> TenantBuilder<RelativePath> {
        self.step(SegmentType::Tenant, id)
    }

    /// Continue with an environment.
    #[must_use]
    pub fn environment(self, id: impl Into<String>) -> EnvironmentBuilder<RelativePath> {
        self.step(SegmentType::Environment, id)
    }

    /// Continue with a resource type.
    #[must_use]
    pub fn resource_type(self, id: impl Into<String>) -> ResourceTypeBuilder<RelativePath> {
        self.step(SegmentType::ResourceType, id)
    }

    /// Continue with a metric type.
    #[must_use]
    pub fn metric_type(self, id: impl Into<String>) -> MetricTypeBuilder<RelativePath> {
        self.step(SegmentType::MetricType, id)
    }

    /// Continue with a feed.
    #[must_use]
    pub fn feed(self, id: impl Into<String>) -> FeedBuilder<RelativePath> {
        self.step(SegmentType::Feed, id)
    }

    /// Continue with a resource.
    #[must_use]
    pub fn resource(self, id: impl Into<String>) -> ResourceBuilder<RelativePath> {
        self.step(SegmentType::Resource, id)
    }

    /// Continue with a metric.
    #[must_use]
    pub fn metric(self, id: impl Into<String>) -> MetricBuilder<RelativePath> {
        self.step(SegmentType::Metric, id)
    }
}
