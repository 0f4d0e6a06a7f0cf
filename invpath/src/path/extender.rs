//! Runtime-validated, incremental path construction.
//!
//! An [`Extender`] accumulates segments, checking each one against the
//! progression table of its flavor before appending it. A rejected segment
//! leaves the extender exactly as it was, so it can be retried or continued
//! with something else.

use std::marker::PhantomData;
use std::sync::Arc;

use super::backbone::PathCore;
use super::flavor::PathFlavor;
use super::grammar::{self, PathKind};
use super::segment::{Segment, SegmentType};
use crate::error::{Error, Result};

/// Builds a path of flavor `P` one validated segment at a time.
///
/// # Examples
///
/// ```
/// use invpath::{CanonicalPath, Extender, Segment, SegmentType};
///
/// let mut extender = Extender::<CanonicalPath>::new();
/// extender
///     .extend(Segment::new(SegmentType::Tenant, "acme").unwrap())
///     .unwrap()
///     .extend_with(SegmentType::Environment, "prod")
///     .unwrap();
///
/// // Tenants cannot follow environments; the extender is left untouched.
/// assert!(extender.extend_with(SegmentType::Tenant, "other").is_err());
///
/// let path = extender.get().unwrap();
/// assert_eq!(path.to_string(), "/t;acme/e;prod");
/// ```
#[derive(Debug, Clone)]
pub struct Extender<P> {
    segments: Vec<Segment>,
    _flavor: PhantomData<P>,
}

impl<P: PathFlavor> Extender<P> {
    /// Create an extender with no segments.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            _flavor: PhantomData,
        }
    }

    /// Create an extender continuing the visible segments of `path`.
    #[must_use]
    pub fn from_path(path: &P) -> Self {
        Self::from_trusted(path.core().path().to_vec())
    }

    /// Seed with segments already known to satisfy the table of `P`.
    pub(crate) fn from_trusted(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            _flavor: PhantomData,
        }
    }

    /// Returns the progression table this extender validates against.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        P::KIND
    }

    /// Returns the type of the last appended segment.
    #[must_use]
    pub fn last_type(&self) -> Option<SegmentType> {
        self.segments.last().map(Segment::element_type)
    }

    /// Returns the segment types the next [`extend`](Self::extend) accepts.
    #[must_use]
    pub fn allowed_next(&self) -> &'static [SegmentType] {
        grammar::allowed_next(P::KIND, self.last_type())
    }

    /// Returns the segments appended so far.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Append `segment` if the progression table allows it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProgression`] if the segment's type may not
    /// follow the current last segment. Nothing is appended in that case.
    pub fn extend(&mut self, segment: Segment) -> Result<&mut Self> {
        let previous = self.last_type();
        let next = segment.element_type();
        if !grammar::is_allowed(P::KIND, previous, next) {
            log::debug!(
                "rejected {next} after {previous:?} in {} path",
                P::KIND
            );
            return Err(Error::InvalidProgression {
                kind: P::KIND,
                previous,
                next,
            });
        }
        self.segments.push(segment);
        Ok(self)
    }

    /// Build a segment from `element_type` and `id`, then append it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] for an empty id or an `Up` type, and
    /// [`Error::InvalidProgression`] as [`extend`](Self::extend) does.
    pub fn extend_with(
        &mut self,
        element_type: SegmentType,
        id: impl Into<String>,
    ) -> Result<&mut Self> {
        let segment = Segment::new(element_type, id)?;
        self.extend(segment)
    }

    /// Append every segment of `segments`, stopping at the first rejection.
    ///
    /// Segments appended before the rejection are kept.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`extend`](Self::extend).
    pub fn extend_all<I>(&mut self, segments: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Segment>,
    {
        for segment in segments {
            self.extend(segment)?;
        }
        Ok(self)
    }

    /// Remove the last segment, returning it.
    pub(crate) fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Finalize into an immutable path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] if no segment was ever appended.
    pub fn get(self) -> Result<P> {
        if self.segments.is_empty() {
            return Err(Error::EmptyPath);
        }
        let backbone: Arc<[Segment]> = self.segments.into();
        Ok(P::from_core(PathCore::new(backbone)))
    }
}

impl<P: PathFlavor> Default for Extender<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{CanonicalPath, RelativePath};

    fn seg(ty: SegmentType, id: &str) -> Segment {
        Segment::new(ty, id).unwrap()
    }

    #[test]
    fn test_get_on_empty_fails() {
        let err = Extender::<CanonicalPath>::new().get().unwrap_err();
        assert!(err.is_empty_path());
    }

    #[test]
    fn test_extend_chains() {
        let mut ext = Extender::<CanonicalPath>::new();
        ext.extend(seg(SegmentType::Tenant, "t"))
            .unwrap()
            .extend(seg(SegmentType::Environment, "e"))
            .unwrap()
            .extend(seg(SegmentType::Feed, "f"))
            .unwrap()
            .extend(seg(SegmentType::Resource, "r"))
            .unwrap();
        assert_eq!(ext.segments().len(), 4);
        assert_eq!(ext.last_type(), Some(SegmentType::Resource));
    }

    #[test]
    fn test_rejection_does_not_mutate() {
        let mut ext = Extender::<CanonicalPath>::new();
        ext.extend(seg(SegmentType::Tenant, "t")).unwrap();

        let err = ext.extend(seg(SegmentType::Relationship, "x")).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidProgression {
                kind: PathKind::Canonical,
                previous: Some(SegmentType::Tenant),
                next: SegmentType::Relationship,
            }
        ));
        assert_eq!(ext.segments().len(), 1);

        ext.extend(seg(SegmentType::Environment, "e")).unwrap();
        assert_eq!(ext.get().unwrap().to_string(), "/t;t/e;e");
    }

    #[test]
    fn test_canonical_rejects_up() {
        let mut ext = Extender::<CanonicalPath>::new();
        ext.extend(seg(SegmentType::Tenant, "t")).unwrap();
        assert!(ext.extend(Segment::up()).is_err());
    }

    #[test]
    fn test_relative_accepts_up() {
        let mut ext = Extender::<RelativePath>::new();
        ext.extend(Segment::up())
            .unwrap()
            .extend(Segment::up())
            .unwrap()
            .extend(seg(SegmentType::Metric, "m"))
            .unwrap();
        assert_eq!(ext.kind(), PathKind::Relative);
        assert_eq!(ext.get().unwrap().to_string(), "../../m;m");
    }

    #[test]
    fn test_extend_with_rejects_empty_id() {
        let mut ext = Extender::<CanonicalPath>::new();
        let err = ext.extend_with(SegmentType::Tenant, "").unwrap_err();
        assert!(matches!(err, Error::InvalidSegment { .. }));
        assert!(ext.segments().is_empty());
    }

    #[test]
    fn test_extend_all_stops_at_first_error() {
        let mut ext = Extender::<CanonicalPath>::new();
        let result = ext.extend_all([
            seg(SegmentType::Tenant, "t"),
            seg(SegmentType::Metric, "m"),
            seg(SegmentType::Environment, "e"),
        ]);
        assert!(result.is_err());
        assert_eq!(ext.segments().len(), 1);
    }

    #[test]
    fn test_allowed_next_tracks_last_type() {
        let mut ext = Extender::<CanonicalPath>::new();
        assert_eq!(
            ext.allowed_next(),
            &[SegmentType::Tenant, SegmentType::Relationship]
        );
        ext.extend(seg(SegmentType::Relationship, "rl")).unwrap();
        assert!(ext.allowed_next().is_empty());
    }

    #[test]
    fn test_from_path_continues_existing() {
        let base = CanonicalPath::of().tenant("t").environment("e").get().unwrap();
        let mut ext = Extender::from_path(&base);
        ext.extend(seg(SegmentType::Resource, "r")).unwrap();
        let extended = ext.get().unwrap();
        assert_eq!(extended.to_string(), "/t;t/e;e/r;r");
        assert_eq!(base.to_string(), "/t;t/e;e");
    }
}
