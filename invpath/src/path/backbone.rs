//! The shared segment backbone and the windowed views over it.
//!
//! A [`PathCore`] is an `Arc` of segments plus a `(start, end)` window.
//! Navigating with [`up`](PathCore::up) or [`down`](PathCore::down) only moves
//! `end`; every view produced this way shares the same backbone, so walking a
//! path never copies or re-validates segments.
//!
//! A window that falls outside the backbone is *undefined* rather than an
//! error. That is how navigation reports running past the root or the leaf,
//! and why [`depth`](PathCore::depth) is signed.

use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::Arc;

use super::segment::Segment;

/// A window over a shared, immutable segment sequence.
///
/// Equality and hashing only consider the window bounds and the segments
/// inside the window.
///
/// # Examples
///
/// ```
/// use invpath::CanonicalPath;
///
/// let path = CanonicalPath::of().tenant("t").environment("e").get().unwrap();
/// let core = path.core();
///
/// assert!(core.is_defined());
/// assert_eq!(core.depth(), 1);
///
/// let above_root = core.up_by(2);
/// assert!(!above_root.is_defined());
/// assert_eq!(above_root.depth(), -1);
/// assert_eq!(above_root.down_by(2), *core);
/// ```
#[derive(Debug, Clone)]
pub struct PathCore {
    segments: Arc<[Segment]>,
    start: isize,
    end: isize,
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

fn offset(base: isize, distance: usize) -> isize {
    base.saturating_add(signed(distance))
}

impl PathCore {
    /// Create a view over the whole of `segments`.
    pub(crate) fn new(segments: Arc<[Segment]>) -> Self {
        let end = signed(segments.len());
        Self {
            segments,
            start: 0,
            end,
        }
    }

    /// Create a view with explicit bounds over a shared backbone.
    pub(crate) fn with_window(segments: Arc<[Segment]>, start: isize, end: isize) -> Self {
        Self {
            segments,
            start,
            end,
        }
    }

    /// Returns the window as an index range, or `None` if undefined.
    fn bounds(&self) -> Option<Range<usize>> {
        let start = usize::try_from(self.start).ok()?;
        let end = usize::try_from(self.end).ok()?;
        (start < end && end <= self.segments.len()).then_some(start..end)
    }

    /// Returns `true` if the window lies within the backbone and is not
    /// empty.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.bounds().is_some()
    }

    /// Returns the view one step toward the root.
    #[must_use]
    pub fn up(&self) -> Self {
        self.up_by(1)
    }

    /// Returns the view `distance` steps toward the root. The result may be
    /// undefined.
    #[must_use]
    pub fn up_by(&self, distance: usize) -> Self {
        Self::with_window(
            Arc::clone(&self.segments),
            self.start,
            self.end.saturating_sub(signed(distance)),
        )
    }

    /// Returns the view one step toward the leaf.
    #[must_use]
    pub fn down(&self) -> Self {
        self.down_by(1)
    }

    /// Returns the view `distance` steps toward the leaf. The result is
    /// undefined if it would extend past the backbone.
    #[must_use]
    pub fn down_by(&self, distance: usize) -> Self {
        Self::with_window(
            Arc::clone(&self.segments),
            self.start,
            offset(self.end, distance),
        )
    }

    /// Returns the view with both bounds moved.
    #[must_use]
    pub(crate) fn slide(&self, start_delta: isize, end_delta: isize) -> Self {
        Self::with_window(
            Arc::clone(&self.segments),
            self.start.saturating_add(start_delta),
            self.end.saturating_add(end_delta),
        )
    }

    /// Returns `end - start - 1`, the number of hops below the first visible
    /// segment. Negative once navigation has gone above the start; clamps at
    /// the `isize` range for extreme windows.
    #[must_use]
    pub fn depth(&self) -> isize {
        self.end.saturating_sub(self.start).saturating_sub(1)
    }

    /// Returns the number of visible segments, zero if undefined.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds().map_or(0, |range| range.len())
    }

    /// Returns `true` if no segment is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the last visible segment, if defined.
    #[must_use]
    pub fn segment(&self) -> Option<&Segment> {
        self.path().last()
    }

    /// Returns the visible segments, root to leaf. Empty if undefined.
    #[must_use]
    pub fn path(&self) -> &[Segment] {
        match self.bounds() {
            Some(range) => &self.segments[range],
            None => &[],
        }
    }

    /// Returns the view holding only the first visible segment.
    #[must_use]
    pub fn root(&self) -> Self {
        Self::with_window(
            Arc::clone(&self.segments),
            self.start,
            self.start.saturating_add(1),
        )
    }

    /// Returns the view reaching the last segment of the backbone.
    #[must_use]
    pub fn leaf(&self) -> Self {
        Self::with_window(
            Arc::clone(&self.segments),
            self.start,
            signed(self.segments.len()),
        )
    }

    /// Returns the window start.
    #[must_use]
    pub fn start(&self) -> isize {
        self.start
    }

    /// Returns the window end (exclusive).
    #[must_use]
    pub fn end(&self) -> isize {
        self.end
    }

    /// Returns the full backbone, ignoring the window.
    #[must_use]
    pub fn backbone(&self) -> &Arc<[Segment]> {
        &self.segments
    }

    /// Returns `true` if both views share the same backbone allocation.
    #[must_use]
    pub fn shares_backbone(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.segments, &other.segments)
    }

    /// Iterates views from this one toward the root, stopping before the
    /// root-only view.
    ///
    /// # Examples
    ///
    /// ```
    /// use invpath::CanonicalPath;
    ///
    /// let path = CanonicalPath::of()
    ///     .tenant("t")
    ///     .environment("e")
    ///     .resource("r")
    ///     .get()
    ///     .unwrap();
    ///
    /// let ids: Vec<_> = path
    ///     .core()
    ///     .ascending_iter()
    ///     .map(|view| view.segment().unwrap().element_id().unwrap().to_string())
    ///     .collect();
    /// assert_eq!(ids, ["r", "e"]);
    /// ```
    #[must_use]
    pub fn ascending_iter(&self) -> std::iter::Rev<Views> {
        self.descending_iter().rev()
    }

    /// Iterates the same views as [`ascending_iter`](Self::ascending_iter),
    /// root toward leaf.
    #[must_use]
    pub fn descending_iter(&self) -> Views {
        let (front, back) = if self.is_defined() {
            (self.start.saturating_add(2), self.end)
        } else {
            (1, 0)
        };
        Views {
            segments: Arc::clone(&self.segments),
            start: self.start,
            front,
            back,
        }
    }
}

impl PartialEq for PathCore {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.path() == other.path()
    }
}

impl Eq for PathCore {}

impl Hash for PathCore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.path().hash(state);
    }
}

/// Views over one backbone with a fixed start and successive ends.
///
/// Produced by [`PathCore::descending_iter`] and, reversed, by
/// [`PathCore::ascending_iter`]. Each item is a new view; the originating
/// path is untouched.
#[derive(Debug, Clone)]
pub struct Views {
    segments: Arc<[Segment]>,
    start: isize,
    // Inclusive range of window ends still to yield.
    front: isize,
    back: isize,
}

impl Views {
    fn view(&self, end: isize) -> PathCore {
        PathCore::with_window(Arc::clone(&self.segments), self.start, end)
    }

    fn remaining(&self) -> usize {
        usize::try_from(self.back - self.front + 1).unwrap_or(0)
    }
}

impl Iterator for Views {
    type Item = PathCore;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let view = self.view(self.front);
        self.front += 1;
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Views {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let view = self.view(self.back);
        self.back -= 1;
        Some(view)
    }
}

impl ExactSizeIterator for Views {}

impl FusedIterator for Views {}
