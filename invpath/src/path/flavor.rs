//! The seam between the generic path machinery and the two path types.

use super::backbone::PathCore;
use super::grammar::PathKind;

/// A concrete path type built on a [`PathCore`].
///
/// Implemented by [`CanonicalPath`](super::CanonicalPath) and
/// [`RelativePath`](super::RelativePath). The generic [`Extender`] and
/// [`PathBuilder`] use it to pick the progression table and to wrap the
/// finished core.
///
/// [`Extender`]: super::Extender
/// [`PathBuilder`]: super::PathBuilder
pub trait PathFlavor: Sized {
    /// The progression table this flavor is validated against.
    const KIND: PathKind;

    /// Wrap a validated core.
    fn from_core(core: PathCore) -> Self;

    /// Returns the underlying core.
    fn core(&self) -> &PathCore;
}
