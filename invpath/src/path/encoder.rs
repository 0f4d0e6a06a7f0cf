//! Renders segments back into the escaped text encoding.
//!
//! The output is the exact left inverse of the [decoder](super::decoder):
//! decoding an encoded sequence yields the same segments.

use std::borrow::Cow;

use super::segment::Segment;

/// Separates segments.
pub const DELIMITER: char = '/';

/// Separates a segment's type code from its id.
pub const ID_SEPARATOR: char = ';';

/// Makes the following character literal inside an id.
pub const ESCAPE: char = '\\';

const RESERVED: [char; 3] = [DELIMITER, ID_SEPARATOR, ESCAPE];

/// Escape the reserved characters of an id.
///
/// Borrows the input when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use invpath::path::encoder::escape_id;
///
/// assert_eq!(escape_id("plain"), "plain");
/// assert_eq!(escape_id("a/b;c\\d"), "a\\/b\\;c\\\\d");
/// ```
#[must_use]
pub fn escape_id(id: &str) -> Cow<'_, str> {
    if !id.contains(RESERVED) {
        return Cow::Borrowed(id);
    }

    let mut escaped = String::with_capacity(id.len() + 4);
    for ch in id.chars() {
        if RESERVED.contains(&ch) {
            escaped.push(ESCAPE);
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}

/// Encode a single segment as `code[;id]`.
#[must_use]
pub fn encode_segment(segment: &Segment) -> String {
    let code = segment.element_type().code();
    match segment.element_id() {
        Some(id) => format!("{code}{ID_SEPARATOR}{}", escape_id(id)),
        None => code.to_string(),
    }
}

/// Encode segments root-to-leaf, joined by `/`, with no leading or trailing
/// delimiter.
///
/// # Examples
///
/// ```
/// use invpath::path::encoder::encode;
/// use invpath::{Segment, SegmentType};
///
/// let segments = [
///     Segment::new(SegmentType::Tenant, "acme").unwrap(),
///     Segment::up(),
///     Segment::new(SegmentType::Metric, "cpu/load").unwrap(),
/// ];
/// assert_eq!(encode(&segments), "t;acme/../m;cpu\\/load");
/// ```
#[must_use]
pub fn encode(segments: &[Segment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(&encode_segment(segment));
    }
    out
}
