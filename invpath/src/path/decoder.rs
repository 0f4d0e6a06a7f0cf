//! Character-level decoder for the path text encoding.
//!
//! A path is `segment ("/" segment)*` where a segment is a short type code,
//! optionally followed by `;` and an id. Inside an id the reserved characters
//! `;`, `/` and `\` are preceded by `\`.
//!
//! Each segment is scanned with three states:
//!
//! 1. **type**: collect the type code until `;`, `/` or the end of input.
//! 2. **id**: collect the id until `/` or the end of input; `\` switches to
//!    the escape state.
//! 3. **escape**: copy the next character verbatim, then return to **id**.
//!
//! The decoder only checks that each segment is well formed on its own.
//! Whether the sequence is valid is up to the [`Extender`].
//!
//! [`Extender`]: super::Extender

use std::iter::Peekable;
use std::str::CharIndices;

use super::encoder::{DELIMITER, ESCAPE, ID_SEPARATOR};
use super::segment::{Segment, SegmentType};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Type,
    Id,
    Escape,
}

/// Decodes a path string into segments, one at a time.
///
/// Yields `Ok(segment)` for each segment and stops after the first `Err`.
/// An empty input yields nothing; callers decide whether that is an error.
///
/// # Examples
///
/// ```
/// use invpath::path::Decoder;
/// use invpath::SegmentType;
///
/// let segments: Vec<_> = Decoder::new("t;acme/e;prod\\/eu")
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1].element_type(), SegmentType::Environment);
/// assert_eq!(segments[1].element_id(), Some("prod/eu"));
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    // Set after a delimiter: another segment must follow.
    expect_segment: bool,
    failed: bool,
}

impl<'a> Decoder<'a> {
    /// Create a decoder over the whole of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            expect_segment: false,
            failed: false,
        }
    }

    /// Returns the byte offset of the next unread character.
    #[must_use]
    pub fn position(&mut self) -> usize {
        self.chars.peek().map_or(self.source.len(), |(idx, _)| *idx)
    }

    /// Decode the next segment, advancing past its trailing delimiter.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for an empty type code, an unknown type code,
    /// a missing or empty id on a type that requires one, an id on `..`, or
    /// an escape character at the very end of the input.
    pub fn decode_next(&mut self) -> Result<Option<Segment>> {
        if self.chars.peek().is_none() && !self.expect_segment {
            return Ok(None);
        }

        let segment_start = self.position();
        let mut state = State::Type;
        let mut code = String::new();
        let mut id: Option<String> = None;
        self.expect_segment = false;

        while let Some((idx, ch)) = self.chars.next() {
            match state {
                State::Type => match ch {
                    ID_SEPARATOR => {
                        if code.is_empty() {
                            return Err(Error::parse(self.source, idx, "empty type code"));
                        }
                        id = Some(String::new());
                        state = State::Id;
                    }
                    DELIMITER => {
                        self.expect_segment = true;
                        break;
                    }
                    _ => code.push(ch),
                },
                State::Id => match ch {
                    DELIMITER => {
                        self.expect_segment = true;
                        break;
                    }
                    ESCAPE => state = State::Escape,
                    _ => push_id(&mut id, ch),
                },
                State::Escape => {
                    push_id(&mut id, ch);
                    state = State::Id;
                }
            }
        }

        if state == State::Escape {
            return Err(Error::parse(
                self.source,
                self.source.len(),
                "escape character at end of input",
            ));
        }

        let segment = self.finish_segment(segment_start, &code, id)?;
        log::trace!("decoded segment {segment} at offset {segment_start}");
        Ok(Some(segment))
    }

    fn finish_segment(&self, start: usize, code: &str, id: Option<String>) -> Result<Segment> {
        if code.is_empty() {
            return Err(Error::parse(self.source, start, "empty type code"));
        }

        let element_type = SegmentType::from_code(code).ok_or_else(|| {
            Error::parse(self.source, start, format!("unknown type code '{code}'"))
        })?;

        match (element_type.requires_id(), id.as_deref()) {
            (true, None) => Err(Error::parse(
                self.source,
                start,
                format!("{element_type} segment requires an id"),
            )),
            (true, Some("")) => Err(Error::parse(
                self.source,
                start,
                format!("{element_type} segment has an empty id"),
            )),
            (false, Some(_)) => Err(Error::parse(
                self.source,
                start,
                format!("{element_type} segment must not have an id"),
            )),
            _ => Segment::from_parts(element_type, id),
        }
    }
}

fn push_id(id: &mut Option<String>, ch: char) {
    if let Some(buffer) = id {
        buffer.push(ch);
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.decode_next() {
            Ok(segment) => segment.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Decode all of `source` into a vector of segments.
///
/// # Errors
///
/// Returns the first [`Error::Parse`] encountered.
pub fn decode(source: &str) -> Result<Vec<Segment>> {
    Decoder::new(source).collect()
}
