//! Bidirectional code point cursors over a borrowed byte view.
//!
//! A [`Cursor`] is a plain `Copy` value: every step returns a new cursor and
//! leaves the one it was called on untouched, so a failed checked step needs
//! no rollback. Positions are expected to sit on code point boundaries; the
//! cursor never realigns itself, but it also never indexes outside its view.

use core::fmt;

use bstr::BStr;

use crate::{
    classify::{CodePoint, is_continuation},
    decode::{decode_next, decode_next_unchecked},
    error::ErrorKind,
};

/// A position inside a UTF-8 byte view.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("consumed", &BStr::new(&self.bytes[..self.pos]))
            .field("rest", &BStr::new(self.rest()))
            .finish()
    }
}

impl<'a> Cursor<'a> {
    /// A cursor at the start of `bytes`.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// A cursor at byte offset `pos`, or `None` if `pos` is past the end.
    #[must_use]
    pub const fn at(bytes: &'a [u8], pos: usize) -> Option<Self> {
        if pos <= bytes.len() {
            Some(Self { bytes, pos })
        } else {
            None
        }
    }

    /// A cursor at the end of `bytes`, for walking backwards.
    #[must_use]
    pub const fn end(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: bytes.len(),
        }
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The whole view the cursor walks over.
    #[must_use]
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The bytes from the cursor to the end of the view.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Whether no bytes remain.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Whether the cursor is at offset zero.
    #[must_use]
    pub const fn is_at_start(&self) -> bool {
        self.pos == 0
    }

    /// Decodes the next code point with full validation.
    ///
    /// # Errors
    ///
    /// Returns the [`ErrorKind`] of the malformed sequence at the cursor. At
    /// the end of the view this is [`ErrorKind::TruncatedSequence`].
    pub fn try_next(self) -> Result<(CodePoint, Self), ErrorKind> {
        let (cp, len) = decode_next(self.bytes, self.pos)?;
        Ok((cp, self.with_pos(self.pos + len)))
    }

    /// Decodes the next code point, trusting that the view is valid.
    ///
    /// Returns `None` at the end of the view.
    #[must_use]
    pub fn next_unchecked(self) -> Option<(CodePoint, Self)> {
        let (cp, len) = decode_next_unchecked(self.bytes, self.pos)?;
        Some((cp, self.with_pos(self.pos + len)))
    }

    /// The code point at the cursor, without moving.
    #[must_use]
    pub fn peek_next(&self) -> Option<CodePoint> {
        decode_next_unchecked(self.bytes, self.pos).map(|(cp, _)| cp)
    }

    /// Steps back over one code point and decodes it.
    ///
    /// Returns `None` at the start of the view.
    #[must_use]
    pub fn prior(self) -> Option<(CodePoint, Self)> {
        let (cp, pos) = decode_prior(self.bytes, self.pos)?;
        Some((cp, self.with_pos(pos)))
    }

    /// Moves forward `n` code points, stopping early at the end of the view.
    #[must_use]
    pub fn advance(self, n: usize) -> Self {
        self.with_pos(advance(self.bytes, self.pos, n))
    }

    /// Number of code points between this cursor and a later one over the
    /// same view. Returns zero if `last` is not after `self`.
    ///
    /// Both cursors must come from the same byte view; this is checked in
    /// debug builds.
    #[must_use]
    pub fn distance_to(&self, last: Cursor<'_>) -> usize {
        debug_assert!(
            core::ptr::eq(self.bytes, last.bytes),
            "distance_to called with cursors over different views"
        );
        let end = last.pos.min(self.bytes.len());
        if end <= self.pos {
            return 0;
        }
        code_point_distance(&self.bytes[self.pos..end])
    }

    /// Iterates the remaining code points without validation.
    #[must_use]
    pub fn code_points(self) -> CodePoints<'a> {
        CodePoints { cursor: self }
    }

    /// Iterates the remaining code points with validation, yielding the first
    /// error and then stopping.
    #[must_use]
    pub fn try_code_points(self) -> TryCodePoints<'a> {
        TryCodePoints {
            cursor: self,
            failed: false,
        }
    }

    const fn with_pos(self, pos: usize) -> Self {
        Self {
            bytes: self.bytes,
            pos,
        }
    }
}

/// Steps back from `pos` over one code point.
///
/// Returns the decoded code point and the offset of its first byte, or
/// `None` when `pos` is zero. A `pos` past the end is treated as the end.
#[must_use]
pub fn decode_prior(bytes: &[u8], pos: usize) -> Option<(CodePoint, usize)> {
    let mut start = pos.min(bytes.len()).checked_sub(1)?;
    while start > 0 && bytes.get(start).copied().is_some_and(is_continuation) {
        start -= 1;
    }
    let (cp, _) = decode_next_unchecked(bytes, start)?;
    Some((cp, start))
}

/// Moves `pos` forward over `n` code points, stopping at the end of `bytes`.
#[must_use]
pub fn advance(bytes: &[u8], mut pos: usize, n: usize) -> usize {
    for _ in 0..n {
        let Some((_, len)) = decode_next_unchecked(bytes, pos) else {
            break;
        };
        pos += len;
    }
    pos
}

/// Counts the code points in `bytes`, trusting that it is valid UTF-8.
#[must_use]
pub fn code_point_distance(bytes: &[u8]) -> usize {
    Cursor::new(bytes).code_points().count()
}

/// Unchecked forward iterator over code points. See [`Cursor::code_points`].
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    cursor: Cursor<'a>,
}

impl CodePoints<'_> {
    /// Byte offset of the next code point.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl Iterator for CodePoints<'_> {
    type Item = CodePoint;

    fn next(&mut self) -> Option<CodePoint> {
        let (cp, next) = self.cursor.next_unchecked()?;
        self.cursor = next;
        Some(cp)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.cursor.rest().len();
        (rest.div_ceil(4), Some(rest))
    }
}

impl DoubleEndedIterator for CodePoints<'_> {
    fn next_back(&mut self) -> Option<CodePoint> {
        let end = self.cursor.bytes.len();
        if end <= self.cursor.pos {
            return None;
        }
        let (cp, start) = decode_prior(self.cursor.bytes, end)?;
        // Never step back past the front position.
        let start = start.max(self.cursor.pos);
        self.cursor.bytes = &self.cursor.bytes[..start];
        Some(cp)
    }
}

/// Checked forward iterator over code points. See
/// [`Cursor::try_code_points`].
#[derive(Debug, Clone)]
pub struct TryCodePoints<'a> {
    cursor: Cursor<'a>,
    failed: bool,
}

impl TryCodePoints<'_> {
    /// Byte offset of the next sequence, or of the failed one after an
    /// error.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl Iterator for TryCodePoints<'_> {
    type Item = Result<CodePoint, ErrorKind>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_at_end() {
            return None;
        }
        match self.cursor.try_next() {
            Ok((cp, next)) => {
                self.cursor = next;
                Some(Ok(cp))
            }
            Err(kind) => {
                self.failed = true;
                Some(Err(kind))
            }
        }
    }
}
