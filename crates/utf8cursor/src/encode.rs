//! Output budgets and the UTF-8 encoder.
//!
//! Every writer in this crate runs the same algorithm whether it is sizing
//! its output or filling a buffer. [`Sink`] carries that distinction: a
//! measuring sink has no destination and zero capacity, a writing sink wraps
//! a caller-owned slice. Pushes are all-or-nothing per code point. Once a
//! push does not fit, the sink stops writing for the rest of the pass but
//! keeps advancing its logical position, so the final position is always the
//! exact length the pass needs.

use crate::classify::{CONTINUATION_PAYLOAD, CodePoint, encoded_length_for_code_point};

/// An output budget over units of type `T` (`u8`, `u16` or `u32`).
#[derive(Debug)]
pub struct Sink<'a, T> {
    buf: Option<&'a mut [T]>,
    pos: usize,
    remaining: usize,
    written: usize,
}

impl<'a, T: Copy> Sink<'a, T> {
    /// A sink that only measures.
    #[must_use]
    pub const fn measure() -> Self {
        Self {
            buf: None,
            pos: 0,
            remaining: 0,
            written: 0,
        }
    }

    /// A sink that writes into `buf`, never past its end.
    #[must_use]
    pub fn new(buf: &'a mut [T]) -> Self {
        let remaining = buf.len();
        Self {
            buf: Some(buf),
            pos: 0,
            remaining,
            written: 0,
        }
    }

    /// Logical position: units written plus units that did not fit.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Units actually stored in the destination.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Capacity left. Zero for a measuring sink and after any overflow.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Whether this sink has a destination.
    #[must_use]
    pub const fn is_measuring(&self) -> bool {
        self.buf.is_none()
    }

    /// Whether a push has been dropped for lack of room.
    #[must_use]
    pub const fn overflowed(&self) -> bool {
        self.written != self.pos
    }

    /// Appends `units` if they all fit.
    ///
    /// Returns `true` if they were stored. Otherwise nothing is stored, the
    /// remaining capacity drops to zero and only the logical position moves.
    pub fn push(&mut self, units: &[T]) -> bool {
        self.pos += units.len();
        match self.buf.as_deref_mut() {
            Some(buf) if units.len() <= self.remaining => {
                buf[self.written..self.written + units.len()].copy_from_slice(units);
                self.written += units.len();
                self.remaining -= units.len();
                true
            }
            _ => {
                self.remaining = 0;
                false
            }
        }
    }

    /// Stores `unit` just past the output if capacity remains, without
    /// counting it. Used for C-style zero termination.
    pub fn terminate(&mut self, unit: T) -> bool {
        match self.buf.as_deref_mut() {
            Some(buf) if self.remaining > 0 => {
                buf[self.written] = unit;
                true
            }
            _ => false,
        }
    }
}

/// Writes the minimal UTF-8 encoding of `cp` into `buf` and returns the
/// encoded bytes.
///
/// No range check is made: surrogates are encoded like any other three-byte
/// value, and anything past U+10FFFF gets four bytes with the excess high
/// bits truncated out of the lead byte.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_utf8(cp: CodePoint, buf: &mut [u8; 4]) -> &[u8] {
    let len = encoded_length_for_code_point(cp);
    let tail = |shift: u32| ((cp >> shift) as u8 & CONTINUATION_PAYLOAD) | 0x80;
    match len {
        1 => buf[0] = cp as u8,
        2 => {
            buf[0] = (cp >> 6) as u8 | 0xC0;
            buf[1] = tail(0);
        }
        3 => {
            buf[0] = (cp >> 12) as u8 | 0xE0;
            buf[1] = tail(6);
            buf[2] = tail(0);
        }
        _ => {
            buf[0] = ((cp >> 18) as u8 & 0x07) | 0xF0;
            buf[1] = tail(12);
            buf[2] = tail(6);
            buf[3] = tail(0);
        }
    }
    &buf[..len]
}

/// Appends the UTF-8 encoding of `cp` to `sink` and returns the advanced
/// logical position.
///
/// When the sink lacks room for the whole sequence nothing is written, the
/// sink is marked full, and the position still advances by the encoded
/// length, so running a full pass against an undersized (or measuring) sink
/// yields the exact size to allocate.
///
/// ```rust
/// use utf8cursor::{Sink, append_code_point};
///
/// let mut sizing = Sink::<u8>::measure();
/// assert_eq!(append_code_point(0x4E3B, &mut sizing), 3);
///
/// let mut buf = [0u8; 3];
/// let mut sink = Sink::new(&mut buf);
/// assert_eq!(append_code_point(0x4E3B, &mut sink), 3);
/// assert_eq!(buf, [0xE4, 0xB8, 0xBB]);
/// ```
pub fn append_code_point(cp: CodePoint, sink: &mut Sink<'_, u8>) -> usize {
    let mut buf = [0u8; 4];
    sink.push(encode_utf8(cp, &mut buf));
    sink.position()
}
