//! Single code point decoding.
//!
//! Both entry points take the whole byte view plus a position instead of a
//! sub-slice, so the lengths they return can be added straight back to the
//! caller's position. Neither one ever reads outside `bytes`.

use crate::{
    classify::{
        CONTINUATION_PAYLOAD, CodePoint, encoded_length_for_code_point, is_continuation,
        is_valid_code_point, lead_payload_mask, sequence_length_from_lead,
    },
    error::ErrorKind,
};

/// Decodes the sequence starting at `pos`, checking every grammar rule.
///
/// On success returns the code point and the number of bytes it occupies.
/// On failure nothing is consumed; the caller's position is still the start
/// of the bad sequence. A `pos` at or past the end of `bytes` reports
/// [`ErrorKind::TruncatedSequence`].
///
/// Validity of the assembled value is checked before minimality, so a
/// surrogate encoded in three bytes is [`ErrorKind::InvalidCodePoint`], not
/// overlong.
///
/// ```rust
/// use utf8cursor::{ErrorKind, decode_next};
///
/// assert_eq!(decode_next(&[0xE4, 0xB8, 0xBB], 0), Ok((0x4E3B, 3)));
/// assert_eq!(decode_next(&[0xC0, 0x80], 0), Err(ErrorKind::OverlongSequence));
/// ```
///
/// # Errors
///
/// Returns the [`ErrorKind`] describing the first rule the sequence breaks.
pub fn decode_next(bytes: &[u8], pos: usize) -> Result<(CodePoint, usize), ErrorKind> {
    let Some(&lead) = bytes.get(pos) else {
        return Err(ErrorKind::TruncatedSequence);
    };
    let len = sequence_length_from_lead(lead);
    if len == 0 {
        return Err(ErrorKind::InvalidLead);
    }

    let mut cp = CodePoint::from(lead & lead_payload_mask(len));
    for offset in 1..len {
        let Some(&byte) = bytes.get(pos + offset) else {
            return Err(ErrorKind::TruncatedSequence);
        };
        if !is_continuation(byte) {
            return Err(ErrorKind::IncompleteSequence);
        }
        cp = (cp << 6) | CodePoint::from(byte & CONTINUATION_PAYLOAD);
    }

    if !is_valid_code_point(cp) {
        Err(ErrorKind::InvalidCodePoint)
    } else if encoded_length_for_code_point(cp) != len {
        Err(ErrorKind::OverlongSequence)
    } else {
        Ok((cp, len))
    }
}

/// Decodes the sequence starting at `pos` without any checks.
///
/// Meant for input already known to be valid, where it returns exactly what
/// [`decode_next`] would. On invalid input the result is whatever falls out
/// of the bit arithmetic: a byte that cannot lead a sequence decodes to its
/// own value with length 1, continuation bytes past the end of `bytes` count
/// as zero payload, and the returned length is clamped to the end of the
/// buffer.
///
/// Returns `None` only when `pos` is at or past the end.
#[must_use]
pub fn decode_next_unchecked(bytes: &[u8], pos: usize) -> Option<(CodePoint, usize)> {
    let &lead = bytes.get(pos)?;
    let len = sequence_length_from_lead(lead);
    if len <= 1 {
        return Some((CodePoint::from(lead), 1));
    }

    let mut cp = CodePoint::from(lead & lead_payload_mask(len));
    for offset in 1..len {
        let byte = bytes.get(pos + offset).copied().unwrap_or(0);
        cp = (cp << 6) | CodePoint::from(byte & CONTINUATION_PAYLOAD);
    }
    Some((cp, len.min(bytes.len() - pos)))
}
