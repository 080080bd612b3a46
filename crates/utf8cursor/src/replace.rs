//! Repairing malformed UTF-8.
//!
//! Valid sequences are copied through untouched. Each malformed sequence
//! becomes exactly one replacement code point: an invalid lead byte is
//! skipped on its own, and any other failure also swallows the continuation
//! bytes that follow the lead, so a broken four-byte sequence still yields a
//! single mark.

use crate::{
    classify::{CodePoint, REPLACEMENT_CHARACTER, encoded_length_for_code_point, is_continuation},
    decode::decode_next,
    encode::{Sink, encode_utf8},
    error::ErrorKind,
    options::ReplaceOptions,
};

/// Returns the offset just past the malformed sequence starting at `pos`.
fn skip_malformed(src: &[u8], pos: usize, kind: ErrorKind) -> usize {
    let mut next = pos + 1;
    if kind != ErrorKind::InvalidLead {
        while src.get(next).copied().is_some_and(is_continuation) {
            next += 1;
        }
    }
    next
}

/// Scans `src` into `sink` while the sink's position stays within `limit`.
fn replace_into(src: &[u8], sink: &mut Sink<'_, u8>, replacement: CodePoint, limit: usize) {
    let mut mark = [0u8; 4];
    let mark = encode_utf8(replacement, &mut mark);

    let mut pos = 0;
    while pos < src.len() && sink.position() <= limit {
        let stored = match decode_next(src, pos) {
            Ok((_, len)) => {
                let stored = sink.push(&src[pos..pos + len]);
                pos += len;
                stored
            }
            Err(kind) => {
                let next = skip_malformed(src, pos, kind);
                log::trace!("replacing {kind} at bytes {pos}..{next}");
                pos = next;
                sink.push(mark)
            }
        };
        if !stored && !sink.is_measuring() {
            log::debug!(
                "replacement output truncated at {} bytes with {} input bytes left",
                sink.written(),
                src.len() - pos
            );
            break;
        }
    }
}

/// Copies `src` into `out`, replacing every malformed sequence with
/// `replacement`.
///
/// Room for one replacement is held back from `out.len()` up front: the
/// scan only continues while the bytes written fit in what is left, and
/// stops at the first sequence that does not fit. Output is never split
/// inside a code point. Returns the number of bytes written.
///
/// ```rust
/// use utf8cursor::replace_invalid;
///
/// let mut out = [0u8; 16];
/// let n = replace_invalid(b"a\xF0\x9F\x41b", &mut out, u32::from('?'));
/// assert_eq!(&out[..n], b"a?Ab");
/// ```
pub fn replace_invalid(src: &[u8], out: &mut [u8], replacement: CodePoint) -> usize {
    let limit = out
        .len()
        .saturating_sub(encoded_length_for_code_point(replacement));
    let mut sink = Sink::new(out);
    replace_into(src, &mut sink, replacement, limit);
    sink.written()
}

/// [`replace_invalid`] with U+FFFD as the replacement.
pub fn replace_invalid_default(src: &[u8], out: &mut [u8]) -> usize {
    replace_invalid(src, out, REPLACEMENT_CHARACTER)
}

/// [`replace_invalid`] configured through [`ReplaceOptions`].
pub fn replace_invalid_with(src: &[u8], out: &mut [u8], options: &ReplaceOptions) -> usize {
    replace_invalid(src, out, options.replacement)
}

/// Length of the fully repaired output for `src`, with no size limit.
///
/// A buffer of this length plus the replacement's own encoded length is
/// enough for [`replace_invalid`] to produce the complete result.
#[must_use]
pub fn measure_replace_invalid(src: &[u8], replacement: CodePoint) -> usize {
    let mut sink = Sink::measure();
    replace_into(src, &mut sink, replacement, usize::MAX);
    sink.position()
}
