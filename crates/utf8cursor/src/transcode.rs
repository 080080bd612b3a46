//! UTF-8 ↔ UTF-16 and UTF-8 ↔ UTF-32 transcoding.
//!
//! Each direction comes as a writer and a `measure_*` function sharing one
//! routine over a [`Sink`]. Writers return the *logical* output length: when
//! that exceeds the destination's length, output stopped at the last code
//! point that fit and the return value is the size to allocate for a retry.
//!
//! The UTF-8 readers use the unchecked decoder. Run [`crate::validate()`]
//! first when the input is untrusted; invalid bytes are transcoded into
//! whatever the bit arithmetic produces, but never read out of bounds.

use crate::{
    classify::{
        CodePoint, LEAD_OFFSET, LEAD_SURROGATE_MIN, REPLACEMENT_CHARACTER, TRAIL_SURROGATE_MIN,
        is_lead_surrogate, is_surrogate, is_trail_surrogate,
    },
    cursor::Cursor,
    encode::{Sink, append_code_point},
    error::Utf16Error,
    options::{LoneSurrogates, TranscodeOptions},
};

/// Joins a lead and trail surrogate into a supplementary code point.
#[must_use]
pub const fn combine_surrogates(lead: CodePoint, trail: CodePoint) -> CodePoint {
    0x10000 + ((lead - LEAD_SURROGATE_MIN) << 10) + (trail - TRAIL_SURROGATE_MIN)
}

/// Splits a supplementary code point into its lead and trail surrogates.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn split_surrogates(cp: CodePoint) -> [u16; 2] {
    [
        ((cp >> 10) + LEAD_OFFSET) as u16,
        ((cp & 0x3FF) + TRAIL_SURROGATE_MIN) as u16,
    ]
}

fn utf16_into(src: &[u16], sink: &mut Sink<'_, u8>, options: &TranscodeOptions) {
    let mut units = src.iter().map(|&unit| CodePoint::from(unit)).peekable();
    while let Some(unit) = units.next() {
        let cp = if is_lead_surrogate(unit) {
            match units.next_if(|&next| is_trail_surrogate(next)) {
                Some(trail) => combine_surrogates(unit, trail),
                None => lone_surrogate(unit, options),
            }
        } else if is_surrogate(unit) {
            lone_surrogate(unit, options)
        } else {
            unit
        };
        append_code_point(cp, sink);
    }
    if options.nul_terminate {
        sink.terminate(0);
    }
}

fn lone_surrogate(unit: CodePoint, options: &TranscodeOptions) -> CodePoint {
    match options.lone_surrogates {
        LoneSurrogates::Encode => unit,
        LoneSurrogates::Replace => REPLACEMENT_CHARACTER,
    }
}

fn utf32_into(src: &[u32], sink: &mut Sink<'_, u8>, options: &TranscodeOptions) {
    for &cp in src {
        append_code_point(cp, sink);
    }
    if options.nul_terminate {
        sink.terminate(0);
    }
}

fn utf8_into_utf16(src: &[u8], sink: &mut Sink<'_, u16>) {
    for cp in Cursor::new(src).code_points() {
        if cp > 0xFFFF {
            sink.push(&split_surrogates(cp));
        } else {
            #[allow(clippy::cast_possible_truncation)]
            sink.push(&[cp as u16]);
        }
    }
}

fn utf8_into_utf32(src: &[u8], sink: &mut Sink<'_, u32>) {
    for cp in Cursor::new(src).code_points() {
        sink.push(&[cp]);
    }
}

/// Converts UTF-16 to UTF-8 with default options.
///
/// Returns the logical output length in bytes; see the module docs.
///
/// ```rust
/// use utf8cursor::utf16_to_utf8;
///
/// let mut out = [0u8; 8];
/// let n = utf16_to_utf8(&[0xD840, 0xDC00], &mut out);
/// assert_eq!(&out[..n], "\u{20000}".as_bytes());
/// ```
pub fn utf16_to_utf8(src: &[u16], out: &mut [u8]) -> usize {
    utf16_to_utf8_with(src, out, &TranscodeOptions::default())
}

/// Converts UTF-16 to UTF-8.
///
/// A lead surrogate is joined with the following unit when that unit is a
/// trail surrogate. Any other surrogate is handled per
/// [`TranscodeOptions::lone_surrogates`]; use [`validate_utf16`] to reject
/// such input instead.
pub fn utf16_to_utf8_with(src: &[u16], out: &mut [u8], options: &TranscodeOptions) -> usize {
    let mut sink = Sink::new(out);
    utf16_into(src, &mut sink, options);
    sink.position()
}

/// Number of bytes [`utf16_to_utf8`] needs for `src`, excluding any
/// terminator.
#[must_use]
pub fn measure_utf16_to_utf8(src: &[u16]) -> usize {
    let mut sink = Sink::measure();
    utf16_into(src, &mut sink, &TranscodeOptions::default());
    sink.position()
}

/// Converts UTF-8 to UTF-16, splitting supplementary code points into
/// surrogate pairs. Returns the logical output length in units.
pub fn utf8_to_utf16(src: &[u8], out: &mut [u16]) -> usize {
    let mut sink = Sink::new(out);
    utf8_into_utf16(src, &mut sink);
    sink.position()
}

/// Number of units [`utf8_to_utf16`] needs for `src`.
#[must_use]
pub fn measure_utf8_to_utf16(src: &[u8]) -> usize {
    let mut sink = Sink::measure();
    utf8_into_utf16(src, &mut sink);
    sink.position()
}

/// Converts UTF-32 to UTF-8 with default options.
pub fn utf32_to_utf8(src: &[u32], out: &mut [u8]) -> usize {
    utf32_to_utf8_with(src, out, &TranscodeOptions::default())
}

/// Converts UTF-32 to UTF-8. Units are encoded as given, without range
/// checks; only [`TranscodeOptions::nul_terminate`] applies.
pub fn utf32_to_utf8_with(src: &[u32], out: &mut [u8], options: &TranscodeOptions) -> usize {
    let mut sink = Sink::new(out);
    utf32_into(src, &mut sink, options);
    sink.position()
}

/// Number of bytes [`utf32_to_utf8`] needs for `src`, excluding any
/// terminator.
#[must_use]
pub fn measure_utf32_to_utf8(src: &[u32]) -> usize {
    let mut sink = Sink::measure();
    utf32_into(src, &mut sink, &TranscodeOptions::default());
    sink.position()
}

/// Converts UTF-8 to UTF-32. Returns the logical output length in units.
pub fn utf8_to_utf32(src: &[u8], out: &mut [u32]) -> usize {
    let mut sink = Sink::new(out);
    utf8_into_utf32(src, &mut sink);
    sink.position()
}

/// Number of units [`utf8_to_utf32`] needs for `src`.
#[must_use]
pub fn measure_utf8_to_utf32(src: &[u8]) -> usize {
    Cursor::new(src).code_points().count()
}

/// Checks that every surrogate in `src` is part of a lead/trail pair.
///
/// # Errors
///
/// Returns the first unpaired surrogate and its index.
pub fn validate_utf16(src: &[u16]) -> Result<(), Utf16Error> {
    let mut position = 0;
    while let Some(&unit) = src.get(position) {
        let cp = CodePoint::from(unit);
        if is_lead_surrogate(cp)
            && src
                .get(position + 1)
                .is_some_and(|&next| is_trail_surrogate(next.into()))
        {
            position += 2;
        } else if is_surrogate(cp) {
            return Err(Utf16Error { unit, position });
        } else {
            position += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    const SAMPLE: &str = "Zo\u{EB} \u{4E3B}\u{4F53} \u{1F600}\u{20000}!";

    #[test]
    fn supplementary_plane_pair() {
        assert_eq!(split_surrogates(0x20000), [0xD840, 0xDC00]);
        assert_eq!(combine_surrogates(0xD840, 0xDC00), 0x20000);

        let mut units = [0u16; 2];
        assert_eq!(utf8_to_utf16("\u{20000}".as_bytes(), &mut units), 2);
        assert_eq!(units, [0xD840, 0xDC00]);

        let mut bytes = [0u8; 4];
        assert_eq!(utf16_to_utf8(&units, &mut bytes), 4);
        assert_eq!(&bytes, "\u{20000}".as_bytes());
    }

    #[test]
    fn matches_core_utf16() {
        let expected: Vec<u16> = SAMPLE.encode_utf16().collect();
        let mut units = [0u16; 32];
        let n = utf8_to_utf16(SAMPLE.as_bytes(), &mut units);
        assert_eq!(&units[..n], expected.as_slice());
        assert_eq!(measure_utf8_to_utf16(SAMPLE.as_bytes()), n);

        let mut bytes = [0u8; 64];
        let m = utf16_to_utf8(&expected, &mut bytes);
        assert_eq!(&bytes[..m], SAMPLE.as_bytes());
        assert_eq!(measure_utf16_to_utf8(&expected), m);
    }

    #[test]
    fn matches_core_utf32() {
        let expected: Vec<u32> = SAMPLE.chars().map(u32::from).collect();
        let mut units = [0u32; 32];
        let n = utf8_to_utf32(SAMPLE.as_bytes(), &mut units);
        assert_eq!(&units[..n], expected.as_slice());
        assert_eq!(measure_utf8_to_utf32(SAMPLE.as_bytes()), n);

        let mut bytes = [0u8; 64];
        let m = utf32_to_utf8(&expected, &mut bytes);
        assert_eq!(&bytes[..m], SAMPLE.as_bytes());
        assert_eq!(measure_utf32_to_utf8(&expected), m);
    }

    #[test]
    fn undersized_output_reports_required_length() {
        let units: Vec<u16> = SAMPLE.encode_utf16().collect();
        let needed = measure_utf16_to_utf8(&units);
        let mut small = [0u8; 5];
        assert_eq!(utf16_to_utf8(&units, &mut small), needed);
        // "Zoë " fits, the three-byte ideograph does not.
        assert_eq!(&small, b"Zo\xC3\xAB ");

        let mut one = [0u16; 1];
        assert_eq!(utf8_to_utf16("\u{1F600}".as_bytes(), &mut one), 2);
        assert_eq!(one, [0]);
    }

    #[test]
    fn lone_surrogates() {
        let src = [0x61, 0xD800, 0x62, 0xDC00];
        let mut out = [0u8; 16];
        let n = utf16_to_utf8(&src, &mut out);
        assert_eq!(&out[..n], b"a\xED\xA0\x80b\xED\xB0\x80");

        let replace = TranscodeOptions {
            lone_surrogates: LoneSurrogates::Replace,
            ..TranscodeOptions::default()
        };
        let n = utf16_to_utf8_with(&src, &mut out, &replace);
        assert_eq!(&out[..n], "a\u{FFFD}b\u{FFFD}".as_bytes());

        // Lead surrogate as the final unit.
        let n = utf16_to_utf8(&[0xD83D], &mut out);
        assert_eq!(&out[..n], b"\xED\xA0\xBD");
    }

    #[test]
    fn encoded_lone_surrogates_come_back() {
        let src = [0xD800, 0x41];
        let mut bytes = [0u8; 8];
        let n = utf16_to_utf8(&src, &mut bytes);
        let mut units = [0u16; 4];
        let m = utf8_to_utf16(&bytes[..n], &mut units);
        assert_eq!(&units[..m], &src);
    }

    #[test]
    fn nul_termination() {
        let options = TranscodeOptions {
            nul_terminate: true,
            ..TranscodeOptions::default()
        };
        let mut out = [0xFFu8; 3];
        assert_eq!(utf32_to_utf8_with(&[0x41, 0x42], &mut out, &options), 2);
        assert_eq!(out, [0x41, 0x42, 0]);

        // No room left for the terminator: output is untouched past the end.
        let mut exact = [0xFFu8; 2];
        assert_eq!(utf32_to_utf8_with(&[0x41, 0x42], &mut exact, &options), 2);
        assert_eq!(exact, [0x41, 0x42]);
    }

    #[test]
    fn utf16_validation() {
        assert_eq!(validate_utf16(&[0x41, 0xD840, 0xDC00, 0x42]), Ok(()));
        assert_eq!(
            validate_utf16(&[0x41, 0xD840, 0x42]),
            Err(Utf16Error {
                unit: 0xD840,
                position: 1
            })
        );
        assert_eq!(
            validate_utf16(&[0xDC00]),
            Err(Utf16Error {
                unit: 0xDC00,
                position: 0
            })
        );
        assert_eq!(
            validate_utf16(&[0x41, 0xDBFF]).map_err(|e| e.position()),
            Err(1)
        );
    }

    #[test]
    fn empty_input() {
        let mut out = [0u8; 1];
        assert_eq!(utf16_to_utf8(&[], &mut out), 0);
        assert_eq!(utf8_to_utf32(b"", &mut []), 0);
        assert_eq!(measure_utf8_to_utf16(b""), 0);
    }
}
