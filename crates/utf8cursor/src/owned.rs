//! Allocating wrappers over the buffer API.
//!
//! Every function here sizes its output with a measuring pass, allocates
//! exactly that much, and fills it with the writing pass. Nothing in this
//! module touches bytes directly; it is built only from the public buffer
//! functions.

use alloc::{borrow::Cow, vec, vec::Vec};

use crate::{
    classify::{CodePoint, REPLACEMENT_CHARACTER, encoded_length_for_code_point},
    replace::{measure_replace_invalid, replace_invalid},
    transcode::{
        measure_utf8_to_utf16, measure_utf8_to_utf32, measure_utf16_to_utf8,
        measure_utf32_to_utf8, utf8_to_utf16, utf8_to_utf32, utf16_to_utf8, utf32_to_utf8,
    },
    validate::is_valid_utf8,
    wide::{WideChar, WideUnit, utf8_to_wchar_as, wchar_to_utf8_as},
};

/// Allocates `len` default units, lets `fill` write into them, and trims the
/// vector to what was written.
fn measured<T: Copy + Default>(len: usize, fill: impl FnOnce(&mut [T]) -> usize) -> Vec<T> {
    let mut out = vec![T::default(); len];
    let written = fill(&mut out);
    debug_assert_eq!(written, len, "measuring and writing passes disagree");
    out.truncate(written);
    out
}

/// UTF-8 to a new UTF-16 vector.
#[must_use]
pub fn utf8_to_utf16_vec(src: &[u8]) -> Vec<u16> {
    measured(measure_utf8_to_utf16(src), |out| utf8_to_utf16(src, out))
}

/// UTF-16 to a new UTF-8 vector.
#[must_use]
pub fn utf16_to_utf8_vec(src: &[u16]) -> Vec<u8> {
    measured(measure_utf16_to_utf8(src), |out| utf16_to_utf8(src, out))
}

/// UTF-8 to a new UTF-32 vector.
#[must_use]
pub fn utf8_to_utf32_vec(src: &[u8]) -> Vec<u32> {
    measured(measure_utf8_to_utf32(src), |out| utf8_to_utf32(src, out))
}

/// UTF-32 to a new UTF-8 vector.
#[must_use]
pub fn utf32_to_utf8_vec(src: &[u32]) -> Vec<u8> {
    measured(measure_utf32_to_utf8(src), |out| utf32_to_utf8(src, out))
}

/// UTF-8 to a platform wide string.
///
/// ```rust
/// use utf8cursor::owned::{utf8_to_wide, wide_to_utf8};
///
/// let wide = utf8_to_wide("\u{4E3B}\u{4F53}".as_bytes());
/// assert_eq!(wide.len(), 2);
/// assert_eq!(wide_to_utf8(&wide), "\u{4E3B}\u{4F53}".as_bytes());
/// ```
#[must_use]
pub fn utf8_to_wide(src: &[u8]) -> Vec<WideChar> {
    utf8_to_wide_as(src)
}

/// [`utf8_to_wide`] for an explicit unit width.
#[must_use]
pub fn utf8_to_wide_as<W: WideUnit>(src: &[u8]) -> Vec<W> {
    measured(W::measure_from_utf8(src), |out| utf8_to_wchar_as(src, out))
}

/// A platform wide string to UTF-8.
#[must_use]
pub fn wide_to_utf8(src: &[WideChar]) -> Vec<u8> {
    wide_to_utf8_as(src)
}

/// [`wide_to_utf8`] for an explicit unit width.
#[must_use]
pub fn wide_to_utf8_as<W: WideUnit>(src: &[W]) -> Vec<u8> {
    measured(W::measure_to_utf8(src), |out| wchar_to_utf8_as(src, out))
}

/// Repairs `src` into a new vector, one `replacement` per malformed
/// sequence.
#[must_use]
pub fn replace_invalid_to_vec(src: &[u8], replacement: CodePoint) -> Vec<u8> {
    let len = measure_replace_invalid(src, replacement);
    // The writer holds back room for one replacement from its limit.
    let mut out = vec![0; len + encoded_length_for_code_point(replacement)];
    let written = replace_invalid(src, &mut out, replacement);
    debug_assert_eq!(written, len, "measuring and writing passes disagree");
    out.truncate(written);
    out
}

/// `src` itself when it is valid UTF-8, otherwise a copy repaired with
/// U+FFFD.
#[must_use]
pub fn to_valid_utf8(src: &[u8]) -> Cow<'_, [u8]> {
    if is_valid_utf8(src) {
        Cow::Borrowed(src)
    } else {
        Cow::Owned(replace_invalid_to_vec(src, REPLACEMENT_CHARACTER))
    }
}
