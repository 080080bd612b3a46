//! Platform wide-character conversion.
//!
//! [`WideChar`] matches the width of the platform's C `wchar_t`: 16 bits on
//! Windows, 32 bits elsewhere. The [`WideUnit`] impls for `u16` and `u32`
//! forward to the UTF-16 and UTF-32 transcoders, so the choice between them
//! is made entirely at compile time.

use crate::{
    options::TranscodeOptions,
    transcode::{
        measure_utf8_to_utf16, measure_utf8_to_utf32, measure_utf16_to_utf8,
        measure_utf32_to_utf8, utf8_to_utf16, utf8_to_utf32, utf16_to_utf8_with,
        utf32_to_utf8_with,
    },
};

/// The platform wide character unit.
#[cfg(windows)]
pub type WideChar = u16;

/// The platform wide character unit.
#[cfg(not(windows))]
pub type WideChar = u32;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A code unit type a wide string can be made of.
pub trait WideUnit: Copy + Default + PartialEq + sealed::Sealed {
    /// Transcodes UTF-8 into `out`, returning the logical length in units.
    fn from_utf8(src: &[u8], out: &mut [Self]) -> usize;

    /// Units needed to hold `src`.
    fn measure_from_utf8(src: &[u8]) -> usize;

    /// Transcodes wide units into UTF-8, returning the logical length in
    /// bytes.
    fn to_utf8(src: &[Self], out: &mut [u8], options: &TranscodeOptions) -> usize;

    /// Bytes needed to hold `src` as UTF-8, excluding any terminator.
    fn measure_to_utf8(src: &[Self]) -> usize;
}

impl WideUnit for u16 {
    fn from_utf8(src: &[u8], out: &mut [Self]) -> usize {
        utf8_to_utf16(src, out)
    }

    fn measure_from_utf8(src: &[u8]) -> usize {
        measure_utf8_to_utf16(src)
    }

    fn to_utf8(src: &[Self], out: &mut [u8], options: &TranscodeOptions) -> usize {
        utf16_to_utf8_with(src, out, options)
    }

    fn measure_to_utf8(src: &[Self]) -> usize {
        measure_utf16_to_utf8(src)
    }
}

impl WideUnit for u32 {
    fn from_utf8(src: &[u8], out: &mut [Self]) -> usize {
        utf8_to_utf32(src, out)
    }

    fn measure_from_utf8(src: &[u8]) -> usize {
        measure_utf8_to_utf32(src)
    }

    fn to_utf8(src: &[Self], out: &mut [u8], options: &TranscodeOptions) -> usize {
        utf32_to_utf8_with(src, out, options)
    }

    fn measure_to_utf8(src: &[Self]) -> usize {
        measure_utf32_to_utf8(src)
    }
}

/// The prefix of `units` before the first zero unit, or all of it.
///
/// Gives C-string semantics to callers holding NUL-terminated data.
#[must_use]
pub fn until_nul<T: Copy + Default + PartialEq>(units: &[T]) -> &[T] {
    let zero = T::default();
    let end = units.iter().position(|&u| u == zero).unwrap_or(units.len());
    &units[..end]
}

/// Converts UTF-8 into platform wide characters.
///
/// Returns the number of units the conversion needs. When `out` is too
/// small nothing is converted; `out[0]` is set to zero if it exists, and the
/// caller can retry with a buffer of the returned size.
pub fn utf8_to_wchar(src: &[u8], out: &mut [WideChar]) -> usize {
    utf8_to_wchar_as(src, out)
}

/// [`utf8_to_wchar`] for an explicit unit width.
pub fn utf8_to_wchar_as<W: WideUnit>(src: &[u8], out: &mut [W]) -> usize {
    let needed = W::measure_from_utf8(src);
    if needed > out.len() {
        log::debug!(
            "wide buffer of {} units too small, {needed} needed",
            out.len()
        );
        if let Some(first) = out.first_mut() {
            *first = W::default();
        }
        return needed;
    }
    W::from_utf8(src, out)
}

/// Converts platform wide characters into UTF-8.
///
/// Returns the logical output length in bytes and writes a zero byte after
/// the output when room remains.
pub fn wchar_to_utf8(src: &[WideChar], out: &mut [u8]) -> usize {
    wchar_to_utf8_as(src, out)
}

/// [`wchar_to_utf8`] for an explicit unit width.
pub fn wchar_to_utf8_as<W: WideUnit>(src: &[W], out: &mut [u8]) -> usize {
    let options = TranscodeOptions {
        nul_terminate: true,
        ..TranscodeOptions::default()
    };
    W::to_utf8(src, out, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZHUTI: &[u8] = &[0xE4, 0xB8, 0xBB, 0xE4, 0xBD, 0x93];

    #[test]
    fn platform_width() {
        #[cfg(windows)]
        assert_eq!(size_of::<WideChar>(), 2);
        #[cfg(not(windows))]
        assert_eq!(size_of::<WideChar>(), 4);
    }

    #[test]
    fn both_widths_round_trip() {
        let mut narrow = [0u16; 4];
        assert_eq!(utf8_to_wchar_as(ZHUTI, &mut narrow), 2);
        assert_eq!(&narrow[..2], &[0x4E3B, 0x4F53]);

        let mut wide = [0u32; 4];
        assert_eq!(utf8_to_wchar_as(ZHUTI, &mut wide), 2);
        assert_eq!(&wide[..2], &[0x4E3B, 0x4F53]);

        let mut bytes = [0xFFu8; 8];
        assert_eq!(wchar_to_utf8_as(&narrow[..2], &mut bytes), 6);
        assert_eq!(&bytes[..7], b"\xE4\xB8\xBB\xE4\xBD\x93\0");

        let mut bytes = [0xFFu8; 6];
        assert_eq!(wchar_to_utf8_as(&wide[..2], &mut bytes), 6);
        assert_eq!(&bytes, ZHUTI);
    }

    #[test]
    fn surrogate_pairs_count_two_units_when_narrow() {
        let src = "\u{1F600}".as_bytes();
        let mut narrow = [7u16; 1];
        assert_eq!(utf8_to_wchar_as(src, &mut narrow), 2);
        assert_eq!(narrow, [0]);

        let mut wide = [7u32; 1];
        assert_eq!(utf8_to_wchar_as(src, &mut wide), 1);
        assert_eq!(wide, [0x1F600]);
    }

    #[test]
    fn too_small_writes_only_terminator() {
        let mut out = [9 as WideChar; 2];
        assert_eq!(utf8_to_wchar(b"abc", &mut out), 3);
        assert_eq!(out, [0, 9]);
        assert_eq!(utf8_to_wchar(b"abc", &mut []), 3);
    }

    #[test]
    fn nul_prefix() {
        assert_eq!(until_nul(b"abc\0def"), b"abc");
        assert_eq!(until_nul(&[1u32, 2, 0, 3]), &[1, 2]);
        assert_eq!(until_nul::<u16>(&[]), &[] as &[u16]);
        assert_eq!(until_nul(b"no terminator"), b"no terminator");
    }
}
