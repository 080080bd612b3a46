//! UTF-8 validation, repair and transcoding over borrowed buffers.
//!
//! The core of the crate is a checked UTF-8 decoder ([`decode_next`]) and
//! its unchecked twin ([`decode_next_unchecked`]), a bidirectional
//! [`Cursor`], and an encoder writing into a [`Sink`]. Everything else is
//! layered on top:
//!
//! - [`validate()`], [`find_first_invalid`] and [`is_valid_utf8`] run the
//!   checked decoder over a whole buffer.
//! - The transcoders convert between UTF-8 and UTF-16 / UTF-32, and the
//!   [`wide`] module picks the one matching the platform `wchar_t`.
//! - [`replace_invalid`] repairs malformed input with one replacement code
//!   point per bad sequence.
//! - With the `owned` feature, [`owned`] wraps all of the above in
//!   functions returning exactly-sized vectors.
//!
//! No function in the core allocates. Writers take a caller-owned buffer and
//! follow a measure-then-fill convention: every writer has a `measure_*`
//! twin running the same algorithm without output, and a writer handed a
//! buffer that is too small still reports the full length it needs.
//!
//! ```rust
//! use utf8cursor::{ErrorKind, decode_next, is_valid_utf8, measure_utf8_to_utf16, utf8_to_utf16};
//!
//! let text = "\u{4E3B}\u{1F600}".as_bytes();
//! assert!(is_valid_utf8(text));
//!
//! let mut units = vec![0u16; measure_utf8_to_utf16(text)];
//! utf8_to_utf16(text, &mut units);
//! assert_eq!(units, [0x4E3B, 0xD83D, 0xDE00]);
//!
//! assert_eq!(decode_next(&[0xE4, 0x41], 0), Err(ErrorKind::IncompleteSequence));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod classify;
mod cursor;
mod decode;
mod encode;
mod error;
mod options;
mod replace;
mod transcode;
mod validate;

#[cfg(feature = "owned")]
pub mod owned;
pub mod wide;

#[cfg(test)]
mod tests;

pub use classify::{
    BOM, CODE_POINT_MAX, CodePoint, LEAD_OFFSET, LEAD_SURROGATE_MAX, LEAD_SURROGATE_MIN,
    MAX_SEQUENCE_LEN, REPLACEMENT_CHARACTER, TRAIL_SURROGATE_MAX, TRAIL_SURROGATE_MIN,
    encoded_length_for_code_point, is_continuation, is_lead_surrogate, is_surrogate,
    is_trail_surrogate, is_valid_code_point, sequence_length_from_lead,
};
pub use cursor::{CodePoints, Cursor, TryCodePoints, advance, code_point_distance, decode_prior};
pub use decode::{decode_next, decode_next_unchecked};
pub use encode::{Sink, append_code_point, encode_utf8};
pub use error::{ErrorKind, Utf8Error, Utf16Error};
pub use options::{LoneSurrogates, ReplaceOptions, TranscodeOptions};
pub use replace::{
    measure_replace_invalid, replace_invalid, replace_invalid_default, replace_invalid_with,
};
pub use transcode::{
    combine_surrogates, measure_utf8_to_utf16, measure_utf8_to_utf32, measure_utf16_to_utf8,
    measure_utf32_to_utf8, split_surrogates, utf8_to_utf16, utf8_to_utf32, utf16_to_utf8,
    utf16_to_utf8_with, utf32_to_utf8, utf32_to_utf8_with, validate_utf16,
};
pub use validate::{find_first_invalid, is_valid_utf8, starts_with_bom, strip_bom, validate};
pub use wide::{WideChar, WideUnit};
