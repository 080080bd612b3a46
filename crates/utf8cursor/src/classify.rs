//! Byte and code point classification.
//!
//! These are the small pure predicates the decoder, encoder and transcoders
//! are built from. Everything here is `const fn` so it can be used in
//! constant tables and folded away in hot loops.

/// A Unicode code point as an unsigned integer.
///
/// Checked operations only ever produce values in `0..=0x10FFFF` outside the
/// surrogate gap; unchecked operations may produce anything the bit
/// arithmetic yields.
pub type CodePoint = u32;

/// Largest valid Unicode code point.
pub const CODE_POINT_MAX: CodePoint = 0x0010_FFFF;

/// First UTF-16 lead (high) surrogate.
pub const LEAD_SURROGATE_MIN: CodePoint = 0xD800;
/// Last UTF-16 lead (high) surrogate.
pub const LEAD_SURROGATE_MAX: CodePoint = 0xDBFF;
/// First UTF-16 trail (low) surrogate.
pub const TRAIL_SURROGATE_MIN: CodePoint = 0xDC00;
/// Last UTF-16 trail (low) surrogate.
pub const TRAIL_SURROGATE_MAX: CodePoint = 0xDFFF;

/// Added to `cp >> 10` to produce the lead surrogate of a supplementary code
/// point.
pub const LEAD_OFFSET: CodePoint = LEAD_SURROGATE_MIN - (0x10000 >> 10);

/// U+FFFD REPLACEMENT CHARACTER.
pub const REPLACEMENT_CHARACTER: CodePoint = 0xFFFD;

/// The UTF-8 byte order mark.
pub const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Longest UTF-8 sequence the decoder accepts.
pub const MAX_SEQUENCE_LEN: usize = 4;

const CONTINUATION_TAG: u8 = 0b1000_0000;
const CONTINUATION_MASK: u8 = 0b1100_0000;

/// Payload bits carried by a continuation byte.
pub(crate) const CONTINUATION_PAYLOAD: u8 = 0b0011_1111;

/// Returns the expected length of the UTF-8 sequence introduced by `lead`.
///
/// `0` means the byte cannot start a sequence: it is either a continuation
/// byte or one of the reserved `11111xxx` patterns.
///
/// ```rust
/// use utf8cursor::sequence_length_from_lead;
///
/// assert_eq!(sequence_length_from_lead(b'A'), 1);
/// assert_eq!(sequence_length_from_lead(0xE4), 3);
/// assert_eq!(sequence_length_from_lead(0x80), 0);
/// ```
#[must_use]
pub const fn sequence_length_from_lead(lead: u8) -> usize {
    if lead < 0x80 {
        1
    } else if lead >> 5 == 0b110 {
        2
    } else if lead >> 4 == 0b1110 {
        3
    } else if lead >> 3 == 0b1_1110 {
        4
    } else {
        0
    }
}

/// Returns the number of bytes the minimal UTF-8 encoding of `cp` occupies.
///
/// Values past [`CODE_POINT_MAX`] are reported as four bytes, which is what
/// the encoder emits for them.
#[must_use]
pub const fn encoded_length_for_code_point(cp: CodePoint) -> usize {
    if cp < 0x80 {
        1
    } else if cp < 0x800 {
        2
    } else if cp < 0x10000 {
        3
    } else {
        4
    }
}

/// Whether `byte` has the `10xxxxxx` continuation pattern.
#[must_use]
pub const fn is_continuation(byte: u8) -> bool {
    byte & CONTINUATION_MASK == CONTINUATION_TAG
}

/// Mask selecting the payload bits of a lead byte for a sequence of `len`
/// bytes.
pub(crate) const fn lead_payload_mask(len: usize) -> u8 {
    match len {
        2 => 0b0001_1111,
        3 => 0b0000_1111,
        4 => 0b0000_0111,
        _ => 0b0111_1111,
    }
}

/// Whether `cp` lies in `0xD800..=0xDBFF`.
#[must_use]
pub const fn is_lead_surrogate(cp: CodePoint) -> bool {
    cp >= LEAD_SURROGATE_MIN && cp <= LEAD_SURROGATE_MAX
}

/// Whether `cp` lies in `0xDC00..=0xDFFF`.
#[must_use]
pub const fn is_trail_surrogate(cp: CodePoint) -> bool {
    cp >= TRAIL_SURROGATE_MIN && cp <= TRAIL_SURROGATE_MAX
}

/// Whether `cp` lies anywhere in the surrogate gap.
#[must_use]
pub const fn is_surrogate(cp: CodePoint) -> bool {
    cp >= LEAD_SURROGATE_MIN && cp <= TRAIL_SURROGATE_MAX
}

/// Whether `cp` is a Unicode scalar value.
#[must_use]
pub const fn is_valid_code_point(cp: CodePoint) -> bool {
    cp <= CODE_POINT_MAX && !is_surrogate(cp)
}
