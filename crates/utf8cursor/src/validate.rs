use crate::{
    classify::BOM,
    decode::decode_next,
    error::{ErrorKind, Utf8Error},
};

/// Walks `bytes` with the checked decoder and reports the first failure.
fn first_error(bytes: &[u8]) -> Option<(usize, ErrorKind)> {
    let mut pos = 0;
    while pos < bytes.len() {
        match decode_next(bytes, pos) {
            Ok((_, len)) => pos += len,
            Err(kind) => return Some((pos, kind)),
        }
    }
    None
}

/// Offset of the first byte at which decoding fails, or `bytes.len()` when
/// the whole buffer is valid UTF-8.
#[must_use]
pub fn find_first_invalid(bytes: &[u8]) -> usize {
    first_error(bytes).map_or(bytes.len(), |(pos, _)| pos)
}

/// Whether `bytes` is entirely valid UTF-8.
#[must_use]
pub fn is_valid_utf8(bytes: &[u8]) -> bool {
    first_error(bytes).is_none()
}

/// Validates `bytes`, describing the first malformed sequence on failure.
///
/// ```rust
/// use utf8cursor::{ErrorKind, validate};
///
/// let err = validate(b"ok\xE4").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TruncatedSequence);
/// assert_eq!(err.valid_up_to(), 2);
/// ```
///
/// # Errors
///
/// Returns a [`Utf8Error`] carrying the failure kind and the length of the
/// valid prefix.
pub fn validate(bytes: &[u8]) -> Result<(), Utf8Error> {
    match first_error(bytes) {
        None => Ok(()),
        Some((valid_up_to, kind)) => Err(Utf8Error { kind, valid_up_to }),
    }
}

/// Whether `bytes` begins with the UTF-8 byte order mark `EF BB BF`.
#[must_use]
pub fn starts_with_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(&BOM)
}

/// `bytes` without a leading byte order mark.
#[must_use]
pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&BOM[..]).unwrap_or(bytes)
}
