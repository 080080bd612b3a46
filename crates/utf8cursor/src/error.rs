use thiserror::Error;

/// Why a UTF-8 sequence failed to decode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The byte cannot begin a sequence (a continuation byte or a reserved
    /// `11111xxx` pattern).
    #[error("invalid lead byte")]
    InvalidLead,
    /// The buffer ended before the sequence was complete.
    #[error("truncated sequence")]
    TruncatedSequence,
    /// A byte that should have been a continuation byte was not one.
    #[error("incomplete sequence")]
    IncompleteSequence,
    /// The code point was encoded with more bytes than it needs.
    #[error("overlong sequence")]
    OverlongSequence,
    /// The decoded value is past U+10FFFF or inside the surrogate gap.
    #[error("invalid code point")]
    InvalidCodePoint,
}

/// A validation failure for a whole buffer.
///
/// `valid_up_to` is the offset of the first byte of the sequence that failed
/// to decode; everything before it is valid UTF-8.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at byte {valid_up_to}")]
pub struct Utf8Error {
    pub(crate) kind: ErrorKind,
    pub(crate) valid_up_to: usize,
}

impl Utf8Error {
    /// The reason decoding failed.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Length of the valid prefix of the buffer.
    #[must_use]
    pub const fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }
}

/// A surrogate in a UTF-16 buffer that is not part of a lead/trail pair.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("unpaired surrogate 0x{unit:04X} at unit {position}")]
pub struct Utf16Error {
    pub(crate) unit: u16,
    pub(crate) position: usize,
}

impl Utf16Error {
    /// The offending code unit.
    #[must_use]
    pub const fn unit(&self) -> u16 {
        self.unit
    }

    /// Index of the offending unit in the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}
