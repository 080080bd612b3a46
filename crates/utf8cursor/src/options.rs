use crate::classify::{CodePoint, REPLACEMENT_CHARACTER};

/// What the UTF-16 → UTF-8 transcoder does with a surrogate that is not part
/// of a lead/trail pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoneSurrogates {
    /// Encode the surrogate's value as a three-byte sequence, the way
    /// WTF-8 does. The output is then not valid UTF-8, but converts back to
    /// the same UTF-16.
    #[default]
    Encode,
    /// Emit U+FFFD instead.
    Replace,
}

/// Configuration for the transcoders.
///
/// # Examples
///
/// ```rust
/// use utf8cursor::{LoneSurrogates, TranscodeOptions, utf16_to_utf8_with};
///
/// let options = TranscodeOptions {
///     nul_terminate: true,
///     lone_surrogates: LoneSurrogates::Replace,
/// };
/// let mut out = [0xFFu8; 8];
/// let n = utf16_to_utf8_with(&[0x41, 0xD800], &mut out, &options);
/// assert_eq!(&out[..=n], b"A\xEF\xBF\xBD\0");
/// ```
///
/// # Default
///
/// No terminator, lone surrogates encoded as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranscodeOptions {
    /// Write one zero unit after the output when capacity is left over.
    ///
    /// The terminator is never counted in the returned length, and it is
    /// silently skipped when the output exactly fills the buffer.
    ///
    /// # Default
    ///
    /// `false`
    pub nul_terminate: bool,

    /// Handling of unpaired surrogates in UTF-16 input.
    ///
    /// # Default
    ///
    /// [`LoneSurrogates::Encode`]
    pub lone_surrogates: LoneSurrogates,
}

/// Configuration for the invalid-sequence replacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplaceOptions {
    /// Code point written once for every malformed sequence.
    ///
    /// # Default
    ///
    /// U+FFFD REPLACEMENT CHARACTER
    pub replacement: CodePoint,
}

impl Default for ReplaceOptions {
    fn default() -> Self {
        Self {
            replacement: REPLACEMENT_CHARACTER,
        }
    }
}
