#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8cursor::{
    Cursor, LoneSurrogates, TranscodeOptions, find_first_invalid, measure_replace_invalid,
    measure_utf16_to_utf8, replace_invalid, utf16_to_utf8_with, validate_utf16,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    bytes: &'a [u8],
    units: Vec<u16>,
    replacement: char,
    out_len: u16,
    replace_surrogates: bool,
}

/// The validator and both decoders against `core::str`.
fn check_validation(bytes: &[u8]) {
    let expected = core::str::from_utf8(bytes).map_or_else(|e| e.valid_up_to(), str::len);
    assert_eq!(find_first_invalid(bytes), expected);

    let valid = &bytes[..expected];
    let text = core::str::from_utf8(valid).unwrap();
    let mut cursor = Cursor::new(valid);
    for ch in text.chars() {
        let (cp, next) = cursor.try_next().unwrap();
        assert_eq!(cp, u32::from(ch));
        assert_eq!(next.next_unchecked().map(|(cp, _)| cp), cursor.advance(1).peek_next());
        cursor = next;
    }
    assert!(cursor.is_at_end());

    // Unchecked stepping over garbage terminates inside the buffer.
    let steps = Cursor::new(bytes).code_points().count();
    assert!(steps <= bytes.len());
}

/// The replacer never overruns, never splits, and agrees with its measure.
fn check_replace(bytes: &[u8], replacement: char, out_len: usize) {
    let reserve = replacement.len_utf8();
    let replacement = u32::from(replacement);
    let full = measure_replace_invalid(bytes, replacement);

    let mut out = vec![0u8; out_len];
    let n = replace_invalid(bytes, &mut out, replacement);
    assert!(n <= out_len);
    assert!(core::str::from_utf8(&out[..n]).is_ok());
    assert!(n <= full);

    let mut roomy = vec![0u8; full + reserve];
    assert_eq!(replace_invalid(bytes, &mut roomy, replacement), full);
    assert_eq!(&roomy[..n], &out[..n]);
}

/// UTF-16 input with arbitrary surrogates.
fn check_utf16(units: &[u16], replace_surrogates: bool, out_len: usize) {
    let options = TranscodeOptions {
        lone_surrogates: if replace_surrogates {
            LoneSurrogates::Replace
        } else {
            LoneSurrogates::Encode
        },
        ..TranscodeOptions::default()
    };
    let needed = measure_utf16_to_utf8(units);
    let mut out = vec![0u8; out_len];
    assert_eq!(utf16_to_utf8_with(units, &mut out, &options), needed);

    let mut full = vec![0u8; needed];
    utf16_to_utf8_with(units, &mut full, &options);
    let strict = char::decode_utf16(units.iter().copied()).all(|r| r.is_ok());
    assert_eq!(validate_utf16(units).is_ok(), strict);
    if strict || replace_surrogates {
        let expected: String = char::decode_utf16(units.iter().copied())
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
        assert_eq!(full, expected.as_bytes());
    }
}

fuzz_target!(|input: Input<'_>| {
    let out_len = usize::from(input.out_len);
    check_validation(input.bytes);
    check_replace(input.bytes, input.replacement, out_len);
    check_utf16(&input.units, input.replace_surrogates, out_len);
});
