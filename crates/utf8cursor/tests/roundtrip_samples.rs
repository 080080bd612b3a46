#![allow(missing_docs)]

mod common;

use rstest::rstest;
use utf8cursor::{
    REPLACEMENT_CHARACTER, code_point_distance, find_first_invalid, is_valid_utf8,
    measure_replace_invalid, measure_utf8_to_utf16, measure_utf8_to_utf32, measure_utf16_to_utf8,
    measure_utf32_to_utf8, replace_invalid_default, utf8_to_utf16, utf8_to_utf32, utf16_to_utf8,
    utf32_to_utf8,
};

use crate::common::{DEMO, INVALID, QUICK_BROWN, big};

/// Validates `original`, repairing it first when it is not valid UTF-8, and
/// returns the text every round trip starts from.
fn prepare(original: &[u8], expect_invalid: bool) -> Vec<u8> {
    if is_valid_utf8(original) {
        assert!(!expect_invalid, "sample was expected to contain errors");
        return original.to_vec();
    }
    assert!(expect_invalid, "invalid at byte {}", find_first_invalid(original));

    let len = measure_replace_invalid(original, REPLACEMENT_CHARACTER);
    let mut repaired = vec![0u8; len + 3];
    let n = replace_invalid_default(original, &mut repaired);
    repaired.truncate(n);
    assert_eq!(n, len);
    assert!(is_valid_utf8(&repaired));
    repaired
}

fn roundtrip_16(text: &[u8]) {
    let mut units = vec![0u16; measure_utf8_to_utf16(text)];
    let written = utf8_to_utf16(text, &mut units);
    assert_eq!(written, units.len());

    let mut copy = vec![0u8; measure_utf16_to_utf8(&units)];
    let written = utf16_to_utf8(&units, &mut copy);
    assert_eq!(written, text.len());
    assert_eq!(copy, text, "roundtrip_16");
}

fn roundtrip_32(text: &[u8], count: usize) {
    let mut scalars = vec![0u32; measure_utf8_to_utf32(text)];
    assert_eq!(scalars.len(), count);
    utf8_to_utf32(text, &mut scalars);

    let mut copy = vec![0u8; measure_utf32_to_utf8(&scalars)];
    utf32_to_utf8(&scalars, &mut copy);
    assert_eq!(copy, text, "roundtrip_32");
}

#[rstest]
#[case::quickbrown(QUICK_BROWN.as_bytes(), false)]
#[case::demo(DEMO.as_bytes(), false)]
#[case::invalid(INVALID, true)]
fn sample_roundtrips(#[case] original: &[u8], #[case] expect_invalid: bool) {
    let text = prepare(original, expect_invalid);
    let count = code_point_distance(&text);
    assert_eq!(count, std::str::from_utf8(&text).unwrap().chars().count());
    assert!(count > 0);
    roundtrip_16(&text);
    roundtrip_32(&text, count);
}

#[test]
fn big_document_roundtrips() {
    let text = big();
    let bytes = prepare(text.as_bytes(), false);
    roundtrip_16(&bytes);
    roundtrip_32(&bytes, text.chars().count());
}

#[test]
fn invalid_sample_repairs_like_core_lossy_where_they_agree() {
    // Core's lossy conversion marks maximal subparts, so it can emit more
    // replacements than we do, but both keep every valid run intact.
    let repaired = prepare(INVALID, true);
    let repaired = String::from_utf8(repaired).unwrap();
    let lossy = String::from_utf8_lossy(INVALID);
    for run in lossy.split('\u{FFFD}').filter(|run| !run.is_empty()) {
        assert!(repaired.contains(run), "lost valid run {run:?}");
    }
}
