

/// Cases per quickcheck property: short under miri or `test-fast`, long on CI.
fn test_count() -> u64 {
    #[cfg(not(any(miri, feature = "test-fast")))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(any(miri, feature = "test-fast"))]
    let tests = 10;
    tests
}

#[test]
fn fast_configurations_shorten_properties() {
    let tests = test_count();
    if cfg!(any(miri, feature = "test-fast")) {
        assert_eq!(tests, 10);
    } else {
        assert!(tests >= 1_000);
    }
}
