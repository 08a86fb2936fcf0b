//! Compile-fail tests for constructing an Iter.
//!
//! These tests verify that wrapping a value which cannot be iterated
//! is rejected at compile time.
//!
//! Note: trybuild tests use #[test] as an exception because
//! trybuild's standard usage pattern requires it.

#[test]
fn construction_compile_fail_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.compile_fail("tests/compile_fail/new_*.rs");
}
