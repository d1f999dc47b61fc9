//! Custom assertion utilities for tests.

/// Assert that `actual` bytes equal the `expected` hex string.
///
/// On mismatch, reports the first differing byte offset, which is far easier
/// to act on than two long hex strings.
pub fn assert_hex_eq(actual: &[u8], expected: &str, context: &str) {
    let expected_bytes = hex::decode(expected.trim_start_matches("0x"))
        .unwrap_or_else(|e| panic!("{context}: bad expected hex: {e}"));
    if actual == expected_bytes.as_slice() {
        return;
    }
    let first_diff = actual
        .iter()
        .zip(&expected_bytes)
        .position(|(a, b)| a != b)
        .unwrap_or(actual.len().min(expected_bytes.len()));
    panic!(
        "{}: byte mismatch at offset {}\n  expected len: {}\n  actual len: {}\n  expected: {}\n  actual:   {}",
        context,
        first_diff,
        expected_bytes.len(),
        actual.len(),
        hex::encode(&expected_bytes),
        hex::encode(actual)
    );
}

/// Assert that an error message contains expected text (case-insensitive).
pub fn assert_error_contains<E: std::fmt::Display>(error: E, expected_text: &str, context: &str) {
    let error_str = error.to_string().to_lowercase();
    assert!(
        error_str.contains(&expected_text.to_lowercase()),
        "{}: error message should contain '{}', got: {}",
        context,
        expected_text,
        error
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_hex_eq() {
        assert_hex_eq(&[0xde, 0xad], "0xdead", "prefixed");
        assert_hex_eq(&[0xde, 0xad], "dead", "bare");
    }

    #[test]
    #[should_panic(expected = "byte mismatch at offset 1")]
    fn test_assert_hex_eq_reports_offset() {
        assert_hex_eq(&[0xde, 0xae], "dead", "mismatch");
    }

    #[test]
    fn test_assert_error_contains() {
        assert_error_contains("Sender Mismatch", "sender mismatch", "case");
    }
}
