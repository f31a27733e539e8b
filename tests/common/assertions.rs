//! Custom assertions for redaction testing.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use std::path::Path;

/// Reads a produced output document as text.
///
/// # Panics
/// Panics if the file cannot be read.
pub fn read_output(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read output '{}': {}", path.display(), e))
}

/// Asserts that a pattern has been successfully redacted from an output.
///
/// # Panics
/// Panics if the pattern is still found in the output text.
pub fn assert_redacted(path: &Path, pattern: &str) {
    let text = read_output(path);
    assert!(
        !text.contains(pattern),
        "Pattern '{}' should be redacted but was found in output at '{}'.\nOutput length: {} chars",
        pattern,
        path.display(),
        text.len()
    );
}

/// Asserts that a pattern has been preserved (not redacted) in an output.
///
/// # Panics
/// Panics if the pattern is not found in the output.
pub fn assert_preserved(path: &Path, pattern: &str) {
    let text = read_output(path);
    assert!(
        text.contains(pattern),
        "Pattern '{}' should be preserved but was not found in output at '{}'",
        pattern,
        path.display()
    );
}

/// Asserts that an output file exists and is readable.
///
/// # Panics
/// Panics if the file is missing.
pub fn assert_output_exists(path: &Path) {
    assert!(
        path.exists(),
        "Expected output file at '{}'",
        path.display()
    );
}
