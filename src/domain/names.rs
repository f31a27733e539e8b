//! Common-name reference matching.
//!
//! Person names are matched against a fixed list of common US first names
//! rather than real named-entity recognition. This is a deliberate
//! precision/recall trade-off: the list catches the frequent cases cheaply
//! and custom phrases cover the rest.

use once_cell::sync::Lazy;
use regex::Regex;

/// Reference list of common first names.
pub const COMMON_NAMES: [&str; 30] = [
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan",
    "Jessica", "Sarah", "Karen", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald",
    "Steven", "Paul", "Andrew", "Joshua",
];

/// Whole-word, case-insensitive matcher over [`COMMON_NAMES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMatcher;

impl NameMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Combined alternation over the reference list.
    pub fn pattern() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            let alternation = COMMON_NAMES.join("|");
            Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("valid name pattern")
        });
        &PATTERN
    }

    /// Extracts every name occurrence as it appears in the text.
    pub fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        Self::pattern().find_iter(text).map(|m| m.as_str()).collect()
    }
}
