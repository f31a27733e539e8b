//! Domain models for PII detection.
//!
//! This module contains the core vocabulary of the pipeline: the category
//! enumeration, the immutable [`Detection`] record produced by scans, and the
//! per-request [`DetectionConfig`] toggle set.

pub mod names;
pub mod patterns;

pub use names::NameMatcher;
pub use patterns::PatternRegistry;

use clap::ValueEnum;
use std::collections::HashSet;

/// Categories of personally identifiable information the engine can detect.
///
/// The built-in categories are fixed at process start. [`PiiCategory::Custom`]
/// tags matches of user-supplied literal phrases and is never toggled
/// directly; supplying phrases enables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum PiiCategory {
    /// Social Security numbers (dash- or space-separated digit groups).
    Ssn,
    /// North American phone numbers with optional parentheses and mixed separators.
    Phone,
    /// Email addresses.
    Email,
    /// 16-digit credit card numbers with optional group separators.
    CreditCard,
    /// Bare 8-17 digit runs. No checksum, so generic long numbers match too.
    BankAccount,
    /// Dates of birth in MM/DD/YYYY, YYYY/MM/DD, or "Mon DD, YYYY" form.
    DateOfBirth,
    /// Street addresses and "City, ST ZIP" lines.
    Address,
    /// Common first names from a fixed reference list.
    PersonName,
    /// User-supplied literal phrases.
    #[value(skip)]
    Custom,
}

impl PiiCategory {
    /// Built-in categories in the order the engine scans them.
    ///
    /// Ties at the same text offset are broken by this order, with custom
    /// phrases last.
    pub const SCAN_ORDER: [PiiCategory; 8] = [
        PiiCategory::Ssn,
        PiiCategory::Phone,
        PiiCategory::Email,
        PiiCategory::CreditCard,
        PiiCategory::BankAccount,
        PiiCategory::DateOfBirth,
        PiiCategory::Address,
        PiiCategory::PersonName,
    ];

    /// Tag rendered in findings, reports, and labeled redaction marks.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ssn => "SSN",
            Self::Phone => "PHONE",
            Self::Email => "EMAIL",
            Self::CreditCard => "CREDIT_CARD",
            Self::BankAccount => "BANK_ACCOUNT",
            Self::DateOfBirth => "DOB",
            Self::Address => "ADDRESS",
            Self::PersonName => "NAME",
            Self::Custom => "CUSTOM",
        }
    }
}

impl std::fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One matched PII occurrence.
///
/// Immutable once created. Two detections are duplicates iff their
/// `(start_offset, matched_text)` pair is equal, even when different
/// categories produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The text as it appears in the page's extracted text.
    pub matched_text: String,
    /// Category of the rule that produced this match.
    pub category: PiiCategory,
    /// Byte offset of the match within the page's extracted text.
    pub start_offset: usize,
    /// 1-based page number, attached by the caller of the scan.
    pub page_number: u32,
}

impl Detection {
    /// Key used for deduplication across categories.
    pub fn dedup_key(&self) -> (usize, &str) {
        (self.start_offset, self.matched_text.as_str())
    }
}

/// Immutable set of enabled built-in categories for one run.
///
/// Constructed once per request and passed explicitly; there are no
/// process-wide defaults inside the pipeline.
#[derive(Debug, Clone)]
pub struct DetectionConfig {
    disabled: HashSet<PiiCategory>,
}

impl DetectionConfig {
    /// All built-in categories enabled.
    pub fn all() -> Self {
        Self {
            disabled: HashSet::new(),
        }
    }

    /// Disables a category, removing all and only its detections.
    pub fn without(mut self, category: PiiCategory) -> Self {
        self.disabled.insert(category);
        self
    }

    /// Re-enables a previously disabled category.
    pub fn with(mut self, category: PiiCategory) -> Self {
        self.disabled.remove(&category);
        self
    }

    /// Whether a built-in category participates in the scan.
    pub fn is_enabled(&self, category: PiiCategory) -> bool {
        !self.disabled.contains(&category)
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self::all()
    }
}
