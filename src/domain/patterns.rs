//! Built-in PII pattern registry.
//!
//! Holds the fixed per-category rule sets. Patterns are compiled once on
//! first use and read-only thereafter. Categories are matched independently
//! and may overlap; the detection engine reconciles duplicates afterwards.
//!
//! Format notes worth keeping in mind:
//! - SSN accepts both dash- and space-separated digit groups.
//! - Phone accepts optional parentheses and mixed `-`/`.`/space separators.
//! - Bank account is a bare 8-17 digit run with no checksum, so it will flag
//!   generic long numbers. Over-redaction is the intended bias.
//! - Date-of-birth years are restricted to 19xx/20xx; no 2-digit tolerance.
//! - The two address rules (street suffix, "City, ST ZIP") are independent
//!   and not cross-validated.

use once_cell::sync::Lazy;
use regex::Regex;

use super::PiiCategory;

/// Registry of the built-in rule sets, keyed by category.
pub struct PatternRegistry;

impl PatternRegistry {
    /// Returns the ordered rule list for a built-in category.
    ///
    /// [`PiiCategory::PersonName`] and [`PiiCategory::Custom`] have no regex
    /// rules here; names come from [`super::NameMatcher`] and custom phrases
    /// are compiled per run.
    pub fn rules(category: PiiCategory) -> &'static [Regex] {
        match category {
            PiiCategory::Ssn => ssn_rules(),
            PiiCategory::Phone => phone_rules(),
            PiiCategory::Email => email_rules(),
            PiiCategory::CreditCard => credit_card_rules(),
            PiiCategory::BankAccount => bank_account_rules(),
            PiiCategory::DateOfBirth => date_of_birth_rules(),
            PiiCategory::Address => address_rules(),
            PiiCategory::PersonName | PiiCategory::Custom => &[],
        }
    }
}

fn ssn_rules() -> &'static [Regex] {
    static RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
        vec![
            Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").expect("valid SSN pattern"),
            Regex::new(r"\b\d{3}\s\d{2}\s\d{4}\b").expect("valid SSN pattern"),
        ]
    });
    &RULES
}

fn phone_rules() -> &'static [Regex] {
    static RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
        vec![Regex::new(r"\b\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b")
            .expect("valid phone pattern")]
    });
    &RULES
}

fn email_rules() -> &'static [Regex] {
    static RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
        vec![
            Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b")
                .expect("valid email pattern"),
        ]
    });
    &RULES
}

fn credit_card_rules() -> &'static [Regex] {
    static RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
        vec![Regex::new(r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b")
            .expect("valid credit card pattern")]
    });
    &RULES
}

fn bank_account_rules() -> &'static [Regex] {
    static RULES: Lazy<Vec<Regex>> =
        Lazy::new(|| vec![Regex::new(r"\b\d{8,17}\b").expect("valid bank account pattern")]);
    &RULES
}

fn date_of_birth_rules() -> &'static [Regex] {
    static RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
        vec![
            Regex::new(r"\b(0?[1-9]|1[0-2])[-/](0?[1-9]|[12]\d|3[01])[-/](19|20)\d{2}\b")
                .expect("valid DOB pattern"),
            Regex::new(r"\b(19|20)\d{2}[-/](0?[1-9]|1[0-2])[-/](0?[1-9]|[12]\d|3[01])\b")
                .expect("valid DOB pattern"),
            Regex::new(
                r"(?i)\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+\d{1,2},?\s+(19|20)\d{2}\b",
            )
            .expect("valid DOB pattern"),
        ]
    });
    &RULES
}

fn address_rules() -> &'static [Regex] {
    static RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
        vec![
            Regex::new(
                r"(?i)\b\d{1,5}\s+[\w\s]{1,30}\s+(Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln|Way|Court|Ct)\.?\b",
            )
            .expect("valid address pattern"),
            Regex::new(r"(?i)\b[A-Z][a-z]+,?\s+[A-Z]{2}\s+\d{5}(-\d{4})?\b")
                .expect("valid address pattern"),
        ]
    });
    &RULES
}
