//! Detection engine: scans page text against the pattern registry.
//!
//! The scan is a pure function of `(page text, config, custom phrases)`:
//! running it twice over the same inputs yields the same ordered list.

use std::collections::HashSet;

use regex::Regex;

use crate::domain::{Detection, DetectionConfig, NameMatcher, PatternRegistry, PiiCategory};
use crate::error::{RedactError, RedactResult};

/// Scans page text and produces a deduplicated, offset-ordered match list.
///
/// Custom phrases are compiled once at construction; the engine is then
/// reusable across every page and document of a run.
pub struct DetectionEngine {
    config: DetectionConfig,
    custom: Vec<Regex>,
}

impl DetectionEngine {
    /// Builds an engine for one run.
    ///
    /// Phrases are trimmed; empty lines and `#` comment lines are skipped
    /// silently. Remaining phrases match as case-insensitive literals, in
    /// the order supplied.
    pub fn new(config: DetectionConfig, custom_phrases: &[String]) -> RedactResult<Self> {
        let mut custom = Vec::new();
        for phrase in custom_phrases {
            let phrase = phrase.trim();
            if phrase.is_empty() || phrase.starts_with('#') {
                continue;
            }
            let pattern = format!("(?i){}", regex::escape(phrase));
            let re = Regex::new(&pattern).map_err(|e| RedactError::InvalidInput {
                parameter: "custom_phrases".to_string(),
                reason: format!("cannot compile phrase '{}': {}", phrase, e),
            })?;
            custom.push(re);
        }
        Ok(Self { config, custom })
    }

    /// Number of custom phrases that survived parsing.
    pub fn custom_phrase_count(&self) -> usize {
        self.custom.len()
    }

    /// Scans one page of extracted text.
    ///
    /// Categories are checked independently in the fixed scan order, custom
    /// phrases last. Candidates are stable-sorted by start offset, then
    /// deduplicated by `(start_offset, matched_text)` keeping the first
    /// candidate per key. Distinct overlapping spans are all kept.
    pub fn scan(&self, page_text: &str, page_number: u32) -> Vec<Detection> {
        let mut candidates = Vec::new();

        for category in PiiCategory::SCAN_ORDER {
            if !self.config.is_enabled(category) {
                continue;
            }
            match category {
                PiiCategory::PersonName => {
                    for m in NameMatcher::pattern().find_iter(page_text) {
                        candidates.push(Detection {
                            matched_text: m.as_str().to_string(),
                            category,
                            start_offset: m.start(),
                            page_number,
                        });
                    }
                }
                _ => {
                    for rule in PatternRegistry::rules(category) {
                        for m in rule.find_iter(page_text) {
                            candidates.push(Detection {
                                matched_text: m.as_str().to_string(),
                                category,
                                start_offset: m.start(),
                                page_number,
                            });
                        }
                    }
                }
            }
        }

        for re in &self.custom {
            for m in re.find_iter(page_text) {
                candidates.push(Detection {
                    matched_text: m.as_str().to_string(),
                    category: PiiCategory::Custom,
                    start_offset: m.start(),
                    page_number,
                });
            }
        }

        // Stable sort keeps insertion order for equal offsets, so the
        // category scan order decides which candidate survives dedup.
        candidates.sort_by_key(|d| d.start_offset);

        let mut seen: HashSet<(usize, String)> = HashSet::new();
        candidates.retain(|d| seen.insert((d.start_offset, d.matched_text.clone())));
        candidates
    }
}
