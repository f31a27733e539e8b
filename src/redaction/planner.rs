//! Preview cache and per-page redaction planning.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::Detection;

/// Per-document detection lists computed by a preview pass.
///
/// Created empty at batch start, populated when a preview run completes, and
/// consumed read-only by a subsequent redact run. The owner must clear it
/// whenever the selected document set changes; stale entries keyed by a
/// reused path would otherwise redact the wrong spans.
#[derive(Debug, Clone, Default)]
pub struct PreviewCache {
    entries: HashMap<PathBuf, Vec<Detection>>,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the detections computed for one document.
    pub fn insert(&mut self, document: impl Into<PathBuf>, detections: Vec<Detection>) {
        self.entries.insert(document.into(), detections);
    }

    /// Cached detections for a document, if a preview covered it.
    pub fn get(&self, document: &Path) -> Option<&[Detection]> {
        self.entries.get(document).map(|d| d.as_slice())
    }

    /// Drops every entry. Call when the input file set changes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Selects the detections to materialize on one page.
///
/// If the cache holds an entry for `document`, the cached list wins even
/// when a repeated scan would differ (a category toggled since the preview);
/// otherwise the fresh detections are used. Either way the result is
/// filtered to `page_number`.
pub fn plan(
    document: &Path,
    page_number: u32,
    fresh_detections: &[Detection],
    cache: &PreviewCache,
) -> Vec<Detection> {
    let source = cache.get(document).unwrap_or(fresh_detections);
    source
        .iter()
        .filter(|d| d.page_number == page_number)
        .cloned()
        .collect()
}

/// Document-level variant of [`plan`]: the full cache-or-fresh list, used
/// for the audit report.
pub fn planned_for_document(
    document: &Path,
    fresh_detections: &[Detection],
    cache: &PreviewCache,
) -> Vec<Detection> {
    cache
        .get(document)
        .unwrap_or(fresh_detections)
        .to_vec()
}
