//! Per-page redaction mark application.

use tracing::debug;

use crate::document::{DocumentHandle, RedactionMark};
use crate::domain::Detection;
use crate::error::RedactResult;
use crate::redaction::RedactionMode;

/// Applies planned detections to document pages.
///
/// Each detection is located by searching the rendered page for its matched
/// text, so several visual occurrences of identical text on one page are all
/// redacted. A search miss redacts zero occurrences for that detection and
/// is not an error.
#[derive(Debug, Clone, Copy)]
pub struct RedactionExecutor {
    mode: RedactionMode,
}

impl RedactionExecutor {
    pub fn new(mode: RedactionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RedactionMode {
        self.mode
    }

    /// Marks every located occurrence of each detection on one page, then
    /// commits the page. Returns the number of regions marked.
    pub fn apply(
        &self,
        doc: &mut dyn DocumentHandle,
        page_index: usize,
        detections: &[Detection],
    ) -> RedactResult<usize> {
        let mut marked = 0;

        for detection in detections {
            let regions = doc.search_text(page_index, &detection.matched_text);
            if regions.is_empty() {
                debug!(
                    text = %detection.matched_text,
                    page = page_index + 1,
                    "matched text not found on rendered page, skipping"
                );
                continue;
            }
            for region in regions {
                let mark = match self.mode {
                    RedactionMode::Blackout => RedactionMark::Blackout,
                    RedactionMode::Labeled => {
                        RedactionMark::Label(format!("[{}]", detection.category.label()))
                    }
                };
                doc.mark_region(page_index, region, mark)?;
                marked += 1;
            }
        }

        doc.commit_page(page_index)?;
        Ok(marked)
    }
}
