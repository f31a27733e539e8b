//! Plain-text document backend.
//!
//! Treats a UTF-8 text file as a paginated document: pages are separated by
//! form feed characters. A file without form feeds is a single-page
//! document. Marks buffered by [`DocumentHandle::mark_region`] are burned
//! into the page content on commit, mirroring the mark-then-apply flow of
//! PDF redaction APIs.

use std::path::{Path, PathBuf};

use crate::document::{DocumentBackend, DocumentHandle, RedactionMark, Region};
use crate::error::{RedactError, RedactResult};

const PAGE_BREAK: char = '\u{0C}';

/// Backend for form-feed-paginated plain-text documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBackend;

impl TextBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentBackend for TextBackend {
    fn open(&self, path: &Path) -> RedactResult<Box<dyn DocumentHandle>> {
        let raw = std::fs::read_to_string(path).map_err(|e| RedactError::DocumentOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let pages = raw
            .split(PAGE_BREAK)
            .map(|p| TextPage {
                content: p.to_string(),
                pending: Vec::new(),
            })
            .collect();

        Ok(Box::new(TextDocument {
            path: path.to_path_buf(),
            pages,
        }))
    }
}

struct TextPage {
    content: String,
    pending: Vec<(Region, RedactionMark)>,
}

struct TextDocument {
    path: PathBuf,
    pages: Vec<TextPage>,
}

impl TextDocument {
    fn page(&self, page_index: usize) -> RedactResult<&TextPage> {
        self.pages
            .get(page_index)
            .ok_or_else(|| RedactError::InvalidInput {
                parameter: "page_index".to_string(),
                reason: format!(
                    "page {} out of range for '{}' ({} pages)",
                    page_index,
                    self.path.display(),
                    self.pages.len()
                ),
            })
    }
}

impl DocumentHandle for TextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn extract_text(&self, page_index: usize) -> RedactResult<String> {
        Ok(self.page(page_index)?.content.clone())
    }

    fn search_text(&self, page_index: usize, literal: &str) -> Vec<Region> {
        let Ok(page) = self.page(page_index) else {
            return Vec::new();
        };
        if literal.is_empty() {
            return Vec::new();
        }
        page.content
            .match_indices(literal)
            .map(|(start, m)| Region {
                start,
                end: start + m.len(),
            })
            .collect()
    }

    fn mark_region(
        &mut self,
        page_index: usize,
        region: Region,
        mark: RedactionMark,
    ) -> RedactResult<()> {
        self.page(page_index)?;
        self.pages[page_index].pending.push((region, mark));
        Ok(())
    }

    fn commit_page(&mut self, page_index: usize) -> RedactResult<()> {
        self.page(page_index)?;
        let page = &mut self.pages[page_index];
        let marks = std::mem::take(&mut page.pending);

        // Overlapping marks must all be honored: merge them into disjoint
        // intervals first, then splice back-to-front so earlier offsets stay
        // valid while label splices change the page length. A merged
        // interval renders with the mark that starts it.
        let mut normalized: Vec<(Region, RedactionMark)> = marks
            .into_iter()
            .filter_map(|(region, mark)| {
                let start = region.start.min(page.content.len());
                let mut end = region.end.min(page.content.len());
                while end > 0 && !page.content.is_char_boundary(end) {
                    end -= 1;
                }
                (start < end && page.content.is_char_boundary(start))
                    .then_some((Region { start, end }, mark))
            })
            .collect();
        normalized.sort_by(|a, b| a.0.start.cmp(&b.0.start).then(b.0.end.cmp(&a.0.end)));

        let mut merged: Vec<(Region, RedactionMark)> = Vec::new();
        for (region, mark) in normalized {
            match merged.last_mut() {
                Some((last, _)) if region.start < last.end => {
                    last.end = last.end.max(region.end);
                }
                _ => merged.push((region, mark)),
            }
        }

        for (region, mark) in merged.iter().rev() {
            let replacement = match mark {
                RedactionMark::Blackout => page.content[region.start..region.end]
                    .chars()
                    .map(|c| if c == '\n' { c } else { '█' })
                    .collect::<String>(),
                RedactionMark::Label(tag) => tag.clone(),
            };
            page.content.replace_range(region.start..region.end, &replacement);
        }

        Ok(())
    }

    fn save(&self, path: &Path) -> RedactResult<()> {
        let joined = self
            .pages
            .iter()
            .map(|p| p.content.as_str())
            .collect::<Vec<_>>()
            .join("\u{0C}");
        std::fs::write(path, joined).map_err(|e| RedactError::DocumentWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
