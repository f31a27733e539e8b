//! Document collaborator ports.
//!
//! Page text extraction and the mechanics of drawing a redaction mark are
//! external concerns. This module defines the seam the pipeline drives them
//! through, plus the plain-text backend this crate ships. A PDF or image
//! backend would implement the same two traits without touching the rest of
//! the pipeline.

pub mod text;

pub use text::TextBackend;

use crate::error::RedactResult;
use std::path::Path;

/// A located occurrence of text on a rendered page.
///
/// Coordinates are backend-defined; the text backend uses byte offsets into
/// the page content. Callers treat regions as opaque and pass them back to
/// [`DocumentHandle::mark_region`] unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

/// How a marked region is rendered once committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedactionMark {
    /// Opaque fill, no residual text.
    Blackout,
    /// The region is replaced by the given tag (e.g. `[SSN]`), preserving
    /// layout readability while destroying the original content.
    Label(String),
}

/// Opens documents of one concrete format.
pub trait DocumentBackend: Send + Sync {
    /// Opens a document for reading and mutation.
    fn open(&self, path: &Path) -> RedactResult<Box<dyn DocumentHandle>>;
}

/// One open document.
///
/// Pages are addressed by 0-based index here; detections carry 1-based page
/// numbers, converted by the orchestrator.
pub trait DocumentHandle: Send {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extracts the text of one page.
    fn extract_text(&self, page_index: usize) -> RedactResult<String>;

    /// Finds every on-page occurrence of a literal string.
    ///
    /// A miss returns an empty list, never an error: text that no longer
    /// appears verbatim on the rendered page (it may span a line break)
    /// simply yields zero regions.
    fn search_text(&self, page_index: usize, literal: &str) -> Vec<Region>;

    /// Buffers a redaction mark on a page. Nothing is destroyed until
    /// [`DocumentHandle::commit_page`] runs.
    fn mark_region(
        &mut self,
        page_index: usize,
        region: Region,
        mark: RedactionMark,
    ) -> RedactResult<()>;

    /// Permanently burns all buffered marks into the page content. Marks are
    /// not reversible annotations after this point.
    fn commit_page(&mut self, page_index: usize) -> RedactResult<()>;

    /// Writes the document to a new path.
    fn save(&self, path: &Path) -> RedactResult<()>;
}
