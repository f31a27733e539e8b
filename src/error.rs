//! Error types for the PII redaction library.
//!
//! Per-document failures are isolated at the document boundary by the batch
//! orchestrator; nothing in this module aborts a batch on its own.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for redaction operations.
pub type RedactResult<T> = Result<T, RedactError>;

/// Error type for all pipeline operations.
///
/// Variants carry the path they relate to so that batch error lines can be
/// rendered without extra context plumbing.
#[derive(Debug, Error)]
pub enum RedactError {
    /// Input document cannot be opened or parsed.
    #[error("failed to open document '{path}': {reason}")]
    DocumentOpen { path: PathBuf, reason: String },

    /// Redacted output or audit report cannot be written.
    #[error("failed to write '{path}': {source}")]
    DocumentWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Page text extraction failed.
    #[error("text extraction failed for '{path}' page {page}: {reason}")]
    Extraction {
        path: PathBuf,
        page: usize,
        reason: String,
    },

    /// Output directory is missing and cannot be created.
    #[error("cannot create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid request parameters (empty document list, bad page index, ...).
    #[error("invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },
}

impl RedactError {
    /// Path of the document this error relates to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::DocumentOpen { path, .. }
            | Self::DocumentWrite { path, .. }
            | Self::Extraction { path, .. }
            | Self::OutputDir { path, .. } => Some(path),
            Self::InvalidInput { .. } => None,
        }
    }
}
