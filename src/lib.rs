//! PII detection and redaction pipeline for paginated documents.
//!
//! This library scans extracted page text for personally identifiable
//! information, reconciles overlapping matches into a deduplicated, ordered
//! list, and applies redaction marks through a pluggable document backend.
//! A preview pass caches its findings so a later redact pass removes exactly
//! what was shown, even if the detection configuration changed in between.
//!
//! # Features
//!
//! - **Built-in categories**: SSN, phone, email, credit card, bank account,
//!   date of birth, address, common names
//! - **Custom phrases**: case-insensitive literal matching, one per line
//! - **Two presentation modes**: opaque blackout or bracketed category labels
//! - **Preview/redact parity**: a redact run consumes the preview's cached
//!   detections verbatim
//! - **Batch isolation**: one bad document never aborts the batch
//!
//! # Architecture
//!
//! - [`domain`]: category vocabulary, pattern registry, detection records
//! - [`detect`]: the scan/dedup/order engine
//! - [`document`]: backend traits plus the plain-text implementation
//! - [`redaction`]: preview cache, per-page planner, mark executor
//! - [`report`]: findings rendering and audit reports
//! - [`batch`]: the orchestrator and its progress/result types
//! - [`error`]: error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use pii_redact::{
//!     BatchRunner, DetectionConfig, PreviewCache, RedactionMode, RedactionRequest,
//! };
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let runner = BatchRunner::with_text_backend();
//!
//! let request = RedactionRequest::redact(
//!     vec![PathBuf::from("statement.txt")],
//!     DetectionConfig::all(),
//!     vec!["PROJECT-123".to_string()],
//!     RedactionMode::Labeled,
//!     PathBuf::from("out"),
//!     PreviewCache::new(),
//! );
//!
//! let result = runner.run(&request)?;
//! println!("{}", result.summary(true));
//! # Ok(())
//! # }
//! ```
//!
//! # Preview, then redact
//!
//! ```no_run
//! use pii_redact::{
//!     BatchRunner, DetectionConfig, RedactionMode, RedactionRequest,
//! };
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let runner = BatchRunner::with_text_backend();
//! let documents = vec![PathBuf::from("statement.txt")];
//!
//! let preview = runner.run(&RedactionRequest::preview(
//!     documents.clone(),
//!     DetectionConfig::all(),
//!     vec![],
//! ))?;
//! println!("{}", preview.detected_log);
//!
//! // The redact pass consumes the preview's cache, so it removes exactly
//! // the spans shown above.
//! let request = RedactionRequest::redact(
//!     documents,
//!     DetectionConfig::all(),
//!     vec![],
//!     RedactionMode::Blackout,
//!     PathBuf::from("out"),
//!     preview.preview,
//! );
//! runner.run(&request)?;
//! # Ok(())
//! # }
//! ```

// Public API
pub mod batch;
pub mod detect;
pub mod document;
pub mod domain;
pub mod error;
pub mod redaction;
pub mod report;

// Re-exports for convenient access
pub use batch::{
    BatchResult, BatchRunner, BatchState, DocumentFailure, DocumentOutput, ProgressEvent,
    RedactionRequest,
};
pub use detect::DetectionEngine;
pub use document::{DocumentBackend, DocumentHandle, RedactionMark, Region, TextBackend};
pub use domain::{Detection, DetectionConfig, PiiCategory};
pub use error::{RedactError, RedactResult};
pub use redaction::{PreviewCache, RedactionExecutor, RedactionMode};
pub use report::{CategoryCounts, DocumentScanResult};
