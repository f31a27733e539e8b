//! Redaction pass: planning and per-page mark application.
//!
//! The planner decides which detections to materialize on each page,
//! preferring a preview pass's cached results over a fresh scan so a redact
//! run removes exactly what the user was shown. The executor drives the
//! document backend to mark and commit each page.

pub mod executor;
pub mod planner;

pub use executor::RedactionExecutor;
pub use planner::{plan, PreviewCache};

use clap::ValueEnum;

/// Presentation of committed redaction marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RedactionMode {
    /// Opaque black fill, no residual text.
    Blackout,
    /// White fill overprinted with the bracketed category tag.
    Labeled,
}

impl std::fmt::Display for RedactionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Blackout => "blackout",
            Self::Labeled => "labeled",
        })
    }
}
