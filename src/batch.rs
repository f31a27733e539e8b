//! Batch orchestrator.
//!
//! Sequences detection, planning, redaction, and reporting across a batch of
//! documents. Documents are processed one at a time and pages within a
//! document one at a time; the dedup/ordering and preview-parity contracts
//! depend only on this deterministic evaluation order. Per-document failures
//! are recorded and the batch continues.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::detect::DetectionEngine;
use crate::document::{DocumentBackend, TextBackend};
use crate::domain::DetectionConfig;
use crate::error::{RedactError, RedactResult};
use crate::redaction::{planner, PreviewCache, RedactionExecutor, RedactionMode};
use crate::report::{self, CategoryCounts, DocumentScanResult};

/// One batch run, constructed once and not mutated after submission.
///
/// `output_dir` selects the mode: `None` is a preview pass (no document is
/// written), `Some` is a redact pass producing a redacted copy and an audit
/// report per document.
#[derive(Debug, Clone)]
pub struct RedactionRequest {
    pub documents: Vec<PathBuf>,
    pub config: DetectionConfig,
    pub custom_phrases: Vec<String>,
    pub mode: RedactionMode,
    pub output_dir: Option<PathBuf>,
    pub preview: PreviewCache,
}

impl RedactionRequest {
    /// Builds a preview (detection-only) request.
    pub fn preview(
        documents: Vec<PathBuf>,
        config: DetectionConfig,
        custom_phrases: Vec<String>,
    ) -> Self {
        Self {
            documents,
            config,
            custom_phrases,
            mode: RedactionMode::Blackout,
            output_dir: None,
            preview: PreviewCache::new(),
        }
    }

    /// Builds a redact request. Pass the cache from a prior preview run to
    /// guarantee the redacted spans match what was shown; an empty cache
    /// makes the run detect-then-redact in one step.
    pub fn redact(
        documents: Vec<PathBuf>,
        config: DetectionConfig,
        custom_phrases: Vec<String>,
        mode: RedactionMode,
        output_dir: PathBuf,
        preview: PreviewCache,
    ) -> Self {
        Self {
            documents,
            config,
            custom_phrases,
            mode,
            output_dir: Some(output_dir),
            preview,
        }
    }

    pub fn is_preview(&self) -> bool {
        self.output_dir.is_none()
    }
}

/// Terminal state of a batch run.
///
/// A run that has started always reaches one of these; per-document failures
/// never abort the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Completed,
    CompletedWithErrors,
}

/// Output files produced for one successfully redacted document.
#[derive(Debug, Clone)]
pub struct DocumentOutput {
    pub source: PathBuf,
    pub redacted: PathBuf,
    pub report: PathBuf,
}

/// A document that failed, with the message recorded in the run log.
#[derive(Debug, Clone)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Aggregate outcome of a batch run.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Scan results for documents that processed successfully.
    pub documents: Vec<DocumentScanResult>,
    /// Global per-category counts, always from the fresh scan.
    pub counts: CategoryCounts,
    /// Output file pairs, one per successfully redacted document.
    pub outputs: Vec<DocumentOutput>,
    /// Per-document failures, in batch order.
    pub failures: Vec<DocumentFailure>,
    /// Running human-readable log of findings per document.
    pub detected_log: String,
    /// Running human-readable log of written outputs and failures.
    pub output_log: String,
    /// Fresh per-document detections, usable as a preview cache for a
    /// subsequent redact run.
    pub preview: PreviewCache,
    pub state: BatchState,
}

impl BatchResult {
    /// Number of documents attempted.
    pub fn files_attempted(&self) -> usize {
        self.documents.len() + self.failures.len()
    }

    /// Whole-batch summary text.
    pub fn summary(&self, redacted: bool) -> String {
        report::render_summary(self.files_attempted(), &self.counts, redacted)
    }
}

/// Progress notifications emitted by [`BatchRunner::spawn`].
///
/// A run emits one `DocumentStarted` per document followed by exactly one
/// terminal `Finished`.
#[derive(Debug)]
pub enum ProgressEvent {
    DocumentStarted {
        path: PathBuf,
        index: usize,
        total: usize,
    },
    Finished(RedactResult<BatchResult>),
}

/// Drives batch runs against one document backend.
pub struct BatchRunner {
    backend: Box<dyn DocumentBackend>,
}

struct ProcessedDocument {
    scan: DocumentScanResult,
    output: Option<DocumentOutput>,
}

impl BatchRunner {
    pub fn new(backend: Box<dyn DocumentBackend>) -> Self {
        Self { backend }
    }

    /// Runner over form-feed-paginated plain-text documents.
    pub fn with_text_backend() -> Self {
        Self::new(Box::new(TextBackend::new()))
    }

    /// Runs a batch synchronously on the calling thread.
    pub fn run(&self, request: &RedactionRequest) -> RedactResult<BatchResult> {
        self.run_with_progress(request, None)
    }

    /// Runs a batch on a worker thread, streaming progress events.
    ///
    /// The receiver yields one [`ProgressEvent::DocumentStarted`] per
    /// document and then exactly one [`ProgressEvent::Finished`] carrying
    /// the run outcome, after which the channel closes.
    pub fn spawn(self, request: RedactionRequest) -> mpsc::Receiver<ProgressEvent> {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let outcome = self.run_with_progress(&request, Some(&tx));
            let _ = tx.send(ProgressEvent::Finished(outcome));
        });
        rx
    }

    fn run_with_progress(
        &self,
        request: &RedactionRequest,
        progress: Option<&mpsc::Sender<ProgressEvent>>,
    ) -> RedactResult<BatchResult> {
        let engine = DetectionEngine::new(request.config.clone(), &request.custom_phrases)?;

        if let Some(dir) = &request.output_dir {
            std::fs::create_dir_all(dir).map_err(|e| RedactError::OutputDir {
                path: dir.clone(),
                source: e,
            })?;
        }

        let total = request.documents.len();
        let mut documents = Vec::new();
        let mut counts = CategoryCounts::new();
        let mut outputs = Vec::new();
        let mut failures: Vec<DocumentFailure> = Vec::new();
        let mut detected_log = String::new();
        let mut output_log = String::new();
        let mut preview = PreviewCache::new();

        for (index, path) in request.documents.iter().enumerate() {
            if let Some(tx) = progress {
                let _ = tx.send(ProgressEvent::DocumentStarted {
                    path: path.clone(),
                    index,
                    total,
                });
            }

            let filename = display_name(path);
            info!(document = %filename, index, total, "processing");
            detected_log.push_str(&report::file_banner(&filename));

            match self.process_document(path, &filename, &engine, request) {
                Ok(processed) => {
                    for (category, n) in &processed.scan.counts {
                        *counts.entry(*category).or_insert(0) += n;
                    }
                    detected_log.push_str(&processed.scan.findings);
                    preview.insert(path.clone(), processed.scan.detections.clone());
                    if let Some(output) = processed.output {
                        output_log.push_str(&format!(
                            "✓ {}\n  → {}\n  → {}\n\n",
                            filename,
                            output.redacted.display(),
                            output.report.display()
                        ));
                        outputs.push(output);
                    }
                    documents.push(processed.scan);
                }
                Err(e) => {
                    warn!(document = %filename, error = %e, "document failed");
                    detected_log.push_str(&format!("  ERROR: {e}\n"));
                    if !request.is_preview() {
                        output_log.push_str(&format!("✗ {filename}: {e}\n\n"));
                    }
                    failures.push(DocumentFailure {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                }
            }

            detected_log.push('\n');
        }

        let state = if failures.is_empty() {
            BatchState::Completed
        } else {
            BatchState::CompletedWithErrors
        };

        Ok(BatchResult {
            documents,
            counts,
            outputs,
            failures,
            detected_log,
            output_log,
            preview,
            state,
        })
    }

    fn process_document(
        &self,
        path: &Path,
        filename: &str,
        engine: &DetectionEngine,
        request: &RedactionRequest,
    ) -> RedactResult<ProcessedDocument> {
        let mut doc = self.backend.open(path)?;

        let mut fresh = Vec::new();
        for page_index in 0..doc.page_count() {
            let text = doc.extract_text(page_index)?;
            fresh.extend(engine.scan(&text, page_index as u32 + 1));
        }
        debug!(document = %filename, detections = fresh.len(), "scan complete");
        let scan = DocumentScanResult::new(path, fresh);

        let Some(output_dir) = &request.output_dir else {
            return Ok(ProcessedDocument { scan, output: None });
        };

        // The cached preview list wins over the fresh scan so the redacted
        // spans are exactly what the user reviewed.
        let executor = RedactionExecutor::new(request.mode);
        let planned = planner::planned_for_document(path, &scan.detections, &request.preview);
        for page_index in 0..doc.page_count() {
            let page_detections = planner::plan(
                path,
                page_index as u32 + 1,
                &scan.detections,
                &request.preview,
            );
            executor.apply(doc.as_mut(), page_index, &page_detections)?;
        }

        let redacted_path = output_dir.join(redacted_file_name(path));
        doc.save(&redacted_path)?;

        let report_path = output_dir.join(report_file_name(path));
        let report_text = report::audit_report(filename, Local::now(), &planned);
        std::fs::write(&report_path, report_text).map_err(|e| RedactError::DocumentWrite {
            path: report_path.clone(),
            source: e,
        })?;

        Ok(ProcessedDocument {
            scan,
            output: Some(DocumentOutput {
                source: path.to_path_buf(),
                redacted: redacted_path,
                report: report_path,
            }),
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

fn redacted_file_name(path: &Path) -> PathBuf {
    let stem = file_stem(path);
    match path.extension() {
        Some(ext) => PathBuf::from(format!("{}_REDACTED.{}", stem, ext.to_string_lossy())),
        None => PathBuf::from(format!("{stem}_REDACTED")),
    }
}

fn report_file_name(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}_report.txt", file_stem(path)))
}
