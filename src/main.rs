//! PII redaction CLI.
//!
//! Command-line front end over the pipeline's preview/redact request
//! surface, with progress streamed from the batch worker.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use pii_redact::{
    BatchResult, BatchRunner, BatchState, DetectionConfig, PiiCategory, ProgressEvent,
    RedactionMode, RedactionRequest,
};

/// PII Detection & Redaction Tool
///
/// Scans paginated documents for personally identifiable information and
/// produces redacted copies plus audit reports. Use 'preview' to see what
/// would be redacted before committing to 'redact'.
#[derive(Parser)]
#[command(name = "pii-redact")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan documents and list every detection without writing anything
    Preview {
        /// Input documents
        #[arg(required = true, value_name = "FILE")]
        documents: Vec<PathBuf>,

        #[command(flatten)]
        detection: DetectionArgs,
    },

    /// Detect and permanently redact, writing redacted copies and reports
    Redact {
        /// Input documents
        #[arg(required = true, value_name = "FILE")]
        documents: Vec<PathBuf>,

        /// Directory for redacted copies and audit reports
        #[arg(short, long, value_name = "DIR")]
        output_dir: PathBuf,

        /// Redaction style: opaque boxes or category labels
        #[arg(long, value_enum, default_value_t = RedactionMode::Blackout)]
        style: RedactionMode,

        #[command(flatten)]
        detection: DetectionArgs,
    },
}

/// Detection options shared by both subcommands.
#[derive(Args)]
struct DetectionArgs {
    /// Disable a built-in category (can be specified multiple times)
    #[arg(long, value_enum, value_name = "CATEGORY")]
    disable: Vec<PiiCategory>,

    /// Custom phrase to redact, matched case-insensitively (repeatable)
    #[arg(short, long, value_name = "PHRASE")]
    custom: Vec<String>,

    /// File of custom phrases, one per line; '#' lines are comments
    #[arg(long, value_name = "FILE")]
    custom_file: Option<PathBuf>,
}

impl DetectionArgs {
    fn config(&self) -> DetectionConfig {
        self.disable
            .iter()
            .fold(DetectionConfig::all(), |config, category| {
                config.without(*category)
            })
    }

    fn phrases(&self) -> Result<Vec<String>> {
        load_phrases(&self.custom, self.custom_file.as_deref())
    }
}

/// Collects custom phrases from the command line and an optional file.
fn load_phrases(inline: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut phrases: Vec<String> = inline.to_vec();
    if let Some(path) = file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read custom phrase file {}", path.display()))?;
        phrases.extend(content.lines().map(|l| l.to_string()));
    }
    Ok(phrases)
}

/// Pipeline command handler.
struct PipelineHandler {
    verbose: bool,
}

impl PipelineHandler {
    fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Runs a request on the batch worker, printing progress as documents
    /// start, and returns the terminal result.
    fn run(&self, request: RedactionRequest) -> Result<BatchResult> {
        let runner = BatchRunner::with_text_backend();
        let events = runner.spawn(request);

        let mut outcome = None;
        for event in events {
            match event {
                ProgressEvent::DocumentStarted { path, index, total } => {
                    if self.verbose {
                        eprintln!(
                            "Processing: {} ({}/{})",
                            path.display(),
                            index + 1,
                            total
                        );
                    }
                }
                ProgressEvent::Finished(result) => outcome = Some(result),
            }
        }

        outcome
            .context("Batch worker ended without a result")?
            .map_err(Into::into)
    }

    fn preview(&self, documents: Vec<PathBuf>, detection: &DetectionArgs) -> Result<()> {
        let request =
            RedactionRequest::preview(documents, detection.config(), detection.phrases()?);
        let result = self.run(request)?;

        print!("{}", result.detected_log);
        println!("{}", result.summary(false));

        let total: usize = result.counts.values().sum();
        println!("✓ Preview: {total} items found");
        self.report_failures(&result);
        Ok(())
    }

    fn redact(
        &self,
        documents: Vec<PathBuf>,
        output_dir: PathBuf,
        style: RedactionMode,
        detection: &DetectionArgs,
    ) -> Result<()> {
        let request = RedactionRequest::redact(
            documents,
            detection.config(),
            detection.phrases()?,
            style,
            output_dir,
            pii_redact::PreviewCache::new(),
        );
        let result = self.run(request)?;

        if self.verbose {
            print!("{}", result.detected_log);
        }
        print!("{}", result.output_log);
        println!("{}", result.summary(true));

        let total: usize = result.counts.values().sum();
        println!("✓ Complete: {total} items redacted");
        self.report_failures(&result);
        Ok(())
    }

    fn report_failures(&self, result: &BatchResult) {
        if result.state == BatchState::CompletedWithErrors {
            println!(
                "⚠ Completed with {} error(s) out of {} file(s)",
                result.failures.len(),
                result.files_attempted()
            );
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("pii_redact=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let handler = PipelineHandler::new(cli.verbose);

    match cli.command {
        Commands::Preview {
            documents,
            detection,
        } => handler.preview(documents, &detection)?,
        Commands::Redact {
            documents,
            output_dir,
            style,
            detection,
        } => handler.redact(documents, output_dir, style, &detection)?,
    }

    Ok(())
}
