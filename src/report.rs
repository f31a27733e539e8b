//! Findings rendering and audit report generation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::domain::{Detection, PiiCategory};

/// Per-category detection counts.
pub type CategoryCounts = BTreeMap<PiiCategory, usize>;

/// Everything a detection pass learned about one document.
#[derive(Debug, Clone)]
pub struct DocumentScanResult {
    /// Source document path.
    pub path: PathBuf,
    /// Detections ordered by page, then by start offset.
    pub detections: Vec<Detection>,
    /// Count of detections per category.
    pub counts: CategoryCounts,
    /// Human-readable rendering of all findings, used verbatim for display.
    pub findings: String,
}

impl DocumentScanResult {
    pub fn new(path: impl Into<PathBuf>, detections: Vec<Detection>) -> Self {
        let counts = count_by_category(&detections);
        let findings = render_findings(&detections);
        Self {
            path: path.into(),
            detections,
            counts,
            findings,
        }
    }
}

/// Tallies detections per category.
pub fn count_by_category(detections: &[Detection]) -> CategoryCounts {
    let mut counts = CategoryCounts::new();
    for d in detections {
        *counts.entry(d.category).or_insert(0) += 1;
    }
    counts
}

fn item_line(d: &Detection) -> String {
    format!("Page {}: [{}] \"{}\"", d.page_number, d.category, d.matched_text)
}

/// Indented finding list for the detected-PII log.
pub fn render_findings(detections: &[Detection]) -> String {
    if detections.is_empty() {
        return "  No PII detected.\n".to_string();
    }
    let mut out = String::new();
    for d in detections {
        out.push_str("  ");
        out.push_str(&item_line(d));
        out.push('\n');
    }
    out
}

/// Banner separating documents in the detected-PII log.
pub fn file_banner(filename: &str) -> String {
    let rule = "=".repeat(45);
    format!("{rule}\n{filename}\n{rule}\n\n")
}

/// The persisted audit report for one redacted document.
pub fn audit_report(
    source_filename: &str,
    timestamp: DateTime<Local>,
    detections: &[Detection],
) -> String {
    let mut out = String::new();
    out.push_str("PII Redaction Report\n");
    out.push_str(&format!("Source: {source_filename}\n"));
    out.push_str(&format!("Date: {}\n", timestamp.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");
    out.push_str(&format!("Items redacted: {}\n\n", detections.len()));
    for d in detections {
        out.push_str(&item_line(d));
        out.push('\n');
    }
    out
}

/// Whole-batch summary text.
///
/// `redacted` selects the redact-run wording; counts render in descending
/// order, ties broken by label so the output is deterministic.
pub fn render_summary(files: usize, counts: &CategoryCounts, redacted: bool) -> String {
    let total: usize = counts.values().sum();
    let mut out = String::new();

    if redacted {
        out.push_str("REDACTION COMPLETE\n");
    } else {
        out.push_str("PREVIEW SUMMARY\n");
    }
    out.push_str(&"=".repeat(45));
    out.push_str("\n\n");
    if redacted {
        out.push_str(&format!("Files processed: {files}\n"));
        out.push_str(&format!("Total redacted: {total}\n\n"));
    } else {
        out.push_str(&format!("Files scanned: {files}\n"));
        out.push_str(&format!("Total items found: {total}\n\n"));
    }

    if !counts.is_empty() {
        out.push_str("By Type:\n");
        out.push_str(&"-".repeat(30));
        out.push('\n');
        let mut ordered: Vec<_> = counts.iter().collect();
        ordered.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.label().cmp(b.0.label())));
        for (category, count) in ordered {
            out.push_str(&format!("  {category}: {count}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn det(text: &str, category: PiiCategory, page: u32, offset: usize) -> Detection {
        Detection {
            matched_text: text.to_string(),
            category,
            start_offset: offset,
            page_number: page,
        }
    }

    #[test]
    fn test_findings_lines() {
        let findings = render_findings(&[
            det("123-45-6789", PiiCategory::Ssn, 1, 0),
            det("John", PiiCategory::PersonName, 2, 4),
        ]);
        assert_eq!(
            findings,
            "  Page 1: [SSN] \"123-45-6789\"\n  Page 2: [NAME] \"John\"\n"
        );
    }

    #[test]
    fn test_findings_empty() {
        assert_eq!(render_findings(&[]), "  No PII detected.\n");
    }

    #[test]
    fn test_audit_report_layout() {
        let ts = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let report = audit_report(
            "input.txt",
            ts,
            &[det("555-123-4567", PiiCategory::Phone, 1, 10)],
        );

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "PII Redaction Report");
        assert_eq!(lines[1], "Source: input.txt");
        assert_eq!(lines[2], "Date: 2026-03-14 09:26:53");
        assert_eq!(lines[3], "=".repeat(50));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Items redacted: 1");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Page 1: [PHONE] \"555-123-4567\"");
    }

    #[test]
    fn test_summary_orders_by_count_descending() {
        let counts = count_by_category(&[
            det("a@b.com", PiiCategory::Email, 1, 0),
            det("c@d.com", PiiCategory::Email, 1, 10),
            det("John", PiiCategory::PersonName, 1, 20),
        ]);
        let summary = render_summary(1, &counts, false);
        let email_pos = summary.find("EMAIL: 2").unwrap();
        let name_pos = summary.find("NAME: 1").unwrap();
        assert!(email_pos < name_pos);
        assert!(summary.contains("Total items found: 3"));
        assert!(summary.starts_with("PREVIEW SUMMARY\n"));
    }

    #[test]
    fn test_scan_result_counts() {
        let result = DocumentScanResult::new(
            "doc.txt",
            vec![
                det("123-45-6789", PiiCategory::Ssn, 1, 0),
                det("987-65-4321", PiiCategory::Ssn, 2, 0),
            ],
        );
        assert_eq!(result.counts.get(&PiiCategory::Ssn), Some(&2));
        assert!(result.findings.contains("Page 2: [SSN]"));
    }
}
