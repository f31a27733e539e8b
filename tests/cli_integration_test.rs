//! CLI integration tests.
//!
//! Tests argument parsing, error handling, and end-to-end workflows through
//! the actual binary to ensure the full user experience works correctly.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::*;

/// Creates a test Command for the pii-redact binary.
fn cli() -> Command {
    Command::cargo_bin("pii-redact").unwrap()
}

mod argument_parsing {
    use super::*;

    #[test]
    fn test_help_flag() {
        cli()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("preview"))
            .stdout(predicate::str::contains("redact"));
    }

    #[test]
    fn test_redact_help_lists_options() {
        cli()
            .args(["redact", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--output-dir"))
            .stdout(predicate::str::contains("--style"))
            .stdout(predicate::str::contains("--disable"))
            .stdout(predicate::str::contains("--custom"));
    }

    #[test]
    fn test_version_flag() {
        cli()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("pii-redact"));
    }

    #[test]
    fn test_redact_requires_output_dir() {
        cli()
            .args(["redact", "input.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--output-dir").or(predicate::str::contains("required")));
    }

    #[test]
    fn test_preview_requires_documents() {
        cli().arg("preview").assert().failure();
    }

    #[test]
    fn test_invalid_category_rejected() {
        cli()
            .args(["preview", "--disable", "passport", "input.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }
}

mod workflows {
    use super::*;

    #[test]
    fn test_preview_prints_findings_and_summary() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("record.txt");
        create_employee_record(&input).unwrap();

        cli()
            .args(["preview", input.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("[SSN] \"123-45-6789\""))
            .stdout(predicate::str::contains("PREVIEW SUMMARY"))
            .stdout(predicate::str::contains("✓ Preview:"));
    }

    #[test]
    fn test_redact_writes_output_pair() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("record.txt");
        create_employee_record(&input).unwrap();
        let out_dir = temp_dir.path().join("out");

        cli()
            .args([
                "redact",
                input.to_str().unwrap(),
                "--output-dir",
                out_dir.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("✓ record.txt"))
            .stdout(predicate::str::contains("REDACTION COMPLETE"));

        let redacted = out_dir.join("record_REDACTED.txt");
        assert_output_exists(&redacted);
        assert_redacted(&redacted, "123-45-6789");
        assert_output_exists(&out_dir.join("record_report.txt"));
    }

    #[test]
    fn test_labeled_style_flag() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("record.txt");
        create_employee_record(&input).unwrap();
        let out_dir = temp_dir.path().join("out");

        cli()
            .args([
                "redact",
                input.to_str().unwrap(),
                "--output-dir",
                out_dir.to_str().unwrap(),
                "--style",
                "labeled",
            ])
            .assert()
            .success();

        let text = read_output(&out_dir.join("record_REDACTED.txt"));
        assert!(text.contains("[SSN]"));
        assert!(!text.contains("123-45-6789"));
    }

    #[test]
    fn test_disable_flag_suppresses_category() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("record.txt");
        create_employee_record(&input).unwrap();

        cli()
            .args(["preview", "--disable", "email", input.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("[EMAIL]").not())
            .stdout(predicate::str::contains("[SSN]"));
    }

    #[test]
    fn test_custom_phrase_flag() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("memo.txt");
        TestDocBuilder::new()
            .with_line("Codename PROJECT-123 is live")
            .build(&input)
            .unwrap();

        cli()
            .args([
                "preview",
                "--custom",
                "project-123",
                input.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("[CUSTOM] \"PROJECT-123\""));
    }

    #[test]
    fn test_missing_file_reports_error_but_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");
        let input = temp_dir.path().join("record.txt");
        create_employee_record(&input).unwrap();

        cli()
            .args([
                "preview",
                missing.to_str().unwrap(),
                input.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("ERROR:"))
            .stdout(predicate::str::contains("Completed with 1 error(s)"));
    }
}
