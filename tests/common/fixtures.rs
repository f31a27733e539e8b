//! Test fixtures and document builders.
//!
//! Provides builders for creating paginated test documents with specific
//! content, following the Builder pattern for clean test setup.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Builder for creating paginated plain-text test documents.
///
/// Pages are separated by form feed characters, matching the text backend's
/// pagination. The builder starts on page 1.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let doc = TestDocBuilder::new()
///     .with_line("Employee: John Smith")
///     .with_line("SSN: 123-45-6789")
///     .with_page_break()
///     .with_line("Phone: 555-123-4567")
///     .build(Path::new("/tmp/test.txt"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TestDocBuilder {
    pages: Vec<Vec<String>>,
}

impl TestDocBuilder {
    /// Creates a new builder with a single empty page.
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
        }
    }

    /// Appends a line of text to the current page.
    pub fn with_line(mut self, line: &str) -> Self {
        self.pages
            .last_mut()
            .expect("builder always has a page")
            .push(line.to_string());
        self
    }

    /// Starts a new page.
    pub fn with_page_break(mut self) -> Self {
        self.pages.push(Vec::new());
        self
    }

    /// Renders the document content without writing it.
    pub fn content(&self) -> String {
        self.pages
            .iter()
            .map(|lines| lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\u{0C}")
    }

    /// Writes the document to the specified path.
    pub fn build(self, output_path: &Path) -> Result<PathBuf> {
        fs::write(output_path, self.content())?;
        Ok(output_path.to_path_buf())
    }
}

impl Default for TestDocBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Quick helper to create a single-page document with mixed PII content.
pub fn create_employee_record(path: &Path) -> Result<PathBuf> {
    TestDocBuilder::new()
        .with_line("EMPLOYEE RECORD")
        .with_line("Name: John Smith")
        .with_line("SSN: 123-45-6789")
        .with_line("Phone: (555) 234-5678")
        .with_line("Email: jsmith@example.com")
        .build(path)
}

/// Quick helper to create a document with no detectable PII.
pub fn create_clean_document(path: &Path) -> Result<PathBuf> {
    TestDocBuilder::new()
        .with_line("Quarterly maintenance checklist")
        .with_line("- inspect fittings")
        .with_line("- grease bearings")
        .build(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builder_pagination() {
        let builder = TestDocBuilder::new()
            .with_line("one")
            .with_page_break()
            .with_line("two");
        assert_eq!(builder.content(), "one\u{0C}two");
    }

    #[test]
    fn test_create_employee_record() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("record.txt");
        create_employee_record(&path)?;
        assert!(path.exists());
        Ok(())
    }
}
