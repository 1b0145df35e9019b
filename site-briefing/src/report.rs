//! Result reporting surface and the markdown download.

use crate::composer::BriefingDocuments;
use crate::error::BriefingError;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub const MARKDOWN_MIME: &str = "text/markdown";

/// Receives user-visible messages and documents.
///
/// Implemented by whatever surface displays results; the composer only reports
/// through this trait.
pub trait Reporter: Send + Sync {
    fn error(&self, message: &str);

    fn success(&self, message: &str);

    /// Display a rendered markdown document under a title
    fn document(&self, title: &str, markdown: &str);

    /// Offer a file for download
    fn download(&self, download: &Download);
}

/// Downloadable markdown file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl Download {
    pub fn for_documents(company: &str, date: NaiveDate, documents: &BriefingDocuments) -> Self {
        Self {
            file_name: suggested_file_name(company, date),
            mime_type: MARKDOWN_MIME,
            content: documents.to_markdown(),
        }
    }

    /// Write the file into `dir`, returning its path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, BriefingError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// `briefing_site_{company}_{YYYY-MM-DD}.md`
///
/// Whitespace and path separators in the company name become `_`.
pub fn suggested_file_name(company: &str, date: NaiveDate) -> String {
    let company: String = company
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect();
    format!("briefing_site_{}_{}.md", company, date.format("%Y-%m-%d"))
}
