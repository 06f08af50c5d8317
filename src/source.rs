use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::consts::{PAGE_DOCUMENT_EXTENSIONS, SPREADSHEET_EXTENSIONS};
use crate::error::{DateExtractionError, DocumentLoadError};
use crate::parser::date;
use crate::pdf::PdfExtractor;
use crate::render::SpreadsheetRenderer;

/// Anything that can present a document as page text, one `String` per page.
pub trait PageSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, DocumentLoadError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Spreadsheet,
    PageDocument,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Spreadsheet)
        } else if PAGE_DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::PageDocument)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Spreadsheet => "spreadsheet",
            Self::PageDocument => "PDF",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub file_name: String,
    pub format: FileFormat,
}

impl SourceDocument {
    /// `None` for directories, non-UTF-8 names and unsupported extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        if !path.is_file() {
            return None;
        }
        let format = FileFormat::from_path(path)?;
        let file_name = path.file_name()?.to_str()?.to_string();
        Some(Self {
            path: path.to_path_buf(),
            file_name,
            format,
        })
    }

    pub fn inferred_date(&self) -> Result<NaiveDate, DateExtractionError> {
        date::extract_date(&self.file_name)
    }

    pub fn week_label(&self) -> Option<&str> {
        date::week_label(&self.file_name)
    }

    pub fn load_pages(&self) -> Result<Vec<String>, DocumentLoadError> {
        match self.format {
            FileFormat::Spreadsheet => SpreadsheetRenderer::default().pages(&self.path),
            FileFormat::PageDocument => PdfExtractor.pages(&self.path),
        }
    }
}

/// Ranking documents directly inside `dir`, sorted by file name.
pub fn discover(dir: &Path) -> Result<Vec<SourceDocument>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory {}", dir.display()))?;

    let mut documents: Vec<SourceDocument> = entries
        .flatten()
        .filter_map(|entry| SourceDocument::from_path(&entry.path()))
        .collect();
    documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(documents)
}
