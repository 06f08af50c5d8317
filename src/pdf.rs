use std::path::Path;

use tracing::debug;

use crate::error::DocumentLoadError;
use crate::source::PageSource;

/// Text of a native PDF, one entry per page.
pub struct PdfExtractor;

impl PageSource for PdfExtractor {
    fn pages(&self, path: &Path) -> Result<Vec<String>, DocumentLoadError> {
        let path_str = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|source| DocumentLoadError::Io {
            path: path_str.clone(),
            source,
        })?;

        // pdf-extract panics on some malformed inputs
        match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes)) {
            Ok(Ok(pages)) => {
                debug!(path = %path.display(), pages = pages.len(), "Extracted PDF text");
                Ok(pages)
            }
            Ok(Err(e)) => Err(DocumentLoadError::Pdf {
                path: path_str,
                reason: e.to_string(),
            }),
            Err(_) => Err(DocumentLoadError::Pdf {
                path: path_str,
                reason: "panic during extraction".to_string(),
            }),
        }
    }
}
