use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::debug;

use crate::consts::{MISSING_CELL, ROWS_PER_PAGE};
use crate::error::DocumentLoadError;
use crate::parser::scan::is_row_candidate;
use crate::source::PageSource;

/// Renders the first worksheet of a workbook as page text, so spreadsheets go
/// through the same scanner as PDFs.
///
/// Each sheet row becomes one space-joined line. A first row that does not
/// start with a digit is the column header and is repeated at the top of every
/// page; a digit-leading first row is data like the rest. Empty cells render
/// as `nan`.
pub struct SpreadsheetRenderer {
    rows_per_page: usize,
}

impl Default for SpreadsheetRenderer {
    fn default() -> Self {
        Self {
            rows_per_page: ROWS_PER_PAGE,
        }
    }
}

impl SpreadsheetRenderer {
    pub fn render_range(&self, range: &Range<Data>) -> Vec<String> {
        let mut lines = range.rows().map(render_row).peekable();
        // headerless sheets must not repeat their first ranking on every page
        let header = lines.next_if(|first| !is_row_candidate(first));
        let body: Vec<String> = lines.collect();
        if body.is_empty() {
            return header.into_iter().collect();
        }

        body.chunks(self.rows_per_page.max(1))
            .map(|chunk| {
                let mut page = String::with_capacity((chunk.len() + 1) * 48);
                if let Some(header) = &header {
                    page.push_str(header);
                    page.push('\n');
                }
                for line in chunk {
                    page.push_str(line);
                    page.push('\n');
                }
                page
            })
            .collect()
    }
}

impl PageSource for SpreadsheetRenderer {
    fn pages(&self, path: &Path) -> Result<Vec<String>, DocumentLoadError> {
        let path_str = path.display().to_string();
        let mut workbook = open_workbook_auto(path).map_err(|source| DocumentLoadError::Spreadsheet {
            path: path_str.clone(),
            source,
        })?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| DocumentLoadError::EmptyWorkbook(path_str.clone()))?
            .map_err(|source| DocumentLoadError::Spreadsheet {
                path: path_str.clone(),
                source,
            })?;

        let pages = self.render_range(&range);
        debug!(
            path = %path.display(),
            rows = range.height(),
            columns = range.width(),
            pages = pages.len(),
            "Rendered worksheet"
        );
        Ok(pages)
    }
}

fn render_row(row: &[Data]) -> String {
    row.iter().map(render_cell).collect::<Vec<_>>().join(" ")
}

fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => MISSING_CELL.to_string(),
        Data::String(s) if s.trim().is_empty() => MISSING_CELL.to_string(),
        Data::String(s) => s.trim().to_string(),
        // integral floats print without the ".0" so ranks and ids tokenize cleanly
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
