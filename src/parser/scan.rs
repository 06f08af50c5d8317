use chrono::NaiveDate;
use tracing::warn;

use super::row::tokenize_row;
use super::RankingRow;
use crate::consts::MAX_ROWS_PER_DOCUMENT;

/// Rows accepted from one document, plus how many candidates were rejected.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub rows: Vec<RankingRow>,
    pub rejected: usize,
}

/// Headers and footers start with letters; ranking rows start with the rank.
pub fn is_row_candidate(line: &str) -> bool {
    line.trim()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}

/// Walk pages and their lines in order, tokenizing row candidates until the
/// document has contributed `MAX_ROWS_PER_DOCUMENT` rows.
pub fn scan_pages<S: AsRef<str>>(pages: &[S], date: NaiveDate, strip_trailing: usize) -> ScanReport {
    let mut report = ScanReport::default();

    'pages: for page in pages {
        for line in page.as_ref().lines() {
            if report.rows.len() >= MAX_ROWS_PER_DOCUMENT {
                break 'pages;
            }
            if !is_row_candidate(line) {
                continue;
            }
            let line = line.trim();
            match tokenize_row(line, strip_trailing) {
                Ok(fields) => report.rows.push(RankingRow { date, fields }),
                Err(e) => {
                    warn!("Error parsing row: {} -> {}", line, e);
                    report.rejected += 1;
                }
            }
        }
    }

    report
}
