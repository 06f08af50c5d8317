use std::fmt;
use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, info, warn};

use crate::parser::{scan_pages, MalformedRegistry, RankingRow, ScanReport};
use crate::source::{self, SourceDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    DateNotFound,
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateNotFound => f.write_str("date not found in file name"),
            Self::Unreadable => f.write_str("unreadable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: SkipReason,
}

/// Everything one run produced, in file-name order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub rows: Vec<RankingRow>,
    pub skipped: Vec<SkippedFile>,
    pub documents: usize,
    pub rejected_rows: usize,
}

impl BatchOutcome {
    pub fn print(&self) {
        println!(
            "Read {} documents: {} rows accepted, {} rows rejected, {} files skipped.",
            self.documents,
            self.rows.len(),
            self.rejected_rows,
            self.skipped.len(),
        );
    }
}

enum DocumentResult {
    Scanned(ScanReport),
    Skipped(SkippedFile),
}

/// Scan every ranking document in `input_dir`, one at a time.
pub fn run_batch(input_dir: &Path, registry: &MalformedRegistry) -> Result<BatchOutcome> {
    let documents = source::discover(input_dir)?;
    info!("Found {} ranking documents in {}", documents.len(), input_dir.display());
    debug!("{} malformed-document entries registered", registry.len());

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")?
            .progress_chars("#>-"),
    );

    let mut outcome = BatchOutcome::default();
    for doc in &documents {
        pb.set_message(doc.file_name.clone());
        match process_document(doc, registry) {
            DocumentResult::Scanned(report) => {
                outcome.documents += 1;
                outcome.rejected_rows += report.rejected;
                outcome.rows.extend(report.rows);
            }
            DocumentResult::Skipped(skipped) => outcome.skipped.push(skipped),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        "Batch done: {} rows from {} documents ({} skipped)",
        outcome.rows.len(),
        outcome.documents,
        outcome.skipped.len()
    );
    Ok(outcome)
}

fn process_document(doc: &SourceDocument, registry: &MalformedRegistry) -> DocumentResult {
    let skip = |reason| {
        DocumentResult::Skipped(SkippedFile {
            file_name: doc.file_name.clone(),
            reason,
        })
    };

    // dated from the original name, before any rendering
    let date = match doc.inferred_date() {
        Ok(date) => date,
        Err(e) => {
            warn!("Date not found in file: {} ({})", doc.file_name, e);
            return skip(SkipReason::DateNotFound);
        }
    };

    info!(
        file = %doc.file_name,
        %date,
        week = doc.week_label().unwrap_or("-"),
        "Processing {}",
        doc.format.label()
    );

    let pages = match doc.load_pages() {
        Ok(pages) => pages,
        Err(e) => {
            error!("Skipping {}: {}", doc.file_name, e);
            return skip(SkipReason::Unreadable);
        }
    };

    let report = scan_pages(&pages, date, registry.trailing_tokens(&doc.file_name));
    info!(
        file = %doc.file_name,
        rows = report.rows.len(),
        rejected = report.rejected,
        "Document scanned"
    );
    DocumentResult::Scanned(report)
}
