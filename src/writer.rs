use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet};

use crate::table::{RankingRecord, COLUMNS};

const DATE_FORMAT: &str = "yyyy-mm-dd";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Csv,
}

impl OutputFormat {
    /// `.csv` writes CSV; anything else is written as an xlsx workbook.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Xlsx,
        }
    }
}

pub fn write_table(path: &Path, records: &[RankingRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    let written = match OutputFormat::from_path(path) {
        OutputFormat::Xlsx => write_xlsx(path, records),
        OutputFormat::Csv => write_csv(path, records),
    };
    written.with_context(|| format!("Failed to write {}", path.display()))
}

fn write_xlsx(path: &Path, records: &[RankingRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let date_format = Format::new().set_num_format(DATE_FORMAT);

    let sheet = workbook.add_worksheet();
    for (col, name) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (i, r) in records.iter().enumerate() {
        let row = i as u32 + 1;
        let date = ExcelDateTime::from_ymd(r.date.year() as u16, r.date.month() as u8, r.date.day() as u8)?;
        sheet.write_with_format(row, 0, &date, &date_format)?;
        sheet.write_number(row, 1, r.ranking)?;
        sheet.write_string(row, 2, &r.player_id)?;
        sheet.write_string(row, 3, &r.player_name)?;
        sheet.write_string(row, 4, &r.gender)?;
        sheet.write_string(row, 5, &r.country)?;
        write_optional(sheet, row, 6, r.points)?;
        write_optional(sheet, row, 7, r.tournaments_played)?;
        write_optional(sheet, row, 8, r.points_per_tournament)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Missing values stay blank cells.
fn write_optional(sheet: &mut Worksheet, row: u32, col: u16, value: Option<f64>) -> Result<()> {
    if let Some(v) = value {
        sheet.write_number(row, col, v)?;
    }
    Ok(())
}

fn write_csv(path: &Path, records: &[RankingRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;
    for r in records {
        writer.write_record([
            r.date.format("%Y-%m-%d").to_string(),
            r.ranking.to_string(),
            r.player_id.clone(),
            r.player_name.clone(),
            r.gender.clone(),
            r.country.clone(),
            format_optional(r.points),
            format_optional(r.tournaments_played),
            format_optional(r.points_per_tournament),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
