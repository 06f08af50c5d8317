pub mod date;
pub mod registry;
pub mod row;
pub mod scan;

use chrono::NaiveDate;

pub use registry::MalformedRegistry;
pub use row::RowFields;
pub use scan::{scan_pages, ScanReport};

/// A tokenized row stamped with its source document's date.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    pub date: NaiveDate,
    pub fields: RowFields,
}
