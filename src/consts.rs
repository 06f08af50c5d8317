/// Only the top tier of each ranking list is kept.
pub const MAX_ROWS_PER_DOCUMENT: usize = 200;

/// ranking + player id + gender, country, points, tournaments.
pub const MIN_ROW_TOKENS: usize = 6;
pub const TRAILING_FIELDS: usize = 4;

/// Rows per rendered spreadsheet page; the header is repeated on each page.
pub const ROWS_PER_PAGE: usize = 50;

/// How an empty spreadsheet cell renders into page text.
pub const MISSING_CELL: &str = "nan";

pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];
pub const PAGE_DOCUMENT_EXTENSIONS: &[&str] = &["pdf"];

pub const DEFAULT_OUTPUT: &str = "rankings_top_200.xlsx";
pub const CONFIG_BASENAME: &str = "rankings";
pub const ENV_PREFIX: &str = "RANKINGS";

/// Documents whose rendered rows carry extra trailing placeholder tokens,
/// keyed by original file name.
pub const KNOWN_MALFORMED: &[(&str, usize)] = &[("WR 2019-10-01 (Week 40).xlsx", 4)];
