use std::io;

use thiserror::Error;

/// The document's file name carries no usable `YYYY-MM-DD` token.
#[derive(Debug, Error)]
pub enum DateExtractionError {
    #[error("no date token in file name '{0}'")]
    MissingToken(String),
    #[error("'{token}' in file name '{file_name}' is not a YYYY-MM-DD date: {source}")]
    InvalidDate {
        file_name: String,
        token: String,
        source: chrono::ParseError,
    },
}

/// A row candidate that could not be turned into a ranking row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowParseError {
    #[error("expected at least {required} tokens, found {found}")]
    TooFewTokens { found: usize, required: usize },
    #[error("ranking '{0}' is not an integer")]
    InvalidRanking(String),
}

/// The document exists but its pages could not be read.
#[derive(Debug, Error)]
pub enum DocumentLoadError {
    #[error("failed to read '{path}': {source}")]
    Io { path: String, source: io::Error },
    #[error("failed to extract text from PDF '{path}': {reason}")]
    Pdf { path: String, reason: String },
    #[error("failed to open spreadsheet '{path}': {source}")]
    Spreadsheet {
        path: String,
        source: calamine::Error,
    },
    #[error("spreadsheet '{0}' has no worksheets")]
    EmptyWorkbook(String),
}
