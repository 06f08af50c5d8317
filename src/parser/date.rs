use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::DateExtractionError;

static WEEK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^()]+)\)").unwrap());

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date of a ranking document, taken from the second whitespace-separated
/// token of its file name: `"WR 2023-01-03 (Week-01).pdf"` → 2023-01-03.
pub fn extract_date(file_name: &str) -> Result<NaiveDate, DateExtractionError> {
    let token = file_name
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| DateExtractionError::MissingToken(file_name.to_string()))?;

    NaiveDate::parse_from_str(token, DATE_FORMAT).map_err(|source| {
        DateExtractionError::InvalidDate {
            file_name: file_name.to_string(),
            token: token.to_string(),
            source,
        }
    })
}

/// Parenthesised week label, e.g. `Week 40`. Diagnostic only.
pub fn week_label(file_name: &str) -> Option<&str> {
    WEEK_RE
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_name() {
        let date = extract_date("WR 2023-01-03 (Week-01).pdf").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 3).unwrap());
    }

    #[test]
    fn spreadsheet_name() {
        let date = extract_date("WR 2019-10-01 (Week 40).xlsx").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 10, 1).unwrap());
    }

    #[test]
    fn missing_token() {
        let err = extract_date("rankings.pdf").unwrap_err();
        assert!(matches!(err, DateExtractionError::MissingToken(name) if name == "rankings.pdf"));
    }

    #[test]
    fn token_not_a_date() {
        let err = extract_date("WR latest (Week-01).pdf").unwrap_err();
        assert!(matches!(err, DateExtractionError::InvalidDate { token, .. } if token == "latest"));
    }

    #[test]
    fn impossible_calendar_date() {
        assert!(extract_date("WR 2023-02-30 (Week-09).pdf").is_err());
    }

    #[test]
    fn date_glued_to_suffix() {
        assert!(extract_date("WR 2023-01-03(Week-01).pdf").is_err());
    }

    #[test]
    fn week_labels() {
        assert_eq!(week_label("WR 2019-10-01 (Week 40).xlsx"), Some("Week 40"));
        assert_eq!(week_label("WR 2023-01-03 (Week-01).pdf"), Some("Week-01"));
        assert_eq!(week_label("WR 2023-01-03.pdf"), None);
    }
}
