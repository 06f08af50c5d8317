use crate::consts::{MIN_ROW_TOKENS, TRAILING_FIELDS};
use crate::error::RowParseError;

/// One tokenized ranking line. Points and tournaments stay raw until aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFields {
    pub ranking: u32,
    pub player_id: String,
    pub player_name: String,
    pub gender: String,
    pub country: String,
    pub points_raw: String,
    pub tournaments_raw: String,
}

/// Split a ranking line into fields.
///
/// Names render as one to four words, so only the head (ranking, id) and the
/// tail (gender, country, points, tournaments) are positional; whatever sits
/// between them is the name. `strip_trailing` drops placeholder tokens some
/// documents append after the real tail.
pub fn tokenize_row(line: &str, strip_trailing: usize) -> Result<RowFields, RowParseError> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    tokens.truncate(tokens.len().saturating_sub(strip_trailing));

    if tokens.len() < MIN_ROW_TOKENS {
        return Err(RowParseError::TooFewTokens {
            found: tokens.len(),
            required: MIN_ROW_TOKENS,
        });
    }

    let ranking = tokens[0]
        .parse::<u32>()
        .map_err(|_| RowParseError::InvalidRanking(tokens[0].to_string()))?;

    let tail = tokens.len() - TRAILING_FIELDS;

    Ok(RowFields {
        ranking,
        player_id: tokens[1].to_string(),
        player_name: tokens[2..tail].join(" "),
        gender: tokens[tail].to_string(),
        country: tokens[tail + 1].to_string(),
        points_raw: tokens[tail + 2].to_string(),
        tournaments_raw: tokens[tail + 3].to_string(),
    })
}
