use chrono::NaiveDate;
use tracing::debug;

use crate::parser::RankingRow;

pub const COLUMNS: [&str; 9] = [
    "Date",
    "Ranking",
    "BWF ID",
    "Player Name",
    "Gender",
    "Country",
    "Points",
    "Tournaments Played",
    "Points Per Tournament",
];

/// One output row. `None` marks a value that failed numeric coercion or a
/// ratio with no valid divisor.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRecord {
    pub date: NaiveDate,
    pub ranking: u32,
    pub player_id: String,
    pub player_name: String,
    pub gender: String,
    pub country: String,
    pub points: Option<f64>,
    pub tournaments_played: Option<f64>,
    pub points_per_tournament: Option<f64>,
}

impl From<RankingRow> for RankingRecord {
    fn from(row: RankingRow) -> Self {
        let f = row.fields;
        let points = coerce_numeric(&f.points_raw);
        let tournaments_played = coerce_numeric(&f.tournaments_raw);
        if points.is_none() || tournaments_played.is_none() {
            debug!(
                ranking = f.ranking,
                points = %f.points_raw,
                tournaments = %f.tournaments_raw,
                "Non-numeric value kept as missing"
            );
        }

        Self {
            date: row.date,
            ranking: f.ranking,
            player_id: f.player_id,
            player_name: f.player_name,
            gender: f.gender,
            country: f.country,
            points,
            tournaments_played,
            points_per_tournament: points_per_tournament(points, tournaments_played),
        }
    }
}

/// Best-effort number; `nan`, `inf` and text all become missing.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn points_per_tournament(points: Option<f64>, tournaments: Option<f64>) -> Option<f64> {
    match (points, tournaments) {
        (Some(p), Some(t)) if t != 0.0 => Some(p / t).filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Concatenate rows from all documents in batch order.
pub fn aggregate(rows: Vec<RankingRow>) -> Vec<RankingRecord> {
    rows.into_iter().map(RankingRecord::from).collect()
}
