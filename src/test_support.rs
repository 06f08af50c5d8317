use std::path::Path;

use rust_xlsxwriter::Workbook;

const NAMES: [&str; 4] = [
    "Viktor AXELSEN",
    "LOW Pit Seng",
    "Anthony Sinisuka GINTING",
    "LEE Zii Jia",
];

pub struct RankingLine {
    pub rank: u32,
    pub member_id: u32,
    pub name: &'static str,
    pub country: &'static str,
    pub points: f64,
    pub tournaments: f64,
}

/// `count` rows ranked 1.., names cycling through a few real formats.
pub fn ranking_lines(count: u32) -> Vec<RankingLine> {
    (1..=count)
        .map(|rank| RankingLine {
            rank,
            member_id: 50_000 + rank,
            name: NAMES[(rank as usize - 1) % NAMES.len()],
            country: "AUS",
            points: 100_000.0 - f64::from(rank) * 100.0,
            tournaments: 17.0,
        })
        .collect()
}

/// Ranking workbook in the layout of the source files. `extra_columns` adds
/// header-only columns whose cells stay empty in every row.
pub fn write_rankings_xlsx(path: &Path, lines: &[RankingLine], extra_columns: u16) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let header = ["Rank", "Member ID", "Player", "Gender", "Country", "Points", "Tournaments"];
    for (col, name) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    for extra in 0..extra_columns {
        let col = header.len() as u16 + extra;
        sheet.write_string(0, col, format!("Unnamed: {}", col)).unwrap();
    }

    for (i, line) in lines.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_number(row, 0, line.rank).unwrap();
        sheet.write_number(row, 1, line.member_id).unwrap();
        sheet.write_string(row, 2, line.name).unwrap();
        sheet.write_string(row, 3, "M").unwrap();
        sheet.write_string(row, 4, line.country).unwrap();
        sheet.write_number(row, 5, line.points).unwrap();
        sheet.write_number(row, 6, line.tournaments).unwrap();
    }

    workbook.save(path).unwrap();
}
