mod batch;
mod config;
mod consts;
mod error;
mod parser;
mod pdf;
mod render;
mod source;
mod table;
mod writer;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::source::SourceDocument;

#[derive(Parser)]
#[command(name = "ranking_compiler", about = "Compile quarterly ranking documents into one spreadsheet")]
struct Cli {
    /// Config file (TOML, JSON or YAML). Defaults to ./rankings.* when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every ranking document and write the combined table (default)
    Run {
        /// Folder of ranking PDFs and spreadsheets
        #[arg(short, long)]
        input_dir: Option<PathBuf>,
        /// Output workbook (.xlsx) or .csv file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the page text and parsed rows of a single document
    Inspect {
        file: PathBuf,
        /// Max lines to print per page
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Run {
        input_dir: None,
        output: None,
    });

    let result = match command {
        Commands::Run { input_dir, output } => {
            let run = settings.resolve(input_dir, output)?;
            println!("Compiling rankings from {}", run.input_dir.display());

            let outcome = batch::run_batch(&run.input_dir, &run.registry)?;
            outcome.print();

            let records = table::aggregate(outcome.rows);
            writer::write_table(&run.output, &records)?;
            println!("Top 200 rankings ({} rows) saved to {}", records.len(), run.output.display());

            report_skipped(&outcome.skipped);
            Ok(())
        }
        Commands::Inspect { file, limit } => inspect(&settings, file, limit),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn report_skipped(skipped: &[batch::SkippedFile]) {
    if skipped.is_empty() {
        println!("\nNo files were skipped.");
        return;
    }
    println!("\nFiles Skipped:");
    for s in skipped {
        println!("{} ({})", s.file_name, s.reason);
    }
}

fn inspect(settings: &Settings, file: PathBuf, limit: usize) -> anyhow::Result<()> {
    let doc = SourceDocument::from_path(&file)
        .with_context(|| format!("{} is not a PDF or spreadsheet file", file.display()))?;

    let date = doc.inferred_date();
    match &date {
        Ok(d) => println!("Date:    {}", d),
        Err(e) => println!("Date:    none ({})", e),
    }
    println!("Week:    {}", doc.week_label().unwrap_or("-"));
    println!("Format:  {}", doc.format.label());

    let strip = settings.registry().trailing_tokens(&doc.file_name);
    if strip > 0 {
        println!("Strip:   {} trailing tokens per row", strip);
    }

    let pages = doc.load_pages()?;
    for (i, page) in pages.iter().enumerate() {
        println!("\n--- page {} of {} ---", i + 1, pages.len());
        for line in page.lines().take(limit) {
            println!("{}", line);
        }
    }

    let Ok(date) = date else {
        println!("\nFile would be skipped: no date in its name.");
        return Ok(());
    };
    let report = parser::scan_pages(&pages, date, strip);
    println!(
        "\n{} rows accepted, {} rejected",
        report.rows.len(),
        report.rejected
    );
    for row in report.rows.iter().take(limit) {
        let f = &row.fields;
        println!(
            "{:>4} | {:<8} | {:<28} | {:<2} | {:<4} | {:>8} | {:>3}",
            f.ranking,
            f.player_id,
            truncate(&f.player_name, 28),
            f.gender,
            f.country,
            f.points_raw,
            f.tournaments_raw
        );
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration(std::time::Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(std::time::Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(std::time::Duration::from_secs(3725)), "1h 2m 5s");
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate("LOW Pit Seng", 28), "LOW Pit Seng");
        assert_eq!(truncate("Anthony Sinisuka GINTING", 7), "Anthony...");
    }

    #[test]
    fn cli_defaults_to_run() {
        let cli = Cli::try_parse_from(["ranking_compiler"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["ranking_compiler", "run", "-i", "data", "-o", "out.csv"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Run { input_dir: Some(_), output: Some(_) })));
    }
}
