//! carflow - traffic counter analytics
//!
//! Reads a traffic log (one `<timestamp> <count>` pair per line),
//! computes summary statistics, and prints a report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use carflow_core::analytics::TrafficAnalyzer;
use carflow_core::report::{build_report, render_json, render_text};
use carflow_core::{ingest, Config};
use clap::Parser;

#[derive(Parser)]
#[command(name = "carflow")]
#[command(about = "Summarize a traffic counter log")]
#[command(version)]
struct Args {
    /// Path to the traffic log file
    file: PathBuf,

    /// How many busiest half-hour intervals to show
    /// (defaults to the configured value)
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Output format: text (default) or json
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::load().context("failed to load configuration")?;

    // Initialize logging (stderr; stdout carries the report)
    carflow_core::logging::init(&config.logging);

    let top_n = args.top.unwrap_or(config.report.top_intervals);

    tracing::info!(file = %args.file.display(), top_n, "Loading traffic log");

    // A load failure exits non-zero here; an empty file is a valid
    // dataset and still produces a (zeroed) report.
    let records = ingest::read_records(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let analyzer = TrafficAnalyzer::from_records(records);
    let report = build_report(&analyzer, top_n);

    match args.format.as_str() {
        "json" => println!("{}", render_json(&report).context("failed to render JSON")?),
        "text" => print!("{}", render_text(&report)),
        other => anyhow::bail!("unknown output format '{}' (expected text or json)", other),
    }

    Ok(())
}
