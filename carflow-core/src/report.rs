//! Report rendering.
//!
//! Pure string building over analyzer output; printing and exit codes
//! belong to the binary.

use crate::analytics::TrafficAnalyzer;
use crate::error::Result;
use crate::types::{DailyTotal, TrafficRecord};
use serde::Serialize;
use std::fmt::Write;

/// All four statistics for one dataset, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct TrafficReport {
    pub total_cars: u64,
    pub cars_per_day: Vec<DailyTotal>,
    pub top_intervals: Vec<TrafficRecord>,
    pub least_traffic_window: Vec<TrafficRecord>,
}

/// Run the four queries against `analyzer`.
pub fn build_report(analyzer: &TrafficAnalyzer, top_n: usize) -> TrafficReport {
    TrafficReport {
        total_cars: analyzer.total_volume(),
        cars_per_day: analyzer.volume_per_day(),
        top_intervals: analyzer.top_intervals(top_n),
        least_traffic_window: analyzer.least_traffic_window(),
    }
}

/// Render the report as the four-section text layout.
pub fn render_text(report: &TrafficReport) -> String {
    let mut out = String::new();

    // Infallible: writing to a String cannot fail
    let _ = writeln!(out, "Total cars: {}", report.total_cars);
    let _ = writeln!(out);

    let _ = writeln!(out, "Cars per day:");
    for day in &report.cars_per_day {
        let _ = writeln!(out, "{} {}", day.date, day.total);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Top {} half hours:", report.top_intervals.len());
    for record in &report.top_intervals {
        let _ = writeln!(out, "{record}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "1.5 hour period with least cars:");
    if report.least_traffic_window.is_empty() && !report.cars_per_day.is_empty() {
        let _ = writeln!(out, "no contiguous 1.5 hour period found");
    } else {
        for record in &report.least_traffic_window {
            let _ = writeln!(out, "{record}");
        }
    }

    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &TrafficReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_lines;

    fn sample_analyzer() -> TrafficAnalyzer {
        let records = parse_lines([
            "2021-12-01T05:00:00 5",
            "2021-12-01T05:30:00 12",
            "2021-12-01T06:00:00 14",
        ])
        .unwrap();
        TrafficAnalyzer::from_records(records)
    }

    #[test]
    fn test_text_report_sections() {
        let report = build_report(&sample_analyzer(), 3);
        let text = render_text(&report);

        assert!(text.starts_with("Total cars: 31\n"));
        assert!(text.contains("Cars per day:\n2021-12-01 31\n"));
        assert!(text.contains("Top 3 half hours:\n2021-12-01T06:00:00 14\n"));
        assert!(text.contains(
            "1.5 hour period with least cars:\n2021-12-01T05:00:00 5\n"
        ));
    }

    #[test]
    fn test_text_report_empty_dataset() {
        let report = build_report(&TrafficAnalyzer::default(), 3);
        let text = render_text(&report);
        assert!(text.starts_with("Total cars: 0\n"));
        // An empty dataset is not the "no window found" case
        assert!(!text.contains("no contiguous"));
    }

    #[test]
    fn test_text_report_no_contiguous_window() {
        let records = parse_lines([
            "2021-12-01T05:00:00 1",
            "2021-12-01T07:00:00 2",
            "2021-12-01T09:00:00 3",
        ])
        .unwrap();
        let analyzer = TrafficAnalyzer::from_records(records);
        let text = render_text(&build_report(&analyzer, 3));
        assert!(text.contains("no contiguous 1.5 hour period found"));
    }

    #[test]
    fn test_json_report_shape() {
        let report = build_report(&sample_analyzer(), 1);
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_cars"], 31);
        assert_eq!(value["cars_per_day"][0]["date"], "2021-12-01");
        assert_eq!(value["top_intervals"].as_array().unwrap().len(), 1);
        assert_eq!(value["top_intervals"][0]["count"], 14);
        assert_eq!(
            value["least_traffic_window"].as_array().unwrap().len(),
            3
        );
    }
}
