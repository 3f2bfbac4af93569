//! Line parsing and file ingestion.
//!
//! Input is one record per line: an ISO-8601 local date-time and a
//! non-negative integer count, separated by arbitrary whitespace.
//! Blank and whitespace-only lines are skipped. Any other malformed
//! line fails the whole load with [`Error::Format`] — skipping bad
//! lines would silently understate every downstream total.

use crate::error::{Error, Result};
use crate::types::{TrafficRecord, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a single input line.
///
/// Returns `Ok(None)` for blank/whitespace-only lines. `line_no` is
/// 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<TrafficRecord>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let format_err = |message: String| Error::Format {
        line_no,
        line: line.to_string(),
        message,
    };

    let mut tokens = trimmed.split_whitespace();
    let (ts_token, count_token) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(ts), Some(count), None) => (ts, count),
        _ => {
            return Err(format_err(
                "expected exactly two whitespace-separated fields".to_string(),
            ))
        }
    };

    let timestamp = NaiveDateTime::parse_from_str(ts_token, TIMESTAMP_FORMAT)
        .map_err(|e| format_err(format!("invalid timestamp {:?}: {}", ts_token, e)))?;

    let count: u32 = count_token
        .parse()
        .map_err(|e| format_err(format!("invalid count {:?}: {}", count_token, e)))?;

    Ok(Some(TrafficRecord::new(timestamp, count)))
}

/// Parse a sequence of raw lines into records.
///
/// All-or-nothing: the first malformed line aborts the load and no
/// records are returned. The output preserves input order; sorting is
/// the analyzer's job.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<TrafficRecord>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        if let Some(record) = parse_line(line.as_ref(), idx + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Read and parse a traffic log file.
pub fn read_records(path: &Path) -> Result<Vec<TrafficRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(record) = parse_line(&line, idx + 1)? {
            records.push(record);
        }
    }

    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        "Parsed traffic log"
    );

    Ok(records)
}
