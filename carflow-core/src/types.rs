//! Domain types for traffic-count analytics.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// Timestamp format used on input lines and in rendered output.
///
/// ISO-8601 local date-time with seconds, no timezone. The source data
/// carries no timezone semantics; timestamps are treated as naive local
/// time throughout.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One timestamped vehicle-count sample.
///
/// Immutable once constructed; records have no identity beyond value
/// equality. A count of zero is a real observation, not a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrafficRecord {
    /// Sampling instant, minute precision, naive local time
    pub timestamp: NaiveDateTime,
    /// Vehicles observed in this sampling interval
    pub count: u32,
}

impl TrafficRecord {
    pub fn new(timestamp: NaiveDateTime, count: u32) -> Self {
        Self { timestamp, count }
    }

    /// Calendar date of this sample, used as the per-day aggregation key.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

impl fmt::Display for TrafficRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.count
        )
    }
}

/// Summed counts for one calendar date.
///
/// Produced by [`crate::analytics::TrafficAnalyzer::volume_per_day`] in
/// first-seen date order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: u64,
}
