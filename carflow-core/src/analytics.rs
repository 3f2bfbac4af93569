//! Traffic analytics engine.
//!
//! [`TrafficAnalyzer`] owns exactly one time-ordered dataset at a time
//! and answers four queries over it: total volume, per-day totals,
//! top-K busiest intervals, and the least-traffic contiguous window.
//! All queries are read-only; the canonical timestamp-ordered sequence
//! is never reordered after construction. Loading a new dataset
//! replaces the old one wholesale, so callers never observe a
//! half-updated state.

use crate::types::{DailyTotal, TrafficRecord};
use chrono::Duration;

/// Sampling cadence the input data is expected to follow.
pub const SAMPLING_STEP_MINUTES: i64 = 30;

/// Number of consecutive samples in the least-traffic window (1.5 hours
/// at the 30-minute cadence).
pub const WINDOW_RECORDS: usize = 3;

/// In-memory analytics over a time-ordered sequence of traffic records.
#[derive(Debug, Default, Clone)]
pub struct TrafficAnalyzer {
    /// Canonical sequence, non-decreasing by timestamp. Ties keep input
    /// order (stable sort). The contiguity scan in
    /// [`Self::least_traffic_window`] depends on this ordering.
    records: Vec<TrafficRecord>,
}

impl TrafficAnalyzer {
    /// Build an analyzer over `records`, sorting them by timestamp.
    pub fn from_records(mut records: Vec<TrafficRecord>) -> Self {
        records.sort_by_key(|r| r.timestamp);
        Self { records }
    }

    /// Replace the current dataset with `records`.
    ///
    /// The previous dataset is discarded in one step. Parsing happens
    /// before this call (see [`crate::ingest`]), so a failed load never
    /// reaches the analyzer and the prior dataset stays intact.
    pub fn load(&mut self, records: Vec<TrafficRecord>) {
        *self = Self::from_records(records);
    }

    /// The timestamp-ordered dataset.
    pub fn records(&self) -> &[TrafficRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total vehicles across the whole dataset. Zero when empty.
    pub fn total_volume(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.count)).sum()
    }

    /// Vehicles per calendar day, in first-seen (chronological) order.
    ///
    /// A day whose samples are all zero still appears, with total 0.
    pub fn volume_per_day(&self) -> Vec<DailyTotal> {
        // Records are sorted by timestamp, so each day's samples are
        // adjacent and first-seen order is chronological order.
        let mut days: Vec<DailyTotal> = Vec::new();
        for record in &self.records {
            match days.last_mut() {
                Some(day) if day.date == record.date() => {
                    day.total += u64::from(record.count);
                }
                _ => days.push(DailyTotal {
                    date: record.date(),
                    total: u64::from(record.count),
                }),
            }
        }
        days
    }

    /// Up to `n` records with the highest counts, descending.
    ///
    /// Sorts an independent copy: reordering the canonical sequence by
    /// count would corrupt the contiguity scan. The sort is stable, so
    /// records with equal counts keep their chronological relative
    /// order. `n = 0` returns an empty vector; `n` past the dataset
    /// size returns every record.
    pub fn top_intervals(&self, n: usize) -> Vec<TrafficRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.truncate(n);
        sorted
    }

    /// The earliest 1.5-hour run of [`WINDOW_RECORDS`] contiguous
    /// samples with the smallest combined count.
    ///
    /// Contiguity means consecutive timestamps exactly
    /// [`SAMPLING_STEP_MINUTES`] apart; only the timestamp delta
    /// matters, so runs crossing midnight qualify. Windows containing a
    /// sampling gap are skipped, not penalized. On tied sums the
    /// earliest start wins.
    ///
    /// Degenerate cases: fewer than [`WINDOW_RECORDS`] records returns
    /// the whole dataset unchanged; a dataset with no contiguous run at
    /// all returns an empty vector.
    pub fn least_traffic_window(&self) -> Vec<TrafficRecord> {
        if self.records.len() < WINDOW_RECORDS {
            return self.records.clone();
        }

        let mut best: Option<(usize, u64)> = None;
        for start in 0..=self.records.len() - WINDOW_RECORDS {
            if !self.is_contiguous_run(start) {
                continue;
            }
            let window = &self.records[start..start + WINDOW_RECORDS];
            let sum: u64 = window.iter().map(|r| u64::from(r.count)).sum();
            // Strict less-than keeps the earliest start on ties
            if best.map_or(true, |(_, min_sum)| sum < min_sum) {
                best = Some((start, sum));
            }
        }

        match best {
            Some((start, _)) => self.records[start..start + WINDOW_RECORDS].to_vec(),
            None => Vec::new(),
        }
    }

    /// Whether the [`WINDOW_RECORDS`] samples starting at `start` sit
    /// exactly one sampling step apart.
    fn is_contiguous_run(&self, start: usize) -> bool {
        let step = Duration::minutes(SAMPLING_STEP_MINUTES);
        self.records[start..start + WINDOW_RECORDS]
            .windows(2)
            .all(|pair| pair[1].timestamp == pair[0].timestamp + step)
    }
}
