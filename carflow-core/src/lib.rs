//! # carflow-core
//!
//! Core library for carflow - traffic-count analytics.
//!
//! This library provides:
//! - Domain types for timestamped vehicle-count samples
//! - Line parsing and file ingestion
//! - The analytics engine: total volume, per-day totals, top-K busiest
//!   intervals, and the least-traffic contiguous window
//! - Report rendering (text and JSON)
//! - Configuration and logging infrastructure
//!
//! ## Example
//!
//! ```rust
//! use carflow_core::analytics::TrafficAnalyzer;
//! use carflow_core::ingest::parse_lines;
//!
//! let records = parse_lines([
//!     "2021-12-01T05:00:00 5",
//!     "2021-12-01T05:30:00 12",
//!     "2021-12-01T06:00:00 14",
//! ]).expect("valid input");
//!
//! let analyzer = TrafficAnalyzer::from_records(records);
//! assert_eq!(analyzer.total_volume(), 31);
//! ```

// Re-export commonly used items at the crate root
pub use analytics::TrafficAnalyzer;
pub use config::Config;
pub use error::{Error, Result};
pub use types::{DailyTotal, TrafficRecord};

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod report;
pub mod types;
