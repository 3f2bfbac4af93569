//! Logging infrastructure for carflow
//!
//! Logs go to stderr so the report on stdout stays machine-readable.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// The level comes from the config, overridable via `RUST_LOG`.
/// Safe to call more than once; later calls are no-ops.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Initialize logging for tests (captured per-test output)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
