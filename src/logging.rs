//! Diagnostic logging setup.
//!
//! Logs go to stderr so that stdout stays with the wrapped command. The
//! filter is read from `JOPPIN_LOG` (same syntax as `RUST_LOG`) and defaults
//! to `info`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "JOPPIN_LOG";

const DEFAULT_FILTER: &str = "info";

/// Build the log filter from `JOPPIN_LOG`, falling back to `info`.
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
