//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing with the default `info` filter.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default_filter("info");
}

/// Initialize tracing with an explicit default filter, still overridable
/// via `RUST_LOG`.
///
/// Logs go to stderr in compact form so they never interleave with
/// whatever the presentation layer writes to stdout.
pub fn init_with_default_filter(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false)
        .try_init();
}
