//! Diagnostic logging to stderr.
//!
//! Filtered by `LOOPY_LOG` (`EnvFilter` syntax, e.g. `loopy=debug`).
//! Defaults to `warn` so command output on stdout stays clean.

use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LOOPY_LOG";

/// Install the global subscriber. Call once, before anything logs.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
