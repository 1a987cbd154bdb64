//! Logging initialization
//!
//! Filter comes from $RUST_LOG, defaulting to `warn` so the demo output
//! stays readable while swallowed failures still show up on stderr.

use std::sync::OnceLock;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

static LOGGING_INIT: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Install the global `tracing` subscriber
///
/// Repeated calls return the outcome of the first one.
pub fn init_logging() -> Result<()> {
    LOGGING_INIT
        .get_or_init(|| {
            tracing_subscriber::fmt()
                .with_env_filter(default_env_filter())
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| e.to_string())
        })
        .clone()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}

fn default_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}
