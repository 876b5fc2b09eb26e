//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout stays a clean stream of display values.
//! `RUST_LOG` overrides the level chosen with `-v` / `-q`.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Builds the filter for a verbosity level, preferring `RUST_LOG`
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber
pub fn init(verbosity: Verbosity, use_color: bool) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .with_target(verbosity == Verbosity::Debug)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
