//! Log subscriber installation for the command-line tool
//!
//! The library only emits `tracing` events; whoever embeds it decides where they
//! go. The binary sends them to stderr so stdout stays free for JSON output.

use tracing_subscriber::EnvFilter;

use crate::io::error::{AlgorithmError, Result};

/// Install a global `fmt` subscriber
///
/// `RUST_LOG` takes precedence over `default_filter` when set.
///
/// # Errors
///
/// Returns `Logging` if the filter does not parse or a global subscriber is
/// already installed
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|e| AlgorithmError::Logging {
            reason: format!("invalid filter '{default_filter}': {e}"),
        })?,
    };

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AlgorithmError::Logging {
            reason: e.to_string(),
        })
}
