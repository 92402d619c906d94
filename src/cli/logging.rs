//! Logging setup for the binary

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "BOUGH_LOG";

/// Build the log filter.
///
/// `BOUGH_LOG` wins when set and valid; otherwise the level follows the
/// number of `-v` flags: `warn`, `info`, `debug`, then `trace`.
pub fn build_env_filter(verbosity: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }
    EnvFilter::new(level_for(verbosity))
}

pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber; stdout carries command output.
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging(verbosity: u8) {
    let _ = fmt()
        .with_env_filter(build_env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
