//! Logging setup for the swatch binary.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter, e.g. `SWATCH_LOG=debug`.
pub const LOG_ENV: &str = "SWATCH_LOG";

/// Build the filter from `SWATCH_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(format!("swatch={default_level}")))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a stderr subscriber. Stdout stays free for command output.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init_logging(default_level: &str) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(layer)
        .try_init();
}
