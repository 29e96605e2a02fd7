//! Tracing subscriber setup for the command-line driver

use tracing_subscriber::EnvFilter;

use crate::io::configuration::DEFAULT_LOG_FILTER;

/// Log filter for a `-v` count: warn, info, debug, then trace
pub const fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_FILTER,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr fmt subscriber
///
/// `RUST_LOG` wins over the verbosity-derived filter when set. Returns false
/// if a global subscriber was already installed.
pub fn init(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
