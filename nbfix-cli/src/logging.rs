//! Logging setup for the binaries
//!
//! Logs go to stderr so stdout only ever carries the messages users and scripts read.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `NBFIX_LOG=debug`
pub const LOG_ENV: &str = "NBFIX_LOG";

/// Install the global subscriber.
///
/// `NBFIX_LOG` wins over `default_filter`. An invalid directive falls back to `warn`.
/// Calling this more than once is harmless: later calls keep the first subscriber.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
