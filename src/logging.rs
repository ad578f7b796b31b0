//! Structured logging setup using `tracing-subscriber`.
//!
//! Console-only, always on stderr so standard output carries nothing but the
//! lines a phone emits.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set, otherwise `fallback`.
///
/// An unparsable `fallback` degrades to `warn`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialise logging for the CLI.
///
/// Returns `false` if a global subscriber was already installed, in which case
/// the existing one stays in place.
pub fn init_cli(fallback: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
