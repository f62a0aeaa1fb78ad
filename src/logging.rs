//! Logging setup
//!
//! Diagnostics go to stderr so they never mix with command output. The level
//! comes from `RUST_LOG` when set, then `--verbose`, then the configured
//! `log_level`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Level used when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter for the given flags
pub fn build_filter(verbose: bool, configured: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if verbose { "debug" } else { configured };
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber
///
/// Does nothing when a subscriber is already installed.
pub fn init(verbose: bool, configured: &str) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(build_filter(verbose, configured));

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_configured_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        assert_eq!(build_filter(true, "warn").to_string(), "debug");
        assert_eq!(build_filter(false, "info").to_string(), "info");
    }
}
