//! Logging bootstrap for applications and tests
//!
//! polycodec emits `tracing` events (scope registration at `debug`, identifier
//! resolution at `trace`) but never installs a subscriber on its own.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber filtered by `RUST_LOG`
///
/// Falls back to `info` when `RUST_LOG` is unset or invalid. Calling this
/// more than once is harmless; the first subscriber stays installed.
pub fn init_logging() -> bool {
    init_logging_with_filter(DEFAULT_FILTER)
}

/// Install a global fmt subscriber with a fallback filter directive
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns `true` if this
/// call installed the subscriber.
pub fn init_logging_with_filter(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
