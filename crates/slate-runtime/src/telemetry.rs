#![forbid(unsafe_code)]

//! Log output for hosts that have no subscriber of their own.
//!
//! [`init_tracing`] installs a `tracing-subscriber` fmt subscriber writing
//! to stderr, filtered by the `SLATE_LOG` environment variable using the
//! usual `EnvFilter` syntax (`SLATE_LOG=slate_widgets=debug,info`). Without
//! the variable only `info` and above are shown.
//!
//! An existing global subscriber is never replaced.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SLATE_LOG";

/// Filter used when `SLATE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Filter from `SLATE_LOG`, or [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Returns `false` if another subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused() {
        // The first call may lose to another test's subscriber; the second
        // always finds one in place.
        init_tracing();
        assert!(!init_tracing());
    }
}
