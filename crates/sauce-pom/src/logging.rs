//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; binaries and test suites decide
//! where they go. Every initializer here is safe to call more than once: only
//! the first call installs a subscriber.

use tracing_subscriber::EnvFilter;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Filter from `RUST_LOG`, falling back to `default_level`
#[must_use]
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install a text subscriber at `info` unless `RUST_LOG` says otherwise.
///
/// Returns `false` if a subscriber was already installed.
pub fn init() -> bool {
    init_with("info", LogFormat::Text)
}

/// Install a global subscriber writing to stderr
pub fn init_with(default_level: &str, format: LogFormat) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Text => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    }
}

/// Install a subscriber that routes through the test harness' captured output
pub fn init_for_tests() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("debug"))
        .with_test_writer()
        .try_init()
        .is_ok()
}
