//! Logger setup utilities.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise scopes `default_level` to `name`.
/// Call once from the embedding binary or test harness.
///
/// # Arguments
///
/// * `name` - Target name for the default filter (usually the binary name)
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. "debug")
pub fn setup_logger(name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{name}={default_level}")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
