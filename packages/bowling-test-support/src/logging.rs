//! Quiet, capture-friendly tracing setup for test binaries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_TEST_FILTER: &str = "warn";

/// Resolve the filter: `TEST_LOG`, then `RUST_LOG`, then `warn`.
fn resolve_filter() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .iter()
        .find_map(|key| std::env::var(key).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_TEST_FILTER))
}

/// Install the test subscriber once per process.
///
/// Safe to call from every test; only the first call installs anything, and
/// an already-installed global subscriber is left alone. Events go through
/// the test writer so `cargo test` captures them per test.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(resolve_filter())
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
