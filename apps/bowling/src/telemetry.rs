use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::telemetry::LogFormat;

const DEFAULT_FILTER: &str = "info";

/// Install the process-wide subscriber. `RUST_LOG` overrides the filter.
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(false)
                    .json(),
            )
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
    };
    installed.ok();
}
