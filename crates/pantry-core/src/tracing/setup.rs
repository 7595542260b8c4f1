//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Pantry tracing/logging system.
///
/// Reads the `PANTRY_LOG` environment variable for per-crate log levels.
/// Format: `PANTRY_LOG=pantry_parser=debug,pantry_aggregator=info`
///
/// Falls back to `info` if `PANTRY_LOG` is not set or is invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_level("info");
}

/// Like `init_tracing`, with `default_level` used when `PANTRY_LOG` is unset.
pub fn init_tracing_with_level(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        // Another subscriber may already be installed by the host program.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
