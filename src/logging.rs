/// Logging setup: `tracing` events to stderr so stdout carries only the report.
use std::io;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset and `--debug` is off.
const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber.
///
/// `--debug` forces the `debug` level; otherwise `RUST_LOG` is honored,
/// falling back to `warn`.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(debug: bool) -> anyhow::Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("failed to install log subscriber")
}
