//! Diagnostic tracing for the `owner` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary so embedding callers keep control of their own output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. `RUST_LOG=owner=debug` shows store replacements.
///
/// Stdout stays reserved for the JSON the commands print.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
