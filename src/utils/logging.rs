// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the tracing subscriber for the binary.
/// Filter directives are taken from the `RUST_LOG` environment variable;
/// without one, everything at "info" and above is emitted.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("Logging setup complete.");
}
