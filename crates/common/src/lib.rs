//! Shared glue for binaries.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a binary.
///
/// Respects `RUST_LOG` if set, defaulting to `info` otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!("Logging initialized");
}
