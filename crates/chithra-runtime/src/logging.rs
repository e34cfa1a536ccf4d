//! Tracing subscriber setup for hosts and demos

use tracing_subscriber::EnvFilter;

use chithra_core::{ChithraError, ChithraResult};

/// Install a formatted subscriber
///
/// `RUST_LOG` wins over `default_directive` when set. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(default_directive: &str) -> ChithraResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| ChithraError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ChithraError::Logging(e.to_string()))
}
