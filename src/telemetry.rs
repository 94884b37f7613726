//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::{EngineError, EngineResult};

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` (for example
/// `"info"` or `"income_engine=debug"`) is used.
pub fn init(default_filter: &str) -> EngineResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|e| EngineError::InvalidConfig {
            key: "APP_LOG_LEVEL".to_string(),
            message: e.to_string(),
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| EngineError::InvalidConfig {
            key: "RUST_LOG".to_string(),
            message: format!("tracing subscriber already installed: {}", e),
        })
}
