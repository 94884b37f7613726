//! Configuration for the income engine.
//!
//! Tax year constants live in [`TaxYearConfig`], either compiled in or loaded
//! from YAML by [`ConfigLoader`]. Service settings (bind address, CORS
//! origins, log level) come from the environment through [`ServiceConfig`].
//!
//! # Example
//!
//! ```no_run
//! use income_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tax_years/2025-2026.yaml").unwrap();
//! println!("Loaded tax year: {}", config.config().tax_year);
//! ```

mod loader;
mod service;
mod types;

pub use loader::ConfigLoader;
pub use service::{DEFAULT_ALLOWED_ORIGINS, ServiceConfig};
pub use types::TaxYearConfig;
