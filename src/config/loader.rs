//! Tax year configuration loading.
//!
//! This module provides the [`ConfigLoader`] type for reading a
//! [`TaxYearConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

use super::types::TaxYearConfig;

/// Loads and holds a tax year configuration.
///
/// # File Format
///
/// ```text
/// tax_year: "2025-2026"
/// personal_allowance: 12570
/// allowance_taper_start: 100000
/// allowance_zero_at: 125140
/// basic_rate_limit: 37700
/// higher_rate_limit: 125140
/// basic_rate: 0.20
/// higher_rate: 0.40
/// additional_rate: 0.45
/// ni_primary_threshold: 12570
/// ni_upper_earnings_limit: 50270
/// ni_main_rate: 0.08
/// ni_upper_rate: 0.02
/// ```
///
/// # Example
///
/// ```no_run
/// use income_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tax_years/2025-2026.yaml")?;
/// println!("Tax year: {}", loader.config().tax_year);
/// # Ok::<(), income_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxYearConfig,
}

impl ConfigLoader {
    /// Loads a tax year configuration from the given YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file is not valid YAML or lacks a required field
    /// - The figures fail [`TaxYearConfig::validate`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&path_str, &content)?;
        info!(tax_year = %config.tax_year, path = %path_str, "Loaded tax year configuration");

        Ok(Self { config })
    }

    /// Wraps the compiled-in 2025-2026 configuration.
    pub fn built_in() -> Self {
        Self {
            config: TaxYearConfig::uk_2025_26(),
        }
    }

    /// Loads from `path` when given, otherwise falls back to [`ConfigLoader::built_in`].
    pub fn load_or_built_in<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::built_in()),
        }
    }

    fn parse(path: &str, content: &str) -> EngineResult<TaxYearConfig> {
        let config: TaxYearConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        config
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: path.to_string(),
                message,
            })?;

        if let Some(derived) = config
            .derived_allowance_zero_at()
            .filter(|derived| *derived != config.allowance_zero_at)
        {
            warn!(
                tax_year = %config.tax_year,
                declared = %config.allowance_zero_at,
                derived = %derived,
                "allowance_zero_at does not match taper start + 2 * personal allowance"
            );
        }

        Ok(config)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> TaxYearConfig {
        self.config
    }
}
