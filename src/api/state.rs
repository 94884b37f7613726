//! Application state for the income engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::IncomeTaxCalculator;
use crate::config::{DEFAULT_ALLOWED_ORIGINS, TaxYearConfig};

/// Shared application state.
///
/// Holds the calculator (read-only tax year constants) and the CORS
/// allow-list. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// The calculator for the configured tax year.
    calculator: Arc<IncomeTaxCalculator>,
    /// Origins permitted to call the API.
    allowed_origins: Arc<[String]>,
}

impl AppState {
    /// Creates a new application state for the given tax year.
    pub fn new(config: TaxYearConfig) -> Self {
        Self {
            calculator: Arc::new(IncomeTaxCalculator::new(config)),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        }
    }

    /// Replaces the CORS allow-list.
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins.into();
        self
    }

    /// Returns the calculator.
    pub fn calculator(&self) -> &IncomeTaxCalculator {
        &self.calculator
    }

    /// Returns the CORS allow-list.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TaxYearConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_origins() {
        let state = AppState::default();
        assert_eq!(state.allowed_origins().len(), DEFAULT_ALLOWED_ORIGINS.len());
        assert_eq!(state.calculator().config().tax_year, "2025-2026");
    }

    #[test]
    fn test_with_allowed_origins_replaces_list() {
        let state = AppState::default()
            .with_allowed_origins(vec!["https://budget.example.com".to_string()]);
        assert_eq!(state.allowed_origins(), ["https://budget.example.com".to_string()]);
    }
}
