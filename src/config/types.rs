//! Tax year configuration types.
//!
//! A [`TaxYearConfig`] holds every threshold and rate the calculator uses.
//! It is deserialized from YAML with the same field names, or built from the
//! compiled-in 2025-2026 figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Frozen income tax and National Insurance constants for one tax year.
///
/// # Example
///
/// ```
/// use income_engine::config::TaxYearConfig;
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::uk_2025_26();
/// assert_eq!(config.tax_year, "2025-2026");
/// assert_eq!(config.personal_allowance, Decimal::from(12570));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    /// Label of the tax year (e.g., "2025-2026").
    pub tax_year: String,
    /// Income exempt from income tax before tapering.
    pub personal_allowance: Decimal,
    /// Income above which the personal allowance is withdrawn.
    pub allowance_taper_start: Decimal,
    /// Income at which the personal allowance reaches zero.
    pub allowance_zero_at: Decimal,
    /// Width of the basic-rate band, measured on taxable income.
    pub basic_rate_limit: Decimal,
    /// Upper edge of the higher-rate band, measured on taxable income.
    pub higher_rate_limit: Decimal,
    /// Basic income tax rate.
    pub basic_rate: Decimal,
    /// Higher income tax rate.
    pub higher_rate: Decimal,
    /// Additional income tax rate.
    pub additional_rate: Decimal,
    /// Annual income at which employee NI starts.
    pub ni_primary_threshold: Decimal,
    /// Annual income above which the reduced NI rate applies.
    pub ni_upper_earnings_limit: Decimal,
    /// NI rate between the primary threshold and the upper earnings limit.
    pub ni_main_rate: Decimal,
    /// NI rate above the upper earnings limit.
    pub ni_upper_rate: Decimal,
}

impl TaxYearConfig {
    /// The 2025-2026 UK figures.
    pub fn uk_2025_26() -> Self {
        Self {
            tax_year: "2025-2026".to_string(),
            personal_allowance: Decimal::from(12_570),
            allowance_taper_start: Decimal::from(100_000),
            allowance_zero_at: Decimal::from(125_140),
            basic_rate_limit: Decimal::from(37_700),
            higher_rate_limit: Decimal::from(125_140),
            basic_rate: Decimal::new(20, 2),
            higher_rate: Decimal::new(40, 2),
            additional_rate: Decimal::new(45, 2),
            ni_primary_threshold: Decimal::from(12_570),
            ni_upper_earnings_limit: Decimal::from(50_270),
            ni_main_rate: Decimal::new(8, 2),
            ni_upper_rate: Decimal::new(2, 2),
        }
    }

    /// Income at which the taper formula drives the allowance to zero.
    ///
    /// Equals [`allowance_zero_at`](Self::allowance_zero_at) for a
    /// consistent configuration.
    /// Returns `None` when the figures are too large to add up.
    pub fn derived_allowance_zero_at(&self) -> Option<Decimal> {
        self.personal_allowance
            .checked_mul(Decimal::TWO)?
            .checked_add(self.allowance_taper_start)
    }

    /// Returns true when the declared zero point matches the taper formula.
    pub fn is_taper_consistent(&self) -> bool {
        self.derived_allowance_zero_at() == Some(self.allowance_zero_at)
    }

    /// Checks that the figures describe a usable tax year.
    ///
    /// Amounts must be non-negative, rates must lie in `[0, 1]`, band limits
    /// and NI thresholds must be ordered, and the taper zero point must be
    /// representable. The message names the first field that fails.
    pub fn validate(&self) -> Result<(), String> {
        let amounts = [
            ("personal_allowance", self.personal_allowance),
            ("allowance_taper_start", self.allowance_taper_start),
            ("allowance_zero_at", self.allowance_zero_at),
            ("basic_rate_limit", self.basic_rate_limit),
            ("higher_rate_limit", self.higher_rate_limit),
            ("ni_primary_threshold", self.ni_primary_threshold),
            ("ni_upper_earnings_limit", self.ni_upper_earnings_limit),
        ];
        if let Some((field, value)) = amounts.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(format!("{field} must be non-negative, got {value}"));
        }

        let rates = [
            ("basic_rate", self.basic_rate),
            ("higher_rate", self.higher_rate),
            ("additional_rate", self.additional_rate),
            ("ni_main_rate", self.ni_main_rate),
            ("ni_upper_rate", self.ni_upper_rate),
        ];
        if let Some((field, value)) = rates
            .iter()
            .find(|(_, v)| *v < Decimal::ZERO || *v > Decimal::ONE)
        {
            return Err(format!("{field} must be between 0 and 1, got {value}"));
        }

        if self.basic_rate_limit > self.higher_rate_limit {
            return Err(format!(
                "basic_rate_limit ({}) must not exceed higher_rate_limit ({})",
                self.basic_rate_limit, self.higher_rate_limit
            ));
        }

        if self.ni_primary_threshold > self.ni_upper_earnings_limit {
            return Err(format!(
                "ni_primary_threshold ({}) must not exceed ni_upper_earnings_limit ({})",
                self.ni_primary_threshold, self.ni_upper_earnings_limit
            ));
        }

        if self.derived_allowance_zero_at().is_none() {
            return Err(format!(
                "allowance_taper_start + 2 * personal_allowance overflows ({} + 2 * {})",
                self.allowance_taper_start, self.personal_allowance
            ));
        }

        Ok(())
    }
}

impl Default for TaxYearConfig {
    fn default() -> Self {
        Self::uk_2025_26()
    }
}
