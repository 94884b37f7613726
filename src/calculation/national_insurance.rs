//! Employee National Insurance.

use rust_decimal::Decimal;

use crate::config::TaxYearConfig;

/// Employee NI for one year with its band split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NationalInsuranceResult {
    /// Earnings between the primary threshold and the upper earnings limit.
    pub main_band: Decimal,
    /// Earnings above the upper earnings limit.
    pub upper_band: Decimal,
    /// Total contribution, unrounded.
    pub contribution: Decimal,
}

impl NationalInsuranceResult {
    fn none() -> Self {
        Self {
            main_band: Decimal::ZERO,
            upper_band: Decimal::ZERO,
            contribution: Decimal::ZERO,
        }
    }
}

/// Calculates annual employee National Insurance.
///
/// Nothing is due up to and including the primary threshold.
///
/// # Examples
///
/// ```
/// use income_engine::calculation::calculate_national_insurance;
/// use income_engine::config::TaxYearConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_national_insurance(Decimal::from(60_000), &TaxYearConfig::uk_2025_26());
///
/// assert_eq!(result.main_band, Decimal::from(37_700));
/// assert_eq!(result.upper_band, Decimal::from(9_730));
/// assert_eq!(result.contribution, Decimal::from_str("3210.6").unwrap());
/// ```
pub fn calculate_national_insurance(
    income: Decimal,
    config: &TaxYearConfig,
) -> NationalInsuranceResult {
    if income <= config.ni_primary_threshold {
        return NationalInsuranceResult::none();
    }

    let main_band = income.min(config.ni_upper_earnings_limit) - config.ni_primary_threshold;
    let upper_band = (income - config.ni_upper_earnings_limit).max(Decimal::ZERO);

    NationalInsuranceResult {
        main_band,
        upper_band,
        contribution: main_band * config.ni_main_rate + upper_band * config.ni_upper_rate,
    }
}
