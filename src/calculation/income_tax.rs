//! Progressive income tax.
//!
//! Bands are applied to annual taxable income. Monthly tax is derived by the
//! caller from the annual figure, never from monthly bands.

use rust_decimal::Decimal;

use crate::config::TaxYearConfig;

use super::personal_allowance::calculate_personal_allowance;

/// Income tax for one year with the band split that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeTaxResult {
    /// Personal allowance after tapering.
    pub allowance: Decimal,
    /// Income above the allowance.
    pub taxable_income: Decimal,
    /// Taxable income in the basic-rate band.
    pub basic_band: Decimal,
    /// Taxable income in the higher-rate band.
    pub higher_band: Decimal,
    /// Taxable income in the additional-rate band.
    pub additional_band: Decimal,
    /// Total income tax, unrounded.
    pub tax: Decimal,
}

/// Calculates annual income tax.
///
/// # Examples
///
/// ```
/// use income_engine::calculation::calculate_income_tax;
/// use income_engine::config::TaxYearConfig;
/// use rust_decimal::Decimal;
///
/// let result = calculate_income_tax(Decimal::from(60_000), &TaxYearConfig::uk_2025_26());
///
/// assert_eq!(result.taxable_income, Decimal::from(47_430));
/// assert_eq!(result.basic_band, Decimal::from(37_700));
/// assert_eq!(result.higher_band, Decimal::from(9_730));
/// assert_eq!(result.tax, Decimal::from(11_432));
/// ```
pub fn calculate_income_tax(income: Decimal, config: &TaxYearConfig) -> IncomeTaxResult {
    let allowance = calculate_personal_allowance(income, config);
    let taxable_income = (income - allowance).max(Decimal::ZERO);

    let basic_band = taxable_income.min(config.basic_rate_limit);
    let higher_band = (taxable_income - config.basic_rate_limit)
        .max(Decimal::ZERO)
        .min(config.higher_rate_limit - config.basic_rate_limit);
    let additional_band = (taxable_income - config.higher_rate_limit).max(Decimal::ZERO);

    let tax = basic_band * config.basic_rate
        + higher_band * config.higher_rate
        + additional_band * config.additional_rate;

    IncomeTaxResult {
        allowance,
        taxable_income,
        basic_band,
        higher_band,
        additional_band,
        tax,
    }
}
