//! Personal allowance tapering.

use rust_decimal::Decimal;

use crate::config::TaxYearConfig;

/// Calculates the personal allowance for an annual income.
///
/// The full allowance applies up to the taper start. Above it, one unit of
/// allowance is withdrawn for every two units of income, floored at zero.
///
/// # Examples
///
/// ```
/// use income_engine::calculation::calculate_personal_allowance;
/// use income_engine::config::TaxYearConfig;
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::uk_2025_26();
///
/// assert_eq!(calculate_personal_allowance(Decimal::from(50_000), &config), Decimal::from(12_570));
/// assert_eq!(calculate_personal_allowance(Decimal::from(110_000), &config), Decimal::from(7_570));
/// assert_eq!(calculate_personal_allowance(Decimal::from(125_140), &config), Decimal::ZERO);
/// ```
pub fn calculate_personal_allowance(income: Decimal, config: &TaxYearConfig) -> Decimal {
    if income <= config.allowance_taper_start {
        return config.personal_allowance;
    }

    let reduction = (income - config.allowance_taper_start) / Decimal::TWO;
    (config.personal_allowance - reduction).max(Decimal::ZERO)
}
