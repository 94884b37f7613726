//! Gross income derivation.
//!
//! Converts an [`IncomeSource`] to annual and monthly gross figures.

use rust_decimal::Decimal;

use crate::models::{IncomeSource, WEEKS_PER_YEAR};

/// Months in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Formula description for hourly income.
pub const HOURLY_FORMULA: &str = "(hourly_rate * hours_per_week * 52) / 12";

/// Formula description for annual salary.
pub const ANNUAL_FORMULA: &str = "annual_salary / 12";

/// Unrounded gross income figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrossIncomeResult {
    /// Gross annual income.
    pub annual_income: Decimal,
    /// Gross monthly income (annual / 12).
    pub monthly_income: Decimal,
    /// Hourly rate times weekly hours, for hourly sources only.
    pub weekly_income: Option<Decimal>,
    /// Which formula produced the figures.
    pub formula: &'static str,
}

/// Derives gross income from the income source.
///
/// # Examples
///
/// ```
/// use income_engine::calculation::calculate_gross_income;
/// use income_engine::models::IncomeSource;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_gross_income(&IncomeSource::Hourly {
///     hourly_rate: Decimal::from(20),
///     hours_per_week: Decimal::from_str("37.5").unwrap(),
/// });
///
/// assert_eq!(result.weekly_income, Some(Decimal::from(750)));
/// assert_eq!(result.annual_income, Decimal::from(39_000));
/// assert_eq!(result.monthly_income, Decimal::from(3_250));
/// ```
pub fn calculate_gross_income(source: &IncomeSource) -> GrossIncomeResult {
    let (annual_income, weekly_income, formula) = match *source {
        IncomeSource::Hourly {
            hourly_rate,
            hours_per_week,
        } => {
            let weekly = hourly_rate * hours_per_week;
            (weekly * Decimal::from(WEEKS_PER_YEAR), Some(weekly), HOURLY_FORMULA)
        }
        IncomeSource::Annual { annual_salary } => (annual_salary, None, ANNUAL_FORMULA),
    };

    GrossIncomeResult {
        annual_income,
        monthly_income: annual_income / Decimal::from(MONTHS_PER_YEAR),
        weekly_income,
        formula,
    }
}
