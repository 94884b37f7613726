//! Income breakdown models.
//!
//! [`IncomeBreakdown`] is the calculator's output. Monetary values are held
//! as `Decimal` and written to JSON as plain numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::IncomeType;

/// Gross and net income with the estimated monthly deduction.
///
/// All monetary amounts are rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    /// Gross income for the year.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_annual_income: Decimal,
    /// Gross income per month (annual / 12).
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_monthly_income: Decimal,
    /// Income tax plus National Insurance per month.
    #[serde(with = "rust_decimal::serde::float")]
    pub estimated_monthly_tax: Decimal,
    /// Gross monthly income less the monthly deduction.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_monthly_income: Decimal,
    /// Whether tax estimation was applied.
    pub tax_enabled: bool,
    /// The income type used.
    pub income_type: IncomeType,
    /// Inputs, intermediates and tax year constants behind the figures.
    pub calculation_details: CalculationDetails,
}

/// Documentation of how a breakdown was produced.
///
/// Fields that only apply to one income type, or only when tax estimation
/// ran, are omitted from JSON when absent.
///
/// # Example
///
/// ```
/// use income_engine::calculation::IncomeTaxCalculator;
/// use income_engine::models::IncomeInput;
/// use rust_decimal::Decimal;
///
/// let breakdown = IncomeTaxCalculator::default()
///     .calculate(&IncomeInput::annual(Decimal::from(30_000)));
/// let details = serde_json::to_value(&breakdown.calculation_details).unwrap();
///
/// assert_eq!(details["formula"], "annual_salary / 12");
/// assert_eq!(details["tax_year"], "2025-2026");
/// assert!(details.get("hourly_rate").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationDetails {
    /// Hourly rate as supplied.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub hourly_rate: Option<Decimal>,
    /// Weekly hours as supplied.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub hours_per_week: Option<Decimal>,
    /// Hourly rate times weekly hours.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub weekly_income: Option<Decimal>,
    /// Weekly income times 52.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub annual_equivalent: Option<Decimal>,
    /// Annual salary as supplied.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub annual_salary: Option<Decimal>,
    /// How gross monthly income was derived.
    pub formula: String,
    /// Label of the tax year applied.
    pub tax_year: String,
    /// Untapered personal allowance.
    #[serde(with = "rust_decimal::serde::float")]
    pub personal_allowance: Decimal,
    /// Income where the allowance taper begins.
    #[serde(with = "rust_decimal::serde::float")]
    pub personal_allowance_taper_start: Decimal,
    /// Income where the allowance reaches zero.
    #[serde(with = "rust_decimal::serde::float")]
    pub personal_allowance_zero_at: Decimal,
    /// Basic-rate band width.
    #[serde(with = "rust_decimal::serde::float")]
    pub basic_rate_limit: Decimal,
    /// Higher-rate band ceiling.
    #[serde(with = "rust_decimal::serde::float")]
    pub higher_rate_limit: Decimal,
    /// NI primary threshold.
    #[serde(with = "rust_decimal::serde::float")]
    pub ni_primary_threshold: Decimal,
    /// NI upper earnings limit.
    #[serde(with = "rust_decimal::serde::float")]
    pub ni_upper_earnings_limit: Decimal,
    /// Allowance after tapering. Absent when tax estimation is off.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub personal_allowance_applied: Option<Decimal>,
    /// Income above the applied allowance. Absent when tax estimation is off.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub taxable_income: Option<Decimal>,
    /// Income tax for the year.
    #[serde(with = "rust_decimal::serde::float")]
    pub income_tax_annual: Decimal,
    /// Employee National Insurance for the year.
    #[serde(with = "rust_decimal::serde::float")]
    pub national_insurance_annual: Decimal,
    /// Whether tax estimation was applied.
    pub tax_enabled: bool,
}
