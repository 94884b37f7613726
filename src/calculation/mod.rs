//! Calculation logic for the income engine.
//!
//! This module contains the pure functions that turn an income source into
//! a gross/net breakdown: gross income derivation, personal allowance
//! tapering, progressive income tax, employee National Insurance, and output
//! rounding. [`IncomeTaxCalculator`] composes them against one tax year.

mod breakdown;
mod gross_income;
mod income_tax;
mod national_insurance;
mod personal_allowance;
mod rounding;

pub use breakdown::{IncomeTaxCalculator, calculate_income};
pub use gross_income::{
    ANNUAL_FORMULA, GrossIncomeResult, HOURLY_FORMULA, MONTHS_PER_YEAR, calculate_gross_income,
};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use national_insurance::{NationalInsuranceResult, calculate_national_insurance};
pub use personal_allowance::calculate_personal_allowance;
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
