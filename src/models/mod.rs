//! Core data models for the income engine.
//!
//! Inputs and outputs are immutable value records built fresh for each
//! calculation.

mod income_breakdown;
mod income_input;

pub use income_breakdown::{CalculationDetails, IncomeBreakdown};
pub use income_input::{
    IncomeInput, IncomeSource, IncomeType, MAX_HOURS_PER_WEEK, WEEKS_PER_YEAR,
};
