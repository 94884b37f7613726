//! Request types for the income engine API.
//!
//! This module defines the JSON body of `POST /calculate-income` and its
//! validation into an [`IncomeInput`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{IncomeInput, IncomeSource, IncomeType};

/// Request body for the `/calculate-income` endpoint.
///
/// Every variant's fields are optional on the wire; which ones are required
/// depends on `income_type` and is enforced by the `TryFrom` conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeRequest {
    /// Either "hourly" or "annual".
    pub income_type: String,
    /// Hourly wage (required for "hourly").
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Contracted hours per week (required for "hourly").
    #[serde(default)]
    pub hours_per_week: Option<Decimal>,
    /// Annual salary (required for "annual").
    #[serde(default)]
    pub annual_salary: Option<Decimal>,
    /// Whether to estimate income tax and National Insurance.
    #[serde(default = "default_tax_enabled")]
    pub tax_enabled: bool,
}

fn default_tax_enabled() -> bool {
    true
}

fn require(value: Option<Decimal>, field: &str, income_type: IncomeType) -> EngineResult<Decimal> {
    value.ok_or_else(|| EngineError::MissingRequiredField {
        field: field.to_string(),
        income_type: income_type.to_string(),
    })
}

impl TryFrom<IncomeRequest> for IncomeInput {
    type Error = EngineError;

    fn try_from(req: IncomeRequest) -> Result<Self, Self::Error> {
        let income_type: IncomeType = req.income_type.parse()?;

        let source = match income_type {
            IncomeType::Hourly => IncomeSource::Hourly {
                hourly_rate: require(req.hourly_rate, "hourly_rate", income_type)?,
                hours_per_week: require(req.hours_per_week, "hours_per_week", income_type)?,
            },
            IncomeType::Annual => IncomeSource::Annual {
                annual_salary: require(req.annual_salary, "annual_salary", income_type)?,
            },
        };

        let input = IncomeInput {
            source,
            tax_enabled: req.tax_enabled,
        };
        input.validate()?;

        Ok(input)
    }
}
