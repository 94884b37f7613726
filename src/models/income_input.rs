//! Income input models.
//!
//! An [`IncomeInput`] is the validated record the calculator consumes. The
//! income source is a tagged union so each variant carries exactly the
//! fields it needs.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Maximum contracted hours in one week.
pub const MAX_HOURS_PER_WEEK: u32 = 168;

/// Weeks in a working year for hourly annualisation.
pub const WEEKS_PER_YEAR: u32 = 52;

/// How the caller expresses their income.
///
/// # Example
///
/// ```
/// use income_engine::models::IncomeType;
///
/// let income_type: IncomeType = "hourly".parse().unwrap();
/// assert_eq!(income_type, IncomeType::Hourly);
/// assert_eq!(income_type.to_string(), "hourly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeType {
    /// An hourly wage with contracted weekly hours.
    Hourly,
    /// A fixed annual salary.
    Annual,
}

impl IncomeType {
    /// Returns the wire name of this income type.
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeType::Hourly => "hourly",
            IncomeType::Annual => "annual",
        }
    }
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly" => Ok(IncomeType::Hourly),
            "annual" => Ok(IncomeType::Annual),
            other => Err(EngineError::UnknownIncomeType {
                value: other.to_string(),
            }),
        }
    }
}

/// The source of income, carrying only the active variant's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeSource {
    /// Hourly wage.
    Hourly {
        /// Pay per hour.
        hourly_rate: Decimal,
        /// Contracted hours per week, between 0 and 168.
        hours_per_week: Decimal,
    },
    /// Annual salary.
    Annual {
        /// Gross salary per year.
        annual_salary: Decimal,
    },
}

impl IncomeSource {
    /// Returns the income type of this source.
    pub fn income_type(&self) -> IncomeType {
        match self {
            IncomeSource::Hourly { .. } => IncomeType::Hourly,
            IncomeSource::Annual { .. } => IncomeType::Annual,
        }
    }

    /// Checks every field against its permitted range.
    ///
    /// Also rejects hourly figures whose annual equivalent does not fit in a
    /// `Decimal`, so the calculator never overflows on accepted input.
    pub fn validate(&self) -> EngineResult<()> {
        match *self {
            IncomeSource::Hourly {
                hourly_rate,
                hours_per_week,
            } => {
                ensure_non_negative("hourly_rate", hourly_rate)?;
                if hours_per_week < Decimal::ZERO
                    || hours_per_week > Decimal::from(MAX_HOURS_PER_WEEK)
                {
                    return Err(EngineError::OutOfRangeValue {
                        field: "hours_per_week".to_string(),
                        value: hours_per_week.normalize().to_string(),
                        constraint: format!("between 0 and {}", MAX_HOURS_PER_WEEK),
                    });
                }
                let annual = hourly_rate
                    .checked_mul(hours_per_week)
                    .and_then(|weekly| weekly.checked_mul(Decimal::from(WEEKS_PER_YEAR)));
                if annual.is_none() {
                    return Err(EngineError::OutOfRangeValue {
                        field: "hourly_rate".to_string(),
                        value: hourly_rate.normalize().to_string(),
                        constraint: "small enough for the annual equivalent to be representable"
                            .to_string(),
                    });
                }
                Ok(())
            }
            IncomeSource::Annual { annual_salary } => {
                ensure_non_negative("annual_salary", annual_salary)
            }
        }
    }
}

fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::OutOfRangeValue {
            field: field.to_string(),
            value: value.normalize().to_string(),
            constraint: "greater than or equal to 0".to_string(),
        });
    }
    Ok(())
}

/// A validated request for an income breakdown.
///
/// # Example
///
/// ```
/// use income_engine::models::{IncomeInput, IncomeType};
/// use rust_decimal::Decimal;
///
/// let input = IncomeInput::annual(Decimal::from(60_000)).with_tax_enabled(false);
/// assert_eq!(input.income_type(), IncomeType::Annual);
/// assert!(!input.tax_enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeInput {
    /// Where the income comes from.
    pub source: IncomeSource,
    /// Whether income tax and National Insurance are estimated.
    pub tax_enabled: bool,
}

impl IncomeInput {
    /// Hourly income with tax estimation enabled.
    pub fn hourly(hourly_rate: Decimal, hours_per_week: Decimal) -> Self {
        Self {
            source: IncomeSource::Hourly {
                hourly_rate,
                hours_per_week,
            },
            tax_enabled: true,
        }
    }

    /// Annual salary with tax estimation enabled.
    pub fn annual(annual_salary: Decimal) -> Self {
        Self {
            source: IncomeSource::Annual { annual_salary },
            tax_enabled: true,
        }
    }

    /// Sets the tax toggle.
    pub fn with_tax_enabled(mut self, tax_enabled: bool) -> Self {
        self.tax_enabled = tax_enabled;
        self
    }

    /// Returns the income type of the source.
    pub fn income_type(&self) -> IncomeType {
        self.source.income_type()
    }

    /// Checks the source fields against their ranges.
    pub fn validate(&self) -> EngineResult<()> {
        self.source.validate()
    }
}
