//! Income breakdown assembly.
//!
//! Composes gross income, income tax and National Insurance into an
//! [`IncomeBreakdown`]. Everything runs at full precision; rounding happens
//! only while the output record is built.

use rust_decimal::Decimal;

use crate::config::TaxYearConfig;
use crate::models::{CalculationDetails, IncomeBreakdown, IncomeInput, IncomeSource};

use super::gross_income::{MONTHS_PER_YEAR, calculate_gross_income};
use super::income_tax::{IncomeTaxResult, calculate_income_tax};
use super::national_insurance::calculate_national_insurance;
use super::rounding::round_currency;

/// Computes income breakdowns against one tax year.
///
/// Holds only immutable configuration, so a single instance can be shared
/// across threads and called concurrently.
///
/// # Example
///
/// ```
/// use income_engine::calculation::IncomeTaxCalculator;
/// use income_engine::models::IncomeInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calculator = IncomeTaxCalculator::default();
/// let input = IncomeInput::hourly(Decimal::from(20), Decimal::from_str("37.5").unwrap());
/// let breakdown = calculator.calculate(&input);
///
/// assert_eq!(breakdown.gross_annual_income, Decimal::from(39_000));
/// assert_eq!(breakdown.gross_monthly_income, Decimal::from(3_250));
/// assert_eq!(breakdown.estimated_monthly_tax, Decimal::from_str("616.70").unwrap());
/// assert_eq!(breakdown.net_monthly_income, Decimal::from_str("2633.30").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IncomeTaxCalculator {
    config: TaxYearConfig,
}

impl IncomeTaxCalculator {
    /// Creates a calculator for the given tax year.
    pub fn new(config: TaxYearConfig) -> Self {
        Self { config }
    }

    /// Returns the tax year configuration in use.
    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    /// Calculates the breakdown for a validated input.
    pub fn calculate(&self, input: &IncomeInput) -> IncomeBreakdown {
        calculate_income(input, &self.config)
    }
}

/// Calculates the income breakdown for a validated input.
///
/// When `tax_enabled` is false the allowance, tax and NI steps are skipped
/// and the deduction is zero.
pub fn calculate_income(input: &IncomeInput, config: &TaxYearConfig) -> IncomeBreakdown {
    let gross = calculate_gross_income(&input.source);

    let (income_tax, national_insurance) = if input.tax_enabled {
        (
            Some(calculate_income_tax(gross.annual_income, config)),
            calculate_national_insurance(gross.annual_income, config).contribution,
        )
    } else {
        (None, Decimal::ZERO)
    };

    let annual_income_tax = income_tax.map_or(Decimal::ZERO, |result| result.tax);
    let annual_deduction = annual_income_tax + national_insurance;
    let monthly_deduction = annual_deduction / Decimal::from(MONTHS_PER_YEAR);
    let net_monthly_income = gross.monthly_income - monthly_deduction;

    let calculation_details = build_details(
        input,
        config,
        gross.weekly_income,
        gross.annual_income,
        gross.formula,
        income_tax.as_ref(),
        national_insurance,
    );

    IncomeBreakdown {
        gross_annual_income: round_currency(gross.annual_income),
        gross_monthly_income: round_currency(gross.monthly_income),
        estimated_monthly_tax: round_currency(monthly_deduction),
        net_monthly_income: round_currency(net_monthly_income),
        tax_enabled: input.tax_enabled,
        income_type: input.income_type(),
        calculation_details,
    }
}

fn build_details(
    input: &IncomeInput,
    config: &TaxYearConfig,
    weekly_income: Option<Decimal>,
    annual_income: Decimal,
    formula: &str,
    income_tax: Option<&IncomeTaxResult>,
    national_insurance: Decimal,
) -> CalculationDetails {
    let (hourly_rate, hours_per_week, annual_salary) = match input.source {
        IncomeSource::Hourly {
            hourly_rate,
            hours_per_week,
        } => (Some(hourly_rate), Some(hours_per_week), None),
        IncomeSource::Annual { annual_salary } => (None, None, Some(annual_salary)),
    };

    CalculationDetails {
        hourly_rate,
        hours_per_week,
        weekly_income: weekly_income.map(round_currency),
        annual_equivalent: weekly_income.map(|_| round_currency(annual_income)),
        annual_salary,
        formula: formula.to_string(),
        tax_year: config.tax_year.clone(),
        personal_allowance: config.personal_allowance,
        personal_allowance_taper_start: config.allowance_taper_start,
        personal_allowance_zero_at: config.allowance_zero_at,
        basic_rate_limit: config.basic_rate_limit,
        higher_rate_limit: config.higher_rate_limit,
        ni_primary_threshold: config.ni_primary_threshold,
        ni_upper_earnings_limit: config.ni_upper_earnings_limit,
        personal_allowance_applied: income_tax.map(|result| round_currency(result.allowance)),
        taxable_income: income_tax.map(|result| round_currency(result.taxable_income)),
        income_tax_annual: round_currency(income_tax.map_or(Decimal::ZERO, |result| result.tax)),
        national_insurance_annual: round_currency(national_insurance),
        tax_enabled: input.tax_enabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn calculate(input: IncomeInput) -> IncomeBreakdown {
        IncomeTaxCalculator::default().calculate(&input)
    }

    /// BD-001: hourly 20 x 37.5 with tax enabled
    #[test]
    fn test_bd_001_hourly_with_tax() {
        let breakdown = calculate(IncomeInput::hourly(dec("20"), dec("37.5")));

        assert_eq!(breakdown.income_type, IncomeType::Hourly);
        assert_eq!(breakdown.gross_annual_income, dec("39000"));
        assert_eq!(breakdown.gross_monthly_income, dec("3250.00"));
        // (5286 + 2114.4) / 12 = 616.70
        assert_eq!(breakdown.estimated_monthly_tax, dec("616.70"));
        assert_eq!(breakdown.net_monthly_income, dec("2633.30"));

        let details = &breakdown.calculation_details;
        assert_eq!(details.weekly_income, Some(dec("750")));
        assert_eq!(details.annual_equivalent, Some(dec("39000")));
        assert_eq!(details.hourly_rate, Some(dec("20")));
        assert_eq!(details.hours_per_week, Some(dec("37.5")));
        assert_eq!(details.annual_salary, None);
        assert_eq!(details.formula, "(hourly_rate * hours_per_week * 52) / 12");
        assert_eq!(details.income_tax_annual, dec("5286"));
        assert_eq!(details.national_insurance_annual, dec("2114.4"));
    }

    /// BD-002: salary at the allowance zero-out point
    #[test]
    fn test_bd_002_allowance_zero_point() {
        let breakdown = calculate(IncomeInput::annual(dec("125140")));
        let details = &breakdown.calculation_details;

        assert_eq!(details.personal_allowance_applied, Some(Decimal::ZERO));
        assert_eq!(details.taxable_income, Some(dec("125140")));
        assert_eq!(details.income_tax_annual, dec("42516"));
        assert_eq!(details.national_insurance_annual, dec("4513.4"));
        assert_eq!(breakdown.gross_monthly_income, dec("10428.33"));
        // (42516 + 4513.4) / 12 = 3919.1166...
        assert_eq!(breakdown.estimated_monthly_tax, dec("3919.12"));
        // 10428.3333... - 3919.1166... = 6509.2166...
        assert_eq!(breakdown.net_monthly_income, dec("6509.22"));
    }

    /// BD-003: below both thresholds nothing is deducted
    #[test]
    fn test_bd_003_below_thresholds() {
        let breakdown = calculate(IncomeInput::annual(dec("10000")));

        assert_eq!(breakdown.calculation_details.income_tax_annual, Decimal::ZERO);
        assert_eq!(breakdown.calculation_details.national_insurance_annual, Decimal::ZERO);
        assert_eq!(breakdown.estimated_monthly_tax, Decimal::ZERO);
        assert_eq!(breakdown.net_monthly_income, breakdown.gross_monthly_income);
        assert_eq!(breakdown.gross_monthly_income, dec("833.33"));
    }

    /// BD-004: tax disabled leaves net equal to gross
    #[test]
    fn test_bd_004_tax_disabled() {
        let breakdown = calculate(IncomeInput::annual(dec("60000")).with_tax_enabled(false));

        assert!(!breakdown.tax_enabled);
        assert_eq!(breakdown.estimated_monthly_tax, Decimal::ZERO);
        assert_eq!(breakdown.net_monthly_income, dec("5000.00"));
        assert_eq!(breakdown.net_monthly_income, breakdown.gross_monthly_income);

        let details = &breakdown.calculation_details;
        assert!(!details.tax_enabled);
        assert_eq!(details.personal_allowance_applied, None);
        assert_eq!(details.taxable_income, None);
        assert_eq!(details.income_tax_annual, Decimal::ZERO);
        assert_eq!(details.national_insurance_annual, Decimal::ZERO);
    }

    /// BD-005: higher-rate salary with tax enabled
    #[test]
    fn test_bd_005_higher_rate_salary() {
        let breakdown = calculate(IncomeInput::annual(dec("60000")));

        // (11432 + 3210.6) / 12 = 1220.2166...
        assert_eq!(breakdown.estimated_monthly_tax, dec("1220.22"));
        // 5000 - 1220.2166... = 3779.7833...
        assert_eq!(breakdown.net_monthly_income, dec("3779.78"));
    }

    /// BD-006: details echo the tax year constants
    #[test]
    fn test_bd_006_details_echo_constants() {
        let breakdown = calculate(IncomeInput::annual(dec("30000")));
        let details = &breakdown.calculation_details;

        assert_eq!(details.tax_year, "2025-2026");
        assert_eq!(details.personal_allowance, dec("12570"));
        assert_eq!(details.personal_allowance_taper_start, dec("100000"));
        assert_eq!(details.personal_allowance_zero_at, dec("125140"));
        assert_eq!(details.basic_rate_limit, dec("37700"));
        assert_eq!(details.higher_rate_limit, dec("125140"));
        assert_eq!(details.ni_primary_threshold, dec("12570"));
        assert_eq!(details.ni_upper_earnings_limit, dec("50270"));
        assert_eq!(details.formula, "annual_salary / 12");
        assert_eq!(details.weekly_income, None);
        assert_eq!(details.annual_equivalent, None);
    }

    /// BD-007: a swapped-in tax year changes the result without code changes
    #[test]
    fn test_bd_007_custom_tax_year() {
        let config = TaxYearConfig {
            tax_year: "flat".to_string(),
            personal_allowance: Decimal::ZERO,
            ni_main_rate: Decimal::ZERO,
            ni_upper_rate: Decimal::ZERO,
            basic_rate_limit: dec("1000000"),
            higher_rate_limit: dec("1000000"),
            ..TaxYearConfig::uk_2025_26()
        };
        let calculator = IncomeTaxCalculator::new(config);
        let breakdown = calculator.calculate(&IncomeInput::annual(dec("12000")));

        assert_eq!(calculator.config().tax_year, "flat");
        assert_eq!(breakdown.estimated_monthly_tax, dec("200"));
        assert_eq!(breakdown.net_monthly_income, dec("800"));
    }

    /// BD-008: same input, same output
    #[test]
    fn test_bd_008_deterministic() {
        let input = IncomeInput::hourly(dec("13.33"), dec("41.25"));
        assert_eq!(calculate(input), calculate(input));
    }

    /// BD-009: rounding happens at the output boundary only
    #[test]
    fn test_bd_009_rounds_at_output_only() {
        // weekly 478.6875; rounding it first would give 478.69 * 52 = 24891.88
        let breakdown = calculate(IncomeInput::hourly(dec("12.765"), dec("37.5")));

        assert_eq!(breakdown.gross_annual_income, dec("24891.75"));
        assert_eq!(breakdown.calculation_details.weekly_income, Some(dec("478.69")));
        assert_eq!(breakdown.calculation_details.annual_equivalent, Some(dec("24891.75")));
        // taxable 12321.75 -> tax 2464.35, NI 985.74
        assert_eq!(breakdown.calculation_details.income_tax_annual, dec("2464.35"));
        assert_eq!(breakdown.calculation_details.national_insurance_annual, dec("985.74"));
        assert_eq!(breakdown.gross_monthly_income, dec("2074.31"));
        assert_eq!(breakdown.estimated_monthly_tax, dec("287.51"));
    }
}
