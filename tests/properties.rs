//! Property tests for the income tax and National Insurance rules.

use proptest::prelude::*;
use rust_decimal::Decimal;

use income_engine::calculation::{
    calculate_income, calculate_income_tax, calculate_national_insurance,
    calculate_personal_allowance,
};
use income_engine::config::TaxYearConfig;
use income_engine::models::IncomeInput;

/// Incomes from 0 to 500,000.00 in whole pence.
fn income() -> impl Strategy<Value = Decimal> {
    (0i64..50_000_000).prop_map(|pence| Decimal::new(pence, 2))
}

/// Hourly rates from 0 to 500.00 and hours from 0 to 168.0.
fn hourly_input() -> impl Strategy<Value = (Decimal, Decimal)> {
    (
        (0i64..50_000).prop_map(|pence| Decimal::new(pence, 2)),
        (0i64..=1_680).prop_map(|tenths| Decimal::new(tenths, 1)),
    )
}

fn cent() -> Decimal {
    Decimal::new(1, 2)
}

proptest! {
    #[test]
    fn allowance_is_bounded(income in income()) {
        let config = TaxYearConfig::uk_2025_26();
        let allowance = calculate_personal_allowance(income, &config);
        prop_assert!(allowance >= Decimal::ZERO);
        prop_assert!(allowance <= config.personal_allowance);
    }

    #[test]
    fn allowance_is_non_increasing(a in income(), b in income()) {
        let config = TaxYearConfig::uk_2025_26();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            calculate_personal_allowance(low, &config) >= calculate_personal_allowance(high, &config)
        );
    }

    #[test]
    fn allowance_is_zero_past_zero_point(excess in income()) {
        let config = TaxYearConfig::uk_2025_26();
        let income = config.derived_allowance_zero_at().unwrap() + excess;
        prop_assert_eq!(calculate_personal_allowance(income, &config), Decimal::ZERO);
    }

    #[test]
    fn income_tax_is_non_negative_and_non_decreasing(a in income(), b in income()) {
        let config = TaxYearConfig::uk_2025_26();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_tax = calculate_income_tax(low, &config).tax;
        let high_tax = calculate_income_tax(high, &config).tax;
        prop_assert!(low_tax >= Decimal::ZERO);
        prop_assert!(low_tax <= high_tax);
    }

    #[test]
    fn income_tax_has_no_jumps(income in income()) {
        // Steepest marginal rate is 60% inside the allowance taper
        let config = TaxYearConfig::uk_2025_26();
        let step = calculate_income_tax(income + cent(), &config).tax
            - calculate_income_tax(income, &config).tax;
        prop_assert!(step >= Decimal::ZERO);
        prop_assert!(step <= Decimal::new(6, 3));
    }

    #[test]
    fn national_insurance_is_zero_up_to_threshold(pence in 0i64..=1_257_000) {
        let config = TaxYearConfig::uk_2025_26();
        let result = calculate_national_insurance(Decimal::new(pence, 2), &config);
        prop_assert_eq!(result.contribution, Decimal::ZERO);
    }

    #[test]
    fn national_insurance_is_piecewise_linear(income in income()) {
        let config = TaxYearConfig::uk_2025_26();
        let contribution = calculate_national_insurance(income, &config).contribution;
        let expected = if income <= config.ni_primary_threshold {
            Decimal::ZERO
        } else if income <= config.ni_upper_earnings_limit {
            (income - config.ni_primary_threshold) * config.ni_main_rate
        } else {
            (config.ni_upper_earnings_limit - config.ni_primary_threshold) * config.ni_main_rate
                + (income - config.ni_upper_earnings_limit) * config.ni_upper_rate
        };
        prop_assert!(contribution >= Decimal::ZERO);
        prop_assert_eq!(contribution, expected);
    }

    #[test]
    fn disabling_tax_leaves_net_equal_to_gross((rate, hours) in hourly_input()) {
        let input = IncomeInput::hourly(rate, hours).with_tax_enabled(false);
        let breakdown = calculate_income(&input, &TaxYearConfig::uk_2025_26());
        prop_assert_eq!(breakdown.estimated_monthly_tax, Decimal::ZERO);
        prop_assert_eq!(breakdown.net_monthly_income, breakdown.gross_monthly_income);
    }

    #[test]
    fn breakdown_is_consistent(salary in income(), tax_enabled in any::<bool>()) {
        let input = IncomeInput::annual(salary).with_tax_enabled(tax_enabled);
        let breakdown = calculate_income(&input, &TaxYearConfig::uk_2025_26());

        let monthly_from_annual = breakdown.gross_annual_income / Decimal::from(12);
        prop_assert!((breakdown.gross_monthly_income - monthly_from_annual).abs() <= cent());

        let net_from_parts = breakdown.gross_monthly_income - breakdown.estimated_monthly_tax;
        prop_assert!((breakdown.net_monthly_income - net_from_parts).abs() <= cent());
        prop_assert!(breakdown.net_monthly_income <= breakdown.gross_monthly_income);
    }

    #[test]
    fn hours_beyond_a_week_are_rejected(extra in 1i64..10_000) {
        let hours = Decimal::from(168) + Decimal::new(extra, 2);
        prop_assert!(IncomeInput::hourly(Decimal::from(20), hours).validate().is_err());
    }
}
