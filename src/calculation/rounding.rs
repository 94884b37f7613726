//! Output rounding.

use rust_decimal::Decimal;

/// Decimal places kept for currency values.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds a currency amount to two decimal places (half to even).
///
/// Only applied when a value leaves the calculator.
///
/// # Examples
///
/// ```
/// use income_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let d = |s: &str| Decimal::from_str(s).unwrap();
///
/// assert_eq!(round_currency(d("10428.333333")), d("10428.33"));
/// assert_eq!(round_currency(d("1220.216666")), d("1220.22"));
/// assert_eq!(round_currency(d("0.125")), d("0.12"));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp(CURRENCY_DECIMAL_PLACES)
}
