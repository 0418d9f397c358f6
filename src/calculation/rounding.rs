//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole currency units, halves away from zero.
///
/// Every statutory figure is rounded on its own before it is summed, so this
/// is applied per contribution and per tax figure rather than once at the end.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("2.5").unwrap()), Decimal::from(3));
/// assert_eq!(round_currency(Decimal::from_str("-2.5").unwrap()), Decimal::from(-3));
/// assert_eq!(round_currency(Decimal::from_str("2.49").unwrap()), Decimal::from(2));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
