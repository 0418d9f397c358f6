//! Currency formatting helpers.
//!
//! Presentation only: nothing here feeds back into a calculation. Amounts are
//! rounded to whole units (half away from zero), grouped in thousands with
//! commas and printed without decimals, matching how Tanzanian shilling
//! amounts appear on payslips and statutory returns.

use rust_decimal::Decimal;
use thousands::Separable;

use crate::calculation::round_currency;

/// Display prefix for Tanzanian shillings.
pub const TZS_SYMBOL: &str = "TSh";

/// Groups the whole-unit value of `amount` in thousands.
///
/// # Example
///
/// ```
/// use payroll_engine::format::group_thousands;
/// use rust_decimal::Decimal;
///
/// assert_eq!(group_thousands(Decimal::new(1040000, 0)), "1,040,000");
/// assert_eq!(group_thousands(Decimal::new(-12345, 1)), "-1,235");
/// ```
pub fn group_thousands(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    if rounded.is_zero() {
        return "0".to_string();
    }
    rounded.separate_with_commas()
}

/// Formats `amount` with a currency prefix, e.g. `TSh 435,600`.
///
/// Negative amounts carry the sign before the prefix: `-TSh 2,000`.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let grouped = group_thousands(amount);
    match grouped.strip_prefix('-') {
        Some(magnitude) => format!("-{} {}", symbol, magnitude),
        None => format!("{} {}", symbol, grouped),
    }
}

/// Formats `amount` as Tanzanian shillings.
///
/// # Example
///
/// ```
/// use payroll_engine::format::format_tzs;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_tzs(Decimal::new(435600, 0)), "TSh 435,600");
/// ```
pub fn format_tzs(amount: Decimal) -> String {
    format_currency(amount, TZS_SYMBOL)
}
