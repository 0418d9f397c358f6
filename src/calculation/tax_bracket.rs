//! Progressive income tax resolution.
//!
//! Tax is found by locating the single bracket that contains the taxable
//! income and adding that bracket's marginal tax to its pre-computed fixed
//! amount. There is no summation across brackets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{BracketLine, TaxBracket};

use super::round_currency;

/// The tax owed on a taxable income and the bracket line that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResolution {
    /// Total tax, in whole currency units.
    pub total_tax: Decimal,
    /// At most one line naming the matched bracket.
    pub breakdown: Vec<BracketLine>,
}

/// Resolves the income tax owed on `taxable_income`.
///
/// # Rules
///
/// - Income of zero or less owes nothing and produces an empty breakdown.
/// - The first bracket with `min <= income <= max` is used.
/// - A zero-rate bracket owes exactly zero, whatever its fixed amount, and
///   records a single zero-rate line.
/// - Otherwise the tax is `fixed_amount + (income - (min - 1)) * rate`,
///   rounded to whole units.
/// - If no bracket matches, the table is defective: a warning is logged and
///   zero tax with an empty breakdown is returned.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_tax;
/// use payroll_engine::models::tanzania_paye_monthly_2024;
/// use rust_decimal::Decimal;
///
/// let brackets = tanzania_paye_monthly_2024();
///
/// let resolution = resolve_tax(Decimal::new(450_000, 0), &brackets);
/// assert_eq!(resolution.total_tax, Decimal::new(14_400, 0));
/// assert_eq!(resolution.breakdown[0].rate, "8%");
///
/// let resolution = resolve_tax(Decimal::new(1_080_000, 0), &brackets);
/// assert_eq!(resolution.total_tax, Decimal::new(140_000, 0));
/// ```
pub fn resolve_tax(taxable_income: Decimal, brackets: &[TaxBracket]) -> TaxResolution {
    if taxable_income <= Decimal::ZERO {
        return TaxResolution::default();
    }

    let Some(bracket) = brackets.iter().find(|b| b.contains(taxable_income)) else {
        warn!(
            taxable_income = %taxable_income,
            bracket_count = brackets.len(),
            "No tax bracket matched taxable income; check the bracket table"
        );
        return TaxResolution::default();
    };

    if bracket.rate.is_zero() {
        return TaxResolution {
            total_tax: Decimal::ZERO,
            breakdown: vec![BracketLine {
                label: bracket.label(),
                rate: bracket.rate_percent(),
                amount: Decimal::ZERO,
            }],
        };
    }

    let marginal = (taxable_income - (bracket.min - Decimal::ONE)) * bracket.rate;
    let total_tax = round_currency(bracket.fixed_amount + marginal);

    TaxResolution {
        total_tax,
        breakdown: vec![BracketLine {
            label: bracket.label(),
            rate: bracket.rate_percent(),
            amount: total_tax,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tanzania_paye_monthly_2024;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tax(income: &str) -> Decimal {
        resolve_tax(dec(income), &tanzania_paye_monthly_2024()).total_tax
    }

    #[test]
    fn test_zero_income_short_circuits() {
        let resolution = resolve_tax(Decimal::ZERO, &tanzania_paye_monthly_2024());
        assert_eq!(resolution.total_tax, Decimal::ZERO);
        assert!(resolution.breakdown.is_empty());
    }

    #[test]
    fn test_negative_income_short_circuits() {
        let resolution = resolve_tax(dec("-50000"), &tanzania_paye_monthly_2024());
        assert_eq!(resolution, TaxResolution::default());
    }

    #[test]
    fn test_tax_free_threshold_records_zero_rate_line() {
        let resolution = resolve_tax(dec("200000"), &tanzania_paye_monthly_2024());
        assert_eq!(resolution.total_tax, Decimal::ZERO);
        assert_eq!(resolution.breakdown.len(), 1);
        assert_eq!(resolution.breakdown[0].label, "0 - 270,000");
        assert_eq!(resolution.breakdown[0].rate, "0%");
        assert_eq!(resolution.breakdown[0].amount, Decimal::ZERO);
    }

    #[test]
    fn test_zero_rate_ignores_fixed_amount() {
        let brackets = vec![
            TaxBracket::new(dec("0"), Some(dec("1000")), dec("0"), dec("999")),
            TaxBracket::new(dec("1001"), None, dec("0.1"), dec("0")),
        ];
        let resolution = resolve_tax(dec("500"), &brackets);
        assert_eq!(resolution.total_tax, Decimal::ZERO);
        assert_eq!(resolution.breakdown.len(), 1);
    }

    #[test]
    fn test_boundary_270000_is_tax_free() {
        assert_eq!(tax("270000"), Decimal::ZERO);
    }

    #[test]
    fn test_boundary_270001_enters_second_bracket() {
        // (270001 - 270000) * 0.08 = 0.08, rounds to 0
        let resolution = resolve_tax(dec("270001"), &tanzania_paye_monthly_2024());
        assert_eq!(resolution.breakdown[0].rate, "8%");
        assert_eq!(resolution.total_tax, Decimal::ZERO);
        // first figure that rounds up: 7 * 0.08 = 0.56
        assert_eq!(tax("270007"), dec("1"));
    }

    #[test]
    fn test_second_bracket_scenario() {
        // (450000 - 270000) * 0.08 = 14400
        assert_eq!(tax("450000"), dec("14400"));
    }

    #[test]
    fn test_top_of_second_bracket() {
        // 250000 * 0.08 = 20000
        assert_eq!(tax("520000"), dec("20000"));
    }

    #[test]
    fn test_third_bracket_adds_fixed_amount() {
        // 20000 + (600000 - 520000) * 0.20 = 36000
        assert_eq!(tax("600000"), dec("36000"));
    }

    #[test]
    fn test_fourth_bracket_adds_fixed_amount() {
        // 68000 + (900000 - 760000) * 0.25 = 103000
        assert_eq!(tax("900000"), dec("103000"));
    }

    #[test]
    fn test_top_bracket_scenario() {
        // 128000 + (1080000 - 1040000) * 0.30 = 140000
        let resolution = resolve_tax(dec("1080000"), &tanzania_paye_monthly_2024());
        assert_eq!(resolution.total_tax, dec("140000"));
        assert_eq!(resolution.breakdown.len(), 1);
        assert_eq!(resolution.breakdown[0].label, "Above 1,040,000");
        assert_eq!(resolution.breakdown[0].rate, "30%");
        assert_eq!(resolution.breakdown[0].amount, dec("140000"));
    }

    #[test]
    fn test_marginal_tax_rounds_half_away_from_zero() {
        // (270000 + 6.25 - 270000) * 0.08 = 0.5
        assert_eq!(tax("270006.25"), dec("1"));
    }

    #[test]
    fn test_income_in_gap_between_integer_brackets_degrades_to_zero() {
        let resolution = resolve_tax(dec("270000.5"), &tanzania_paye_monthly_2024());
        assert_eq!(resolution.total_tax, Decimal::ZERO);
        assert!(resolution.breakdown.is_empty());
    }

    #[test]
    fn test_malformed_table_degrades_to_zero() {
        let brackets = vec![TaxBracket::new(
            dec("0"),
            Some(dec("100000")),
            dec("0.1"),
            dec("0"),
        )];
        let resolution = resolve_tax(dec("250000"), &brackets);
        assert_eq!(resolution.total_tax, Decimal::ZERO);
        assert!(resolution.breakdown.is_empty());
    }

    #[test]
    fn test_empty_table_degrades_to_zero() {
        let resolution = resolve_tax(dec("250000"), &[]);
        assert_eq!(resolution, TaxResolution::default());
    }

    #[test]
    fn test_first_matching_bracket_wins() {
        let brackets = vec![
            TaxBracket::new(dec("0"), Some(dec("1000")), dec("0.1"), dec("0")).with_label("a"),
            TaxBracket::new(dec("500"), None, dec("0.5"), dec("0")).with_label("b"),
        ];
        let resolution = resolve_tax(dec("800"), &brackets);
        assert_eq!(resolution.breakdown[0].label, "a");
        assert_eq!(resolution.total_tax, dec("80"));
    }
}
