//! Tax bracket models.
//!
//! A bracket table is an ordered list of [`TaxBracket`] values covering every
//! non-negative income exactly once. Each bracket carries the cumulative tax
//! owed on the brackets below it, so a single bracket lookup is enough to
//! compute the tax for any income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::group_thousands;

/// A single band of a progressive tax table.
///
/// Boundaries are inclusive whole-currency amounts. The top bracket has no
/// upper bound.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let bracket = TaxBracket::new(
///     Decimal::new(270001, 0),
///     Some(Decimal::new(520000, 0)),
///     Decimal::new(8, 2),
///     Decimal::ZERO,
/// );
/// assert!(bracket.contains(Decimal::new(270001, 0)));
/// assert!(!bracket.contains(Decimal::new(270000, 0)));
/// assert_eq!(bracket.label(), "270,001 - 520,000");
/// assert_eq!(bracket.rate_percent(), "8%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Display label; derived from the bounds when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Lowest income in the bracket (inclusive).
    pub min: Decimal,
    /// Highest income in the bracket (inclusive), `None` for the top bracket.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Proportional rate applied above the bracket floor (e.g. 0.08).
    pub rate: Decimal,
    /// Cumulative tax owed on all lower brackets.
    #[serde(default)]
    pub fixed_amount: Decimal,
}

impl TaxBracket {
    /// Creates an unlabelled bracket.
    pub fn new(min: Decimal, max: Option<Decimal>, rate: Decimal, fixed_amount: Decimal) -> Self {
        Self {
            label: None,
            min,
            max,
            rate,
            fixed_amount,
        }
    }

    /// Returns the bracket with an explicit display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns true if `income` falls inside the bracket bounds.
    pub fn contains(&self, income: Decimal) -> bool {
        income >= self.min && self.max.is_none_or(|max| income <= max)
    }

    /// Returns the display label, deriving one from the bounds if needed.
    pub fn label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        match self.max {
            Some(max) => format!("{} - {}", group_thousands(self.min), group_thousands(max)),
            None => format!("Above {}", group_thousands(self.min - Decimal::ONE)),
        }
    }

    /// Returns the rate as a percentage string, e.g. `"25%"` or `"0.5%"`.
    pub fn rate_percent(&self) -> String {
        format!("{}%", (self.rate * Decimal::ONE_HUNDRED).normalize())
    }
}

/// One line of the tax breakdown attached to a payroll result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketLine {
    /// Label of the matched bracket.
    pub label: String,
    /// The bracket rate as a percentage string.
    pub rate: String,
    /// Tax attributed to this line.
    pub amount: Decimal,
}

/// Checks that a bracket table is usable by the resolver.
///
/// The table must be non-empty, ascending and contiguous (each bracket starts
/// one unit above the previous maximum), must end in a single unbounded
/// bracket, and must not carry negative rates or fixed amounts.
///
/// Returns a description of the first broken rule.
pub fn check_bracket_table(brackets: &[TaxBracket]) -> Result<(), String> {
    let Some(last) = brackets.last() else {
        return Err("bracket table is empty".to_string());
    };
    if last.max.is_some() {
        return Err("top bracket must be unbounded (omit max)".to_string());
    }

    let mut expected_min: Option<Decimal> = None;
    for (index, bracket) in brackets.iter().enumerate() {
        let position = index + 1;
        if bracket.min < Decimal::ZERO {
            return Err(format!("bracket {} has a negative minimum", position));
        }
        if bracket.rate < Decimal::ZERO {
            return Err(format!("bracket {} has a negative rate", position));
        }
        if bracket.fixed_amount < Decimal::ZERO {
            return Err(format!("bracket {} has a negative fixed amount", position));
        }
        if let Some(expected) = expected_min {
            if bracket.min != expected {
                return Err(format!(
                    "bracket {} starts at {}, expected {}",
                    position, bracket.min, expected
                ));
            }
        }
        match bracket.max {
            Some(max) if max < bracket.min => {
                return Err(format!(
                    "bracket {} ends at {} before it starts at {}",
                    position, max, bracket.min
                ));
            }
            Some(max) => expected_min = Some(max + Decimal::ONE),
            None if position != brackets.len() => {
                return Err(format!(
                    "bracket {} is unbounded but is not the top bracket",
                    position
                ));
            }
            None => {}
        }
    }

    Ok(())
}

/// Tanzania mainland monthly PAYE schedule (2024).
///
/// | Monthly taxable income   | Rate | Fixed amount |
/// |--------------------------|------|--------------|
/// | 0 - 270,000              | 0%   | 0            |
/// | 270,001 - 520,000        | 8%   | 0            |
/// | 520,001 - 760,000        | 20%  | 20,000       |
/// | 760,001 - 1,040,000      | 25%  | 68,000       |
/// | above 1,040,000          | 30%  | 128,000      |
pub fn tanzania_paye_monthly_2024() -> Vec<TaxBracket> {
    vec![
        TaxBracket::new(
            Decimal::ZERO,
            Some(Decimal::new(270_000, 0)),
            Decimal::ZERO,
            Decimal::ZERO,
        ),
        TaxBracket::new(
            Decimal::new(270_001, 0),
            Some(Decimal::new(520_000, 0)),
            Decimal::new(8, 2),
            Decimal::ZERO,
        ),
        TaxBracket::new(
            Decimal::new(520_001, 0),
            Some(Decimal::new(760_000, 0)),
            Decimal::new(20, 2),
            Decimal::new(20_000, 0),
        ),
        TaxBracket::new(
            Decimal::new(760_001, 0),
            Some(Decimal::new(1_040_000, 0)),
            Decimal::new(25, 2),
            Decimal::new(68_000, 0),
        ),
        TaxBracket::new(
            Decimal::new(1_040_001, 0),
            None,
            Decimal::new(30, 2),
            Decimal::new(128_000, 0),
        ),
    ]
}
