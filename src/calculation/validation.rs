//! Payroll input validation.
//!
//! Validation runs before composition and reports every violated constraint
//! at once. It never clamps or rewrites the input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::format::group_thousands;
use crate::models::PayrollInput;

/// Largest accepted value for any single monetary field, in whole units.
///
/// Keeps every sum the composer and the reporters form well inside the
/// range of `Decimal`.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// The outcome of validating one payroll input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when `errors` is empty.
    pub valid: bool,
    /// One human-readable message per violated constraint.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Converts the report into a result, failing with
    /// [`EngineError::ValidationFailed`] when any constraint was violated.
    pub fn into_result(self) -> EngineResult<()> {
        if self.valid {
            Ok(())
        } else {
            Err(EngineError::ValidationFailed {
                errors: self.errors,
            })
        }
    }
}

/// Validates a payroll input.
///
/// Checks that every monetary component (basic salary, the three allowance
/// fields and other deductions) lies between zero and [`MAX_AMOUNT`] and that
/// the headcount is at least one.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::validate;
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let report = validate(&PayrollInput::new(Decimal::new(500_000, 0)));
/// assert!(report.valid);
///
/// let report = validate(&PayrollInput::new(Decimal::new(-1, 0)));
/// assert!(!report.valid);
/// assert_eq!(report.errors, vec!["basic_salary must not be negative (got -1)"]);
/// ```
pub fn validate(input: &PayrollInput) -> ValidationReport {
    let mut errors = Vec::new();

    let amounts = [
        ("basic_salary", input.basic_salary),
        ("housing_allowance", input.housing_allowance),
        ("transport_allowance", input.transport_allowance),
        ("other_allowances", input.other_allowances),
        ("other_deductions", input.other_deductions),
    ];
    let max_amount = Decimal::from(MAX_AMOUNT);
    for (field, amount) in amounts {
        if amount < Decimal::ZERO {
            errors.push(format!("{} must not be negative (got {})", field, amount));
        } else if amount > max_amount {
            errors.push(format!(
                "{} must not exceed {} (got {})",
                field,
                group_thousands(max_amount),
                amount
            ));
        }
    }

    if input.total_employees == 0 {
        errors.push("total_employees must be at least 1".to_string());
    }

    if !errors.is_empty() {
        debug!(error_count = errors.len(), "Payroll input rejected");
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
