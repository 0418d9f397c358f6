//! Per-employee payroll input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headcount assumed when the caller does not supply one.
///
/// This sits exactly on the skills-levy threshold, so an absent headcount
/// means the levy is charged.
pub const DEFAULT_TOTAL_EMPLOYEES: u32 = 10;

/// Pay components for one employee in one pay period.
///
/// Every field except `basic_salary` is optional on the wire and defaults to
/// zero (or [`DEFAULT_TOTAL_EMPLOYEES`] for the headcount).
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollInput;
///
/// let input: PayrollInput = serde_json::from_str(r#"{"basic_salary": "500000"}"#).unwrap();
/// assert!(input.housing_allowance.is_zero());
/// assert_eq!(input.total_employees, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Contractual basic salary for the period.
    pub basic_salary: Decimal,
    /// Housing allowance.
    #[serde(default)]
    pub housing_allowance: Decimal,
    /// Transport allowance.
    #[serde(default)]
    pub transport_allowance: Decimal,
    /// Any other taxable allowances.
    #[serde(default)]
    pub other_allowances: Decimal,
    /// Deductions outside the statutory schemes (loans, advances).
    #[serde(default)]
    pub other_deductions: Decimal,
    /// Organisation-wide headcount, used only to gate the skills levy.
    #[serde(default = "default_total_employees")]
    pub total_employees: u32,
}

fn default_total_employees() -> u32 {
    DEFAULT_TOTAL_EMPLOYEES
}

impl PayrollInput {
    /// Creates an input with only a basic salary; everything else defaulted.
    pub fn new(basic_salary: Decimal) -> Self {
        Self {
            basic_salary,
            housing_allowance: Decimal::ZERO,
            transport_allowance: Decimal::ZERO,
            other_allowances: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            total_employees: DEFAULT_TOTAL_EMPLOYEES,
        }
    }
}
