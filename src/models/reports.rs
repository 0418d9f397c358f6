//! Aggregate report models.
//!
//! These are the organisation-wide totals folded from a set of payroll
//! results. A default value is the report of an empty payroll.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals for the monthly PAYE return to the tax authority (TRA).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAuthoritySummary {
    /// Sum of gross salaries.
    pub total_gross: Decimal,
    /// Sum of income tax withheld.
    pub total_tax: Decimal,
    /// Number of payroll results folded.
    pub employee_count: usize,
}

/// Totals for the pension scheme (NSSF) contribution schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionSchemeReport {
    /// Sum of employee-side contributions.
    pub total_employee_contribution: Decimal,
    /// Sum of employer-side contributions.
    pub total_employer_contribution: Decimal,
    /// Employee plus employer contributions.
    pub total_contribution: Decimal,
    /// Number of payroll results folded.
    pub employee_count: usize,
}

/// Payroll-wide totals across every figure of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of gross salaries.
    pub gross_salary: Decimal,
    /// Sum of employee-side deductions.
    pub total_deductions: Decimal,
    /// Sum of net salaries.
    pub net_salary: Decimal,
    /// Sum of injury fund contributions (WCF).
    pub injury_fund: Decimal,
    /// Sum of skills levy contributions (SDL).
    pub skills_levy: Decimal,
    /// Sum of all employer contributions.
    pub total_employer_contributions: Decimal,
    /// Gross salaries plus employer contributions.
    pub employer_cost: Decimal,
    /// Number of payroll results folded.
    pub employee_count: usize,
}
