//! Payroll result model.
//!
//! A [`PayrollResult`] is the flat record the composer returns for one
//! employee: every earnings line, every deduction, every employer
//! contribution, and the bracket breakdown behind the income tax figure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BracketLine;

/// Gross-to-net figures for one employee in one pay period.
///
/// All amounts are whole currency units except the pass-through input
/// components, which are reported exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Basic salary as supplied.
    pub basic_salary: Decimal,
    /// Housing allowance as supplied.
    pub housing_allowance: Decimal,
    /// Transport allowance as supplied.
    pub transport_allowance: Decimal,
    /// Other allowances as supplied.
    pub other_allowances: Decimal,
    /// Basic salary plus all allowances.
    pub gross_salary: Decimal,

    /// Employee-side pension contribution (NSSF).
    pub employee_pension: Decimal,
    /// Gross salary less the employee pension contribution.
    pub taxable_income: Decimal,
    /// Income tax (PAYE).
    pub income_tax: Decimal,
    /// Non-statutory deductions as supplied.
    pub other_deductions: Decimal,
    /// Employee pension plus income tax plus other deductions.
    pub total_deductions: Decimal,
    /// Gross salary less total deductions. May be negative.
    pub net_salary: Decimal,

    /// Employer-side pension contribution (NSSF).
    pub employer_pension: Decimal,
    /// Employer injury compensation contribution (WCF).
    pub injury_fund: Decimal,
    /// Employer skills levy (SDL); zero below the headcount threshold.
    pub skills_levy: Decimal,
    /// Employer pension plus injury fund plus skills levy.
    pub total_employer_contributions: Decimal,

    /// The bracket line(s) behind `income_tax`. Empty when no tax was due
    /// because taxable income was not positive, or when no bracket matched.
    pub tax_breakdown: Vec<BracketLine>,
}

impl PayrollResult {
    /// Total cost of this employee to the employer for the period.
    pub fn employer_cost(&self) -> Decimal {
        self.gross_salary + self.total_employer_contributions
    }

    /// Returns true if deductions exceeded gross pay.
    pub fn has_negative_net(&self) -> bool {
        self.net_salary < Decimal::ZERO
    }
}
