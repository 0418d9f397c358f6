//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod payroll_input;
mod payroll_result;
mod payroll_run;
mod reports;
mod statutory_rates;
mod tax_bracket;

pub use payroll_input::{DEFAULT_TOTAL_EMPLOYEES, PayrollInput};
pub use payroll_result::PayrollResult;
pub use payroll_run::{EmployeePayInput, PayPeriod, PayrollRunRequest, PayrollRunResult, Payslip};
pub use reports::{PayrollTotals, PensionSchemeReport, TaxAuthoritySummary};
pub use statutory_rates::{DEFAULT_SKILLS_LEVY_MIN_EMPLOYEES, StatutoryRates};
pub use tax_bracket::{BracketLine, TaxBracket, check_bracket_table, tanzania_paye_monthly_2024};
