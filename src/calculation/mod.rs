//! Calculation logic for the payroll engine.
//!
//! This module contains the currency rounding rule, the progressive tax
//! bracket resolver, the statutory contribution calculators (pension, injury
//! fund, skills levy), input validation, the gross-to-net composer, the
//! aggregate reporters, and multi-employee payroll runs.

mod contributions;
mod payroll;
mod payroll_run;
mod reports;
mod rounding;
mod tax_bracket;
mod validation;

pub use contributions::{
    StatutoryContributions, compute_contributions, employee_pension_contribution,
    employer_pension_contribution, injury_fund_contribution, skills_levy_contribution,
};
pub use payroll::{PayrollCalculator, compute_payroll};
pub use payroll_run::run_payroll;
pub use reports::{pension_scheme_report, payroll_totals, tax_authority_summary};
pub use rounding::round_currency;
pub use tax_bracket::{TaxResolution, resolve_tax};
pub use validation::{MAX_AMOUNT, ValidationReport, validate};
