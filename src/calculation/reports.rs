//! Aggregate reporters over payroll results.
//!
//! Each reporter is a plain fold: order does not matter, and an empty slice
//! produces zeroed totals.

use crate::models::{PayrollResult, PayrollTotals, PensionSchemeReport, TaxAuthoritySummary};

/// Folds results into the totals for the PAYE return.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{PayrollCalculator, tax_authority_summary};
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let calculator = PayrollCalculator::tanzania_default();
/// let results = vec![
///     calculator.compose(&PayrollInput::new(Decimal::new(500_000, 0))),
///     calculator.compose(&PayrollInput::new(Decimal::new(1_200_000, 0))),
/// ];
///
/// let summary = tax_authority_summary(&results);
/// assert_eq!(summary.total_gross, Decimal::new(1_700_000, 0));
/// assert_eq!(summary.total_tax, Decimal::new(154_400, 0));
/// assert_eq!(summary.employee_count, 2);
/// ```
pub fn tax_authority_summary(results: &[PayrollResult]) -> TaxAuthoritySummary {
    results
        .iter()
        .fold(TaxAuthoritySummary::default(), |mut summary, result| {
            summary.total_gross += result.gross_salary;
            summary.total_tax += result.income_tax;
            summary.employee_count += 1;
            summary
        })
}

/// Folds results into the pension scheme contribution schedule.
pub fn pension_scheme_report(results: &[PayrollResult]) -> PensionSchemeReport {
    let mut report = results
        .iter()
        .fold(PensionSchemeReport::default(), |mut report, result| {
            report.total_employee_contribution += result.employee_pension;
            report.total_employer_contribution += result.employer_pension;
            report.employee_count += 1;
            report
        });
    report.total_contribution =
        report.total_employee_contribution + report.total_employer_contribution;
    report
}

/// Folds results into payroll-wide totals.
pub fn payroll_totals(results: &[PayrollResult]) -> PayrollTotals {
    results
        .iter()
        .fold(PayrollTotals::default(), |mut totals, result| {
            totals.gross_salary += result.gross_salary;
            totals.total_deductions += result.total_deductions;
            totals.net_salary += result.net_salary;
            totals.injury_fund += result.injury_fund;
            totals.skills_levy += result.skills_levy;
            totals.total_employer_contributions += result.total_employer_contributions;
            totals.employer_cost += result.employer_cost();
            totals.employee_count += 1;
            totals
        })
}
