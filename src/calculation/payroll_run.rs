//! Payroll runs across many employees.
//!
//! A run validates every entry first and only composes once the whole
//! request is clean, so a run either produces a payslip for every employee or
//! fails with every problem listed.

use std::collections::HashSet;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollResult, PayrollRunRequest, PayrollRunResult, Payslip};

use super::{
    PayrollCalculator, payroll_totals, pension_scheme_report, tax_authority_summary, validate,
};

/// Computes payroll for every employee in `request`.
///
/// # Errors
///
/// - `InvalidPayrollRun` if the run has no employees, repeats an employee id,
///   or ends before it starts.
/// - `ValidationFailed` if any entry fails validation; each message is
///   prefixed with the offending employee id.
pub fn run_payroll(
    request: &PayrollRunRequest,
    calculator: &PayrollCalculator,
) -> EngineResult<PayrollRunResult> {
    let start_time = Instant::now();

    if request.employees.is_empty() {
        return Err(EngineError::InvalidPayrollRun {
            message: "no employees supplied".to_string(),
        });
    }
    if !request.pay_period.is_ordered() {
        return Err(EngineError::InvalidPayrollRun {
            message: format!(
                "pay period ends ({}) before it starts ({})",
                request.pay_period.end_date, request.pay_period.start_date
            ),
        });
    }

    let mut seen = HashSet::new();
    for entry in &request.employees {
        if !seen.insert(entry.employee_id.as_str()) {
            return Err(EngineError::InvalidPayrollRun {
                message: format!("duplicate employee id '{}'", entry.employee_id),
            });
        }
    }

    let inputs: Vec<_> = request
        .employees
        .iter()
        .map(|entry| {
            let mut input = entry.input.clone();
            if let Some(total_employees) = request.total_employees {
                input.total_employees = total_employees;
            }
            input
        })
        .collect();

    let errors: Vec<String> = request
        .employees
        .iter()
        .zip(&inputs)
        .flat_map(|(entry, input)| {
            validate(input)
                .errors
                .into_iter()
                .map(move |error| format!("{}: {}", entry.employee_id, error))
        })
        .collect();
    if !errors.is_empty() {
        warn!(
            error_count = errors.len(),
            employees = request.employees.len(),
            "Payroll run rejected"
        );
        return Err(EngineError::ValidationFailed { errors });
    }

    let results: Vec<PayrollResult> = inputs.iter().map(|i| calculator.compose(i)).collect();

    let negative_net = results.iter().filter(|r| r.has_negative_net()).count();
    if negative_net > 0 {
        warn!(
            negative_net,
            "Payroll run contains payslips where deductions exceed gross pay"
        );
    }

    let totals = payroll_totals(&results);
    let tax_authority = tax_authority_summary(&results);
    let pension_scheme = pension_scheme_report(&results);

    let payslips = request
        .employees
        .iter()
        .zip(results)
        .map(|(entry, result)| Payslip {
            employee_id: entry.employee_id.clone(),
            name: entry.name.clone(),
            result,
        })
        .collect();

    let duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX);
    let run_id = Uuid::new_v4();

    info!(
        run_id = %run_id,
        employees = totals.employee_count,
        gross = %totals.gross_salary,
        tax = %tax_authority.total_tax,
        duration_us,
        "Payroll run computed"
    );

    Ok(PayrollRunResult {
        run_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        pay_period: request.pay_period.clone(),
        payslips,
        totals,
        tax_authority,
        pension_scheme,
        duration_us,
    })
}
