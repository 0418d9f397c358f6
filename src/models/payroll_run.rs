//! Payroll run models.
//!
//! A payroll run computes every employee of an organisation for one pay
//! period and attaches the statutory reports for that period.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayrollInput, PayrollResult, PayrollTotals, PensionSchemeReport, TaxAuthoritySummary};

/// The date range a payroll run covers, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period.
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Returns true if the end date is not before the start date.
    pub fn is_ordered(&self) -> bool {
        self.end_date >= self.start_date
    }
}

/// One employee's entry in a payroll run request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayInput {
    /// Identifier supplied by the caller; must be unique within the run.
    pub employee_id: String,
    /// Optional display name carried through to the payslip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Pay components for the period.
    #[serde(flatten)]
    pub input: PayrollInput,
}

/// A request to compute payroll for many employees at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRunRequest {
    /// The period being paid.
    pub pay_period: PayPeriod,
    /// Organisation headcount for the skills levy. When set it replaces the
    /// headcount on every entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_employees: Option<u32>,
    /// The employees to pay.
    pub employees: Vec<EmployeePayInput>,
}

/// A computed payslip within a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The employee identifier from the request.
    pub employee_id: String,
    /// The display name from the request, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The computed figures.
    pub result: PayrollResult,
}

/// The complete result of a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRunResult {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed the run.
    pub engine_version: String,
    /// The period paid.
    pub pay_period: PayPeriod,
    /// One payslip per employee, in request order.
    pub payslips: Vec<Payslip>,
    /// Payroll-wide totals.
    pub totals: PayrollTotals,
    /// Totals for the PAYE return.
    pub tax_authority: TaxAuthoritySummary,
    /// Totals for the pension scheme schedule.
    pub pension_scheme: PensionSchemeReport,
    /// Wall-clock time spent computing the run, in microseconds.
    pub duration_us: u64,
}
