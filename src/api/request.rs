//! Request types for the payroll engine API.
//!
//! Payroll run requests reuse [`PayrollRunRequest`](crate::models::PayrollRunRequest)
//! directly; only the single-employee endpoint and the schedule lookup need
//! their own shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PayrollInput;

/// Request body for the `/calculate` endpoint.
///
/// The pay components sit at the top level of the JSON object, next to the
/// optional `effective_date` used to pick the bracket schedule.
///
/// # Example
///
/// ```
/// use payroll_engine::api::CalculationRequest;
///
/// let request: CalculationRequest = serde_json::from_str(
///     r#"{"basic_salary": "500000", "effective_date": "2024-08-01"}"#,
/// )
/// .unwrap();
/// assert_eq!(request.input.total_employees, 10);
/// assert!(request.effective_date.is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The pay components to compute.
    #[serde(flatten)]
    pub input: PayrollInput,
    /// Date used to select the bracket schedule; today when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}

/// Query string for `GET /tax-brackets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxBracketsQuery {
    /// Date the schedule must be effective on; today when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
