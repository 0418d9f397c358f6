//! Response types for the payroll engine API.
//!
//! This module defines the success bodies returned by the handlers and the
//! error response structures used for every failure.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{PayrollResult, TaxBracket};

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// Version of the engine that produced the figures.
    pub engine_version: String,
    /// Effective date of the bracket schedule that was applied.
    pub schedule_effective_date: NaiveDate,
    /// Net salary formatted for display, e.g. `"TSh 435,600"`.
    pub net_salary_display: String,
    /// The computed figures.
    pub result: PayrollResult,
}

/// One bracket as published by `GET /tax-brackets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BracketView {
    /// Display label, e.g. `"270,001 - 520,000"`.
    pub label: String,
    /// Lowest income in the bracket (inclusive).
    pub min: Decimal,
    /// Highest income in the bracket (inclusive), absent for the top bracket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
    /// Rate as a decimal fraction.
    pub rate: Decimal,
    /// Rate as a percentage string.
    pub rate_percent: String,
    /// Cumulative tax on all lower brackets.
    pub fixed_amount: Decimal,
}

impl From<&TaxBracket> for BracketView {
    fn from(bracket: &TaxBracket) -> Self {
        Self {
            label: bracket.label(),
            min: bracket.min,
            max: bracket.max,
            rate: bracket.rate,
            rate_percent: bracket.rate_percent(),
            fixed_amount: bracket.fixed_amount,
        }
    }
}

/// Response body for `GET /tax-brackets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBracketsResponse {
    /// Jurisdiction code, e.g. `"TZ-MAINLAND"`.
    pub jurisdiction: String,
    /// Currency of every amount.
    pub currency: String,
    /// First date the schedule applies to.
    pub effective_date: NaiveDate,
    /// The brackets, lowest first.
    pub brackets: Vec<BracketView>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidBracketTable {
                source_name,
                message,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid bracket table",
                    format!("{}: {}", source_name, message),
                ),
            },
            EngineError::ScheduleNotFound { date } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "SCHEDULE_NOT_FOUND",
                    format!("No tax bracket schedule effective on {}", date),
                    "Choose a date on or after the first configured effective date",
                ),
            },
            EngineError::ValidationFailed { errors } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    "Payroll input failed validation",
                    errors.join("; "),
                ),
            },
            EngineError::InvalidPayrollRun { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_PAYROLL_RUN", message),
            },
        }
    }
}
