//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{run_payroll, validate};
use crate::error::EngineResult;
use crate::format::format_tzs;
use crate::models::{PayrollInput, PayrollRunRequest};

use super::request::{CalculationRequest, TaxBracketsQuery};
use super::response::{
    ApiError, ApiErrorResponse, BracketView, CalculationResponse, TaxBracketsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/validate", post(validate_handler))
        .route("/payroll-runs", post(payroll_run_handler))
        .route("/tax-brackets", get(tax_brackets_handler))
        .with_state(state)
}

/// Serializes `body` with an explicit JSON content type.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure onto the API error codes.
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Handler for POST /calculate endpoint.
///
/// Validates the input, selects the bracket schedule effective on the
/// requested date (today by default) and returns the computed payroll.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    let date = request.effective_date.unwrap_or_else(today);
    match perform_calculation(&state, &request.input, date, correlation_id) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                gross = %response.result.gross_salary,
                net = %response.result.net_salary,
                schedule = %response.schedule_effective_date,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn perform_calculation(
    state: &AppState,
    input: &PayrollInput,
    date: NaiveDate,
    calculation_id: Uuid,
) -> EngineResult<CalculationResponse> {
    let config = state.config();
    let schedule_effective_date = config.schedule_for(date)?.effective_date;
    let result = config.calculator_for(date)?.calculate(input)?;

    Ok(CalculationResponse {
        calculation_id,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        schedule_effective_date,
        net_salary_display: format_tzs(result.net_salary),
        result,
    })
}

/// Handler for POST /validate endpoint.
///
/// Always answers 200 with the validation report once the body parses.
async fn validate_handler(payload: Result<Json<PayrollInput>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let report = validate(&input);
    info!(
        correlation_id = %correlation_id,
        valid = report.valid,
        error_count = report.errors.len(),
        "Validation completed"
    );
    json_response(StatusCode::OK, report)
}

/// Handler for POST /payroll-runs endpoint.
///
/// The bracket schedule is the one effective on the first day of the pay
/// period.
async fn payroll_run_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll run request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let result = state
        .config()
        .calculator_for(request.pay_period.start_date)
        .and_then(|calculator| run_payroll(&request, &calculator));

    match result {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %run.run_id,
                employees = run.payslips.len(),
                "Payroll run completed successfully"
            );
            json_response(StatusCode::OK, run)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll run failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /tax-brackets endpoint.
async fn tax_brackets_handler(
    State(state): State<AppState>,
    query: Result<Query<TaxBracketsQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(ApiError::new(
                "INVALID_QUERY",
                rejection.body_text(),
            ))
            .into_response();
        }
    };

    let config = state.config();
    let date = query.date.unwrap_or_else(today);
    match config.schedule_for(date) {
        Ok(schedule) => json_response(
            StatusCode::OK,
            TaxBracketsResponse {
                jurisdiction: config.metadata().code.clone(),
                currency: config.metadata().currency.clone(),
                effective_date: schedule.effective_date,
                brackets: schedule.brackets.iter().map(BracketView::from).collect(),
            },
        ),
        Err(err) => {
            warn!(date = %date, error = %err, "Schedule lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::ValidationReport;
    use crate::config::ConfigLoader;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/tz_mainland").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn body_bytes(response: Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(
                "/calculate",
                r#"{"basic_salary": "500000", "effective_date": "2024-08-01"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = body_bytes(response).await;
        let result: CalculationResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.result.net_salary, dec("435600"));
        assert_eq!(result.net_salary_display, "TSh 435,600");
        assert_eq!(
            result.schedule_effective_date,
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
        );
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_basic_salary_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", r#"{"housing_allowance": "1000"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("basic_salary"));
    }

    #[tokio::test]
    async fn test_api_004_negative_salary_returns_validation_details() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", r#"{"basic_salary": "-5"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(
            error.details.as_deref(),
            Some("basic_salary must not be negative (got -5)")
        );
    }

    #[tokio::test]
    async fn test_api_005_missing_content_type_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .body(Body::from(r#"{"basic_salary": "500000"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_api_006_date_before_first_schedule_returns_422() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(
                "/calculate",
                r#"{"basic_salary": "500000", "effective_date": "2019-01-01"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "SCHEDULE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_validate_reports_every_error_with_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(
                "/validate",
                r#"{"basic_salary": "-1", "transport_allowance": "-2", "total_employees": 0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let report: ValidationReport =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 3);
    }

    #[tokio::test]
    async fn test_tax_brackets_lists_schedule() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/tax-brackets?date=2024-07-01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let schedule: TaxBracketsResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(schedule.jurisdiction, "TZ-MAINLAND");
        assert_eq!(schedule.brackets.len(), 5);
        assert_eq!(schedule.brackets[0].label, "0 - 270,000");
        assert_eq!(schedule.brackets[4].label, "Above 1,040,000");
    }

    #[tokio::test]
    async fn test_tax_brackets_rejects_bad_date() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/tax-brackets?date=not-a-date")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_QUERY");
    }
}
