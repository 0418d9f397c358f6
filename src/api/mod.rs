//! HTTP API module for the payroll engine.
//!
//! This module exposes the calculation core over REST: single-employee
//! calculation and validation, multi-employee payroll runs, and the
//! published bracket schedule.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, TaxBracketsQuery};
pub use response::{
    ApiError, ApiErrorResponse, BracketView, CalculationResponse, TaxBracketsResponse,
};
pub use state::AppState;
