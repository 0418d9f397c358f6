//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report. The calculation core itself is
//! total; these errors come from configuration loading, input validation and
//! payroll-run assembly.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/statutory.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/statutory.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A bracket table broke the ordering or contiguity rules.
    #[error("Invalid bracket table '{source_name}': {message}")]
    InvalidBracketTable {
        /// Where the table came from (file path or built-in name).
        source_name: String,
        /// Which rule the table broke.
        message: String,
    },

    /// No bracket schedule is effective on the requested date.
    #[error("No tax bracket schedule effective on {date}")]
    ScheduleNotFound {
        /// The date for which a schedule was requested.
        date: NaiveDate,
    },

    /// Payroll input failed validation.
    #[error("Payroll input failed validation: {}", errors.join("; "))]
    ValidationFailed {
        /// Every violated constraint, in field order.
        errors: Vec<String>,
    },

    /// A payroll run request was structurally unusable.
    #[error("Invalid payroll run: {message}")]
    InvalidPayrollRun {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
