//! Statutory payroll engine for Tanzania mainland.
//!
//! This crate turns an employee's pay components into a full gross-to-net
//! breakdown: progressive PAYE income tax, pension contributions on both
//! sides, the employer-only injury fund and skills levy, and the aggregate
//! reports an employer files for a pay period.
//!
//! The calculation core in [`calculation`] is pure and deterministic. The
//! [`config`] module loads dated bracket schedules and rates from YAML, and
//! [`api`] exposes everything over HTTP.
//!
//! # Example
//!
//! ```
//! use payroll_engine::calculation::PayrollCalculator;
//! use payroll_engine::models::PayrollInput;
//! use rust_decimal::Decimal;
//!
//! let calculator = PayrollCalculator::tanzania_default();
//! let result = calculator
//!     .calculate(&PayrollInput::new(Decimal::new(500_000, 0)))
//!     .unwrap();
//! assert_eq!(result.income_tax, Decimal::new(14_400, 0));
//! assert_eq!(result.net_salary, Decimal::new(435_600, 0));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
