//! Configuration loading and management for the payroll engine.
//!
//! This module loads jurisdiction metadata, statutory contribution rates and
//! dated PAYE bracket schedules from YAML files. A built-in Tanzania mainland
//! configuration is available without touching the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tz_mainland").unwrap();
//! println!("Loaded jurisdiction: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BracketSchedule, JurisdictionMetadata, PayrollConfig};
