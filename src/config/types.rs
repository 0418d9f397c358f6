//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::PayrollCalculator;
use crate::error::{EngineError, EngineResult};
use crate::models::{StatutoryRates, TaxBracket, tanzania_paye_monthly_2024};

/// Metadata about the jurisdiction the configuration describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short code (e.g., "TZ-MAINLAND").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// ISO 4217 currency code of all amounts.
    pub currency: String,
    /// URL to the official schedule.
    pub source_url: String,
}

/// A bracket table and the date from which it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSchedule {
    /// The first date this table applies to.
    pub effective_date: NaiveDate,
    /// Ordered, contiguous brackets.
    pub brackets: Vec<TaxBracket>,
}

/// The complete payroll configuration for one jurisdiction.
///
/// Schedules are kept sorted oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    metadata: JurisdictionMetadata,
    rates: StatutoryRates,
    schedules: Vec<BracketSchedule>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        metadata: JurisdictionMetadata,
        rates: StatutoryRates,
        schedules: Vec<BracketSchedule>,
    ) -> Self {
        let mut sorted = schedules;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rates,
            schedules: sorted,
        }
    }

    /// The built-in Tanzania mainland configuration.
    pub fn tanzania_mainland() -> Self {
        Self::new(
            JurisdictionMetadata {
                code: "TZ-MAINLAND".to_string(),
                name: "Tanzania Mainland".to_string(),
                currency: "TZS".to_string(),
                source_url: "https://www.tra.go.tz".to_string(),
            },
            StatutoryRates::default(),
            vec![BracketSchedule {
                effective_date: NaiveDate::from_ymd_opt(2024, 7, 1)
                    .expect("2024-07-01 is a valid date"),
                brackets: tanzania_paye_monthly_2024(),
            }],
        )
    }

    /// Returns the jurisdiction metadata.
    pub fn metadata(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }

    /// Returns all bracket schedules, oldest first.
    pub fn schedules(&self) -> &[BracketSchedule] {
        &self.schedules
    }

    /// Returns the newest schedule effective on or before `date`.
    pub fn schedule_for(&self, date: NaiveDate) -> EngineResult<&BracketSchedule> {
        self.schedules
            .iter()
            .rfind(|s| s.effective_date <= date)
            .ok_or(EngineError::ScheduleNotFound { date })
    }

    /// Returns the newest schedule, if any.
    pub fn latest_schedule(&self) -> Option<&BracketSchedule> {
        self.schedules.last()
    }

    /// Builds a calculator for the schedule effective on `date`.
    pub fn calculator_for(&self, date: NaiveDate) -> EngineResult<PayrollCalculator> {
        let schedule = self.schedule_for(date)?;
        Ok(PayrollCalculator::new(
            schedule.brackets.clone(),
            self.rates.clone(),
        ))
    }
}
