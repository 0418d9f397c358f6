//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::calculation::PayrollCalculator;
use crate::error::{EngineError, EngineResult};
use crate::models::{StatutoryRates, check_bracket_table};

use super::types::{BracketSchedule, JurisdictionMetadata, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// checks every bracket table, and answers schedule lookups by date.
///
/// # Directory Structure
///
/// ```text
/// config/tz_mainland/
/// ├── jurisdiction.yaml    # Jurisdiction metadata
/// ├── statutory.yaml       # Pension, injury fund and skills levy rates
/// └── brackets/
///     └── 2024-07-01.yaml  # PAYE brackets effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/tz_mainland").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
/// let calculator = loader.calculator_for(date).unwrap();
/// println!("{} brackets", calculator.brackets().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or a negative rate (`ConfigParseError`)
    /// - Two schedules share an effective date (`ConfigParseError`)
    /// - A bracket table is not ordered and contiguous (`InvalidBracketTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;

        let statutory_path = path.join("statutory.yaml");
        let rates = Self::load_yaml::<StatutoryRates>(&statutory_path)?;
        Self::check_rates(&rates, &statutory_path)?;

        let schedules = Self::load_schedules(&path.join("brackets"))?;

        Ok(Self {
            config: PayrollConfig::new(metadata, rates, schedules),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_rates(rates: &StatutoryRates, path: &Path) -> EngineResult<()> {
        let fields = [
            ("employee_pension_rate", rates.employee_pension_rate),
            ("employer_pension_rate", rates.employer_pension_rate),
            ("injury_fund_rate", rates.injury_fund_rate),
            ("skills_levy_rate", rates.skills_levy_rate),
        ];
        match fields.iter().find(|(_, rate)| *rate < Decimal::ZERO) {
            Some((field, rate)) => Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("{} must not be negative (got {})", field, rate),
            }),
            None => Ok(()),
        }
    }

    /// Loads and checks all bracket files from the brackets directory.
    fn load_schedules(brackets_dir: &Path) -> EngineResult<Vec<BracketSchedule>> {
        let brackets_dir_str = brackets_dir.display().to_string();

        let entries = fs::read_dir(brackets_dir).map_err(|_| EngineError::ConfigNotFound {
            path: brackets_dir_str.clone(),
        })?;

        let mut schedules: Vec<BracketSchedule> = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: brackets_dir_str.clone(),
            })?;

            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "yaml") {
                continue;
            }

            let schedule = Self::load_yaml::<BracketSchedule>(&path)?;
            check_bracket_table(&schedule.brackets).map_err(|message| {
                EngineError::InvalidBracketTable {
                    source_name: path.display().to_string(),
                    message,
                }
            })?;

            if schedules
                .iter()
                .any(|s| s.effective_date == schedule.effective_date)
            {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "duplicate schedule for effective date {}",
                        schedule.effective_date
                    ),
                });
            }
            schedules.push(schedule);
        }

        if schedules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no bracket files found)", brackets_dir_str),
            });
        }

        Ok(schedules)
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn metadata(&self) -> &JurisdictionMetadata {
        self.config.metadata()
    }

    /// Returns the statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        self.config.rates()
    }

    /// Returns the newest schedule effective on or before `date`.
    pub fn schedule_for(&self, date: NaiveDate) -> EngineResult<&BracketSchedule> {
        self.config.schedule_for(date)
    }

    /// Returns the newest schedule.
    pub fn latest_schedule(&self) -> Option<&BracketSchedule> {
        self.config.latest_schedule()
    }

    /// Builds a calculator for the schedule effective on `date`.
    pub fn calculator_for(&self, date: NaiveDate) -> EngineResult<PayrollCalculator> {
        self.config.calculator_for(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tanzania_paye_monthly_2024;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/tz_mainland"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Writes a config directory under the system temp dir and returns its path.
    fn write_config(name: &str, statutory: &str, brackets: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "payroll-engine-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("brackets")).unwrap();
        fs::write(
            dir.join("jurisdiction.yaml"),
            "code: TEST\nname: Test\ncurrency: TZS\nsource_url: https://example.com\n",
        )
        .unwrap();
        fs::write(dir.join("statutory.yaml"), statutory).unwrap();
        for (file, content) in brackets {
            fs::write(dir.join("brackets").join(file), content).unwrap();
        }
        dir
    }

    const STATUTORY: &str = r#"
employee_pension_rate: "0.10"
employer_pension_rate: "0.10"
injury_fund_rate: "0.005"
skills_levy_rate: "0.035"
skills_levy_min_employees: 10
"#;

    const FLAT_SCHEDULE: &str = r#"
effective_date: 2024-07-01
brackets:
  - min: "0"
    rate: "0.10"
"#;

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().code, "TZ-MAINLAND");
        assert_eq!(loader.metadata().currency, "TZS");
    }

    #[test]
    fn test_shipped_config_matches_builtin_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.rates(), &StatutoryRates::default());

        let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let schedule = loader.schedule_for(date).unwrap();
        let brackets: Vec<_> = schedule
            .brackets
            .iter()
            .map(|b| (b.min, b.max, b.rate, b.fixed_amount))
            .collect();
        let expected: Vec<_> = tanzania_paye_monthly_2024()
            .iter()
            .map(|b| (b.min, b.max, b.rate, b.fixed_amount))
            .collect();
        assert_eq!(brackets, expected);
    }

    #[test]
    fn test_calculator_for_loaded_config() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let calculator = loader.calculator_for(date).unwrap();

        let result = calculator
            .calculate(&crate::models::PayrollInput::new(dec("500000")))
            .unwrap();
        assert_eq!(result.net_salary, dec("435600"));
    }

    #[test]
    fn test_schedule_not_found_before_first_effective_date() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(matches!(
            loader.schedule_for(date),
            Err(EngineError::ScheduleNotFound { .. })
        ));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("jurisdiction.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_minimal_custom_configuration() {
        let dir = write_config("minimal", STATUTORY, &[("2024-07-01.yaml", FLAT_SCHEDULE)]);
        let loader = ConfigLoader::load(&dir).unwrap();

        assert_eq!(loader.config().schedules().len(), 1);
        assert_eq!(
            loader.latest_schedule().unwrap().brackets[0].rate,
            dec("0.10")
        );
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_rejects_gapped_bracket_table() {
        let gapped = r#"
effective_date: 2024-07-01
brackets:
  - min: "0"
    max: "1000"
    rate: "0"
  - min: "1002"
    rate: "0.1"
"#;
        let dir = write_config("gapped", STATUTORY, &[("2024-07-01.yaml", gapped)]);
        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidBracketTable { message, .. }) => {
                assert_eq!(message, "bracket 2 starts at 1002, expected 1001");
            }
            other => panic!("Expected InvalidBracketTable, got {:?}", other),
        }
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_rejects_negative_statutory_rate() {
        let negative = STATUTORY.replace("\"0.005\"", "\"-0.005\"");
        let dir = write_config("negative", &negative, &[("2024-07-01.yaml", FLAT_SCHEDULE)]);
        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("injury_fund_rate"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_rejects_duplicate_effective_dates() {
        let dir = write_config(
            "duplicate",
            STATUTORY,
            &[("a.yaml", FLAT_SCHEDULE), ("b.yaml", FLAT_SCHEDULE)],
        );
        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_load_requires_at_least_one_schedule() {
        let dir = write_config("empty", STATUTORY, &[]);
        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("no bracket files found"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_invalid_yaml_reports_parse_error() {
        let dir = write_config("badyaml", "employee_pension_rate: [", &[]);
        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_from_config_wraps_builtin() {
        let loader = ConfigLoader::from_config(PayrollConfig::tanzania_mainland());
        assert_eq!(loader.metadata().code, "TZ-MAINLAND");
    }
}
