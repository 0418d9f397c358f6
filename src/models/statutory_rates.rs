//! Statutory contribution rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headcount at which the skills levy starts to apply.
pub const DEFAULT_SKILLS_LEVY_MIN_EMPLOYEES: u32 = 10;

/// Flat rates for the statutory schemes, all applied to gross salary.
///
/// The default is the Tanzania mainland schedule: NSSF 10% employee and 10%
/// employer, WCF 0.5% employer, SDL 3.5% employer for organisations with ten
/// or more employees.
///
/// # Example
///
/// ```
/// use payroll_engine::models::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::default();
/// assert_eq!(rates.injury_fund_rate, Decimal::new(5, 3));
/// assert!(rates.skills_levy_applies(10));
/// assert!(!rates.skills_levy_applies(9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// Employee-side pension contribution rate (NSSF).
    pub employee_pension_rate: Decimal,
    /// Employer-side pension contribution rate (NSSF).
    pub employer_pension_rate: Decimal,
    /// Employer-side injury compensation rate (WCF).
    pub injury_fund_rate: Decimal,
    /// Employer-side skills levy rate (SDL).
    pub skills_levy_rate: Decimal,
    /// Minimum organisation headcount for the skills levy.
    #[serde(default = "default_skills_levy_min_employees")]
    pub skills_levy_min_employees: u32,
}

fn default_skills_levy_min_employees() -> u32 {
    DEFAULT_SKILLS_LEVY_MIN_EMPLOYEES
}

impl StatutoryRates {
    /// Returns true if an organisation of `total_employees` pays the skills levy.
    pub fn skills_levy_applies(&self, total_employees: u32) -> bool {
        total_employees >= self.skills_levy_min_employees
    }
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            employee_pension_rate: Decimal::new(10, 2),
            employer_pension_rate: Decimal::new(10, 2),
            injury_fund_rate: Decimal::new(5, 3),
            skills_levy_rate: Decimal::new(35, 3),
            skills_levy_min_employees: DEFAULT_SKILLS_LEVY_MIN_EMPLOYEES,
        }
    }
}
