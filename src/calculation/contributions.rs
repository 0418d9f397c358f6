//! Statutory contribution calculators.
//!
//! Each contribution is a flat rate applied to gross salary and rounded to
//! whole currency units on its own. Only the skills levy is conditional, and
//! its condition is the organisation headcount rather than anything about the
//! employee's pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::StatutoryRates;

use super::round_currency;

/// The four statutory contributions for one gross salary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryContributions {
    /// Employee-side pension contribution.
    pub employee_pension: Decimal,
    /// Employer-side pension contribution.
    pub employer_pension: Decimal,
    /// Employer injury fund contribution.
    pub injury_fund: Decimal,
    /// Employer skills levy.
    pub skills_levy: Decimal,
}

impl StatutoryContributions {
    /// Sum of the employer-side contributions.
    pub fn employer_total(&self) -> Decimal {
        self.employer_pension + self.injury_fund + self.skills_levy
    }
}

/// Employee-side pension contribution: `round(gross * employee_pension_rate)`.
pub fn employee_pension_contribution(gross_salary: Decimal, rates: &StatutoryRates) -> Decimal {
    round_currency(gross_salary * rates.employee_pension_rate)
}

/// Employer-side pension contribution: `round(gross * employer_pension_rate)`.
pub fn employer_pension_contribution(gross_salary: Decimal, rates: &StatutoryRates) -> Decimal {
    round_currency(gross_salary * rates.employer_pension_rate)
}

/// Employer injury fund contribution: `round(gross * injury_fund_rate)`.
pub fn injury_fund_contribution(gross_salary: Decimal, rates: &StatutoryRates) -> Decimal {
    round_currency(gross_salary * rates.injury_fund_rate)
}

/// Employer skills levy.
///
/// `round(gross * skills_levy_rate)` when `total_employees` is at or above
/// the levy threshold, zero otherwise.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::skills_levy_contribution;
/// use payroll_engine::models::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::default();
/// let gross = Decimal::new(1_200_000, 0);
///
/// assert_eq!(skills_levy_contribution(gross, 10, &rates), Decimal::new(42_000, 0));
/// assert_eq!(skills_levy_contribution(gross, 9, &rates), Decimal::ZERO);
/// ```
pub fn skills_levy_contribution(
    gross_salary: Decimal,
    total_employees: u32,
    rates: &StatutoryRates,
) -> Decimal {
    if rates.skills_levy_applies(total_employees) {
        round_currency(gross_salary * rates.skills_levy_rate)
    } else {
        Decimal::ZERO
    }
}

/// Computes all four contributions for a gross salary.
pub fn compute_contributions(
    gross_salary: Decimal,
    total_employees: u32,
    rates: &StatutoryRates,
) -> StatutoryContributions {
    StatutoryContributions {
        employee_pension: employee_pension_contribution(gross_salary, rates),
        employer_pension: employer_pension_contribution(gross_salary, rates),
        injury_fund: injury_fund_contribution(gross_salary, rates),
        skills_levy: skills_levy_contribution(gross_salary, total_employees, rates),
    }
}
