//! Gross-to-net payroll composition.
//!
//! The composer strings the contribution calculators and the bracket
//! resolver together in a fixed order. It is a pure function: identical
//! input always yields an identical [`PayrollResult`].

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{
    PayrollInput, PayrollResult, StatutoryRates, TaxBracket, tanzania_paye_monthly_2024,
};

use super::{compute_contributions, resolve_tax, validate};

/// Computes gross-to-net payroll for one employee.
///
/// The steps run in this order:
///
/// 1. gross = basic + housing + transport + other allowances
/// 2. employee and employer pension from gross
/// 3. taxable income = gross - employee pension
/// 4. income tax from the bracket table
/// 5. injury fund and skills levy from gross
/// 6. total deductions = employee pension + tax + other deductions
/// 7. net = gross - total deductions
/// 8. total employer contributions = employer pension + injury fund + skills levy
///
/// The composer does not validate. Input that passes [`validate`] stays well
/// inside `Decimal` range at every step. A negative net salary is returned
/// as-is.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_payroll;
/// use payroll_engine::models::{PayrollInput, StatutoryRates, tanzania_paye_monthly_2024};
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput::new(Decimal::new(500_000, 0));
/// let result = compute_payroll(&input, &tanzania_paye_monthly_2024(), &StatutoryRates::default());
///
/// assert_eq!(result.taxable_income, Decimal::new(450_000, 0));
/// assert_eq!(result.income_tax, Decimal::new(14_400, 0));
/// assert_eq!(result.net_salary, Decimal::new(435_600, 0));
/// ```
pub fn compute_payroll(
    input: &PayrollInput,
    brackets: &[TaxBracket],
    rates: &StatutoryRates,
) -> PayrollResult {
    let gross_salary = input.basic_salary
        + input.housing_allowance
        + input.transport_allowance
        + input.other_allowances;

    let contributions = compute_contributions(gross_salary, input.total_employees, rates);

    let taxable_income = gross_salary - contributions.employee_pension;
    let tax = resolve_tax(taxable_income, brackets);

    let total_deductions = contributions.employee_pension + tax.total_tax + input.other_deductions;
    let net_salary = gross_salary - total_deductions;
    let total_employer_contributions = contributions.employer_total();

    debug!(
        gross_salary = %gross_salary,
        taxable_income = %taxable_income,
        income_tax = %tax.total_tax,
        net_salary = %net_salary,
        "Payroll composed"
    );

    PayrollResult {
        basic_salary: input.basic_salary,
        housing_allowance: input.housing_allowance,
        transport_allowance: input.transport_allowance,
        other_allowances: input.other_allowances,
        gross_salary,
        employee_pension: contributions.employee_pension,
        taxable_income,
        income_tax: tax.total_tax,
        other_deductions: input.other_deductions,
        total_deductions,
        net_salary,
        employer_pension: contributions.employer_pension,
        injury_fund: contributions.injury_fund,
        skills_levy: contributions.skills_levy,
        total_employer_contributions,
        tax_breakdown: tax.breakdown,
    }
}

/// A bracket table and a set of statutory rates bound together.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::PayrollCalculator;
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let calculator = PayrollCalculator::tanzania_default();
///
/// let result = calculator.calculate(&PayrollInput::new(Decimal::new(1_200_000, 0))).unwrap();
/// assert_eq!(result.income_tax, Decimal::new(140_000, 0));
///
/// assert!(calculator.calculate(&PayrollInput::new(Decimal::new(-1, 0))).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollCalculator {
    brackets: Vec<TaxBracket>,
    rates: StatutoryRates,
}

impl PayrollCalculator {
    /// Creates a calculator from a bracket table and statutory rates.
    pub fn new(brackets: Vec<TaxBracket>, rates: StatutoryRates) -> Self {
        Self { brackets, rates }
    }

    /// The Tanzania mainland 2024 monthly schedule with default rates.
    pub fn tanzania_default() -> Self {
        Self::new(tanzania_paye_monthly_2024(), StatutoryRates::default())
    }

    /// Returns the bracket table.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }

    /// Validates `input` and composes its payroll.
    ///
    /// Fails with `ValidationFailed` listing every violated constraint.
    pub fn calculate(&self, input: &PayrollInput) -> EngineResult<PayrollResult> {
        validate(input).into_result()?;
        Ok(self.compose(input))
    }

    /// Composes payroll without validating.
    pub fn compose(&self, input: &PayrollInput) -> PayrollResult {
        compute_payroll(input, &self.brackets, &self.rates)
    }
}
