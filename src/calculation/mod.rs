//! Calculation logic for the payroll engine.
//!
//! This module contains all the formulas that turn a compensation input into
//! a payroll result: gross normalization, vacation entitlement, aguinaldo,
//! vacation premium, contribution base, ISR withholding, worker IMSS,
//! employer cost, and the engine that chains them together.

mod benefits;
mod contribution_base;
mod employer_cost;
mod engine;
mod income_tax;
mod normalization;
mod social_security;
mod validation;

pub use benefits::{
    BenefitResult, VacationDaysResult, calculate_aguinaldo, calculate_vacation_premium,
    lookup_vacation_days,
};
pub use contribution_base::{ContributionBaseResult, calculate_contribution_base};
pub use employer_cost::{EmployerCostInput, EmployerCostResult, calculate_employer_cost};
pub use engine::{
    WARNING_BELOW_MINIMUM_WAGE, WARNING_CONTRIBUTION_CAPPED, WARNING_NEGATIVE_NET,
    calculate_payroll, calculate_validated,
};
pub use income_tax::{IsrResult, calculate_isr};
pub use normalization::{MONTHS_PER_YEAR, NormalizationResult, normalize_gross_pay};
pub use social_security::{ImssWorkerResult, calculate_imss_worker};
pub use validation::{MAX_ANNUAL_BONUS_DAYS, MAX_GROSS_PAY, validate_input};
