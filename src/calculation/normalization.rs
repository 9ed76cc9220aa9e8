//! Pay normalization.
//!
//! Converts a gross amount stated per pay period into the monthly, daily
//! and annual figures every other formula is built on.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::{AuditStep, PayPeriod};

/// Months per year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The result of normalizing gross pay.
#[derive(Debug, Clone)]
pub struct NormalizationResult {
    /// Gross pay per month.
    pub monthly_gross: Decimal,
    /// Gross pay per day (`monthly_gross / days_per_month`).
    pub daily_salary: Decimal,
    /// Gross pay per year (`monthly_gross × 12`).
    pub annual_gross: Decimal,
    /// The audit step recording this normalization.
    pub audit_step: AuditStep,
}

/// Normalizes gross pay to monthly, daily and annual figures.
///
/// Weekly pay becomes `gross / 7 × days_per_month`, biweekly pay is doubled
/// and monthly pay is left as is. `days_per_month` is an average (30.4),
/// not the length of any specific month.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::normalize_gross_pay;
/// use payroll_engine::config::RateConfig;
/// use payroll_engine::models::PayPeriod;
/// use rust_decimal::Decimal;
///
/// let rates = RateConfig::mexico_2024();
/// let result = normalize_gross_pay(Decimal::from(6000), PayPeriod::Biweekly, &rates, 1);
///
/// assert_eq!(result.monthly_gross, Decimal::from(12000));
/// assert_eq!(result.annual_gross, Decimal::from(144000));
/// ```
pub fn normalize_gross_pay(
    gross_pay: Decimal,
    pay_period: PayPeriod,
    rates: &RateConfig,
    step_number: u32,
) -> NormalizationResult {
    let monthly_gross = pay_period.to_monthly(gross_pay, rates.days_per_month);
    let daily_salary = monthly_gross / rates.days_per_month;
    let annual_gross = monthly_gross * MONTHS_PER_YEAR;

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_normalization".to_string(),
        rule_name: "Gross Pay Normalization".to_string(),
        legal_ref: "LFT art. 89".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "pay_period": pay_period.as_str(),
            "days_per_month": rates.days_per_month.to_string()
        }),
        output: serde_json::json!({
            "monthly_gross": monthly_gross.to_string(),
            "daily_salary": daily_salary.to_string(),
            "annual_gross": annual_gross.to_string()
        }),
        reasoning: format!(
            "{} pay of ${} normalizes to ${} per month, ${} per day",
            pay_period.label(),
            gross_pay,
            monthly_gross.round_dp(2),
            daily_salary.round_dp(2)
        ),
    };

    NormalizationResult {
        monthly_gross,
        daily_salary,
        annual_gross,
        audit_step,
    }
}
