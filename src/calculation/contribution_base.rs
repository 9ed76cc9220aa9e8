//! Contribution base (SBC) calculation.
//!
//! The daily salary is grossed up by an integration factor that spreads the
//! aguinaldo and vacation premium days across the year.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::AuditStep;

/// The result of calculating the contribution base.
#[derive(Debug, Clone)]
pub struct ContributionBaseResult {
    /// `(days_per_year + bonus_days + vacation_days × premium_rate) / days_per_year`.
    pub integration_factor: Decimal,
    /// Daily salary times the integration factor.
    pub contribution_base: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the integration factor and the daily contribution base.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_contribution_base;
/// use payroll_engine::config::RateConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateConfig::mexico_2024();
/// let result = calculate_contribution_base(
///     Decimal::from(365),
///     Decimal::from(15),
///     12,
///     Decimal::from_str("0.25").unwrap(),
///     &rates,
///     1,
/// );
/// // (365 + 15 + 3) / 365 = 383 / 365
/// assert_eq!(result.contribution_base.round_dp(6), Decimal::from(383));
/// ```
pub fn calculate_contribution_base(
    daily_salary: Decimal,
    annual_bonus_days: Decimal,
    vacation_days: u32,
    premium_rate: Decimal,
    rates: &RateConfig,
    step_number: u32,
) -> ContributionBaseResult {
    let premium_days = Decimal::from(vacation_days) * premium_rate;
    let integration_factor =
        (rates.days_per_year + annual_bonus_days + premium_days) / rates.days_per_year;
    let contribution_base = daily_salary * integration_factor;

    let audit_step = AuditStep {
        step_number,
        rule_id: "contribution_base".to_string(),
        rule_name: "Contribution Base (SBC)".to_string(),
        legal_ref: "LSS art. 27".to_string(),
        input: serde_json::json!({
            "daily_salary": daily_salary.to_string(),
            "annual_bonus_days": annual_bonus_days.to_string(),
            "vacation_days": vacation_days,
            "premium_rate": premium_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "integration_factor": integration_factor.to_string(),
            "contribution_base": contribution_base.to_string()
        }),
        reasoning: format!(
            "Integration factor ({} + {} + {}) / {} = {}; SBC ${} x {} = ${}",
            rates.days_per_year,
            annual_bonus_days,
            premium_days.normalize(),
            rates.days_per_year,
            integration_factor.round_dp(4),
            daily_salary.round_dp(2),
            integration_factor.round_dp(4),
            contribution_base.round_dp(2)
        ),
    };

    ContributionBaseResult {
        integration_factor,
        contribution_base,
        audit_step,
    }
}
