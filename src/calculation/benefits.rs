//! Statutory benefits: vacation entitlement, aguinaldo and vacation premium.

use rust_decimal::Decimal;

use crate::models::AuditStep;
use crate::tables::VacationSchedule;

/// The result of looking up a vacation entitlement.
#[derive(Debug, Clone)]
pub struct VacationDaysResult {
    /// Vacation days for the worker's seniority.
    pub vacation_days: u32,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// The result of calculating a benefit amount.
#[derive(Debug, Clone)]
pub struct BenefitResult {
    /// The benefit amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Looks up the vacation days for completed years of service.
pub fn lookup_vacation_days(
    years_of_service: u32,
    schedule: &VacationSchedule,
    step_number: u32,
) -> VacationDaysResult {
    let vacation_days = schedule.vacation_days(years_of_service);

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_entitlement".to_string(),
        rule_name: "Vacation Entitlement".to_string(),
        legal_ref: "LFT art. 76".to_string(),
        input: serde_json::json!({
            "years_of_service": years_of_service
        }),
        output: serde_json::json!({
            "vacation_days": vacation_days
        }),
        reasoning: format!(
            "{} years of service grants {} vacation days",
            years_of_service, vacation_days
        ),
    };

    VacationDaysResult {
        vacation_days,
        audit_step,
    }
}

/// Calculates the aguinaldo: `daily_salary × annual_bonus_days`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_aguinaldo;
/// use rust_decimal::Decimal;
///
/// let result = calculate_aguinaldo(Decimal::from(200), Decimal::from(15), 1);
/// assert_eq!(result.amount, Decimal::from(3000));
/// ```
pub fn calculate_aguinaldo(
    daily_salary: Decimal,
    annual_bonus_days: Decimal,
    step_number: u32,
) -> BenefitResult {
    let amount = daily_salary * annual_bonus_days;

    let audit_step = AuditStep {
        step_number,
        rule_id: "aguinaldo".to_string(),
        rule_name: "Aguinaldo".to_string(),
        legal_ref: "LFT art. 87".to_string(),
        input: serde_json::json!({
            "daily_salary": daily_salary.to_string(),
            "annual_bonus_days": annual_bonus_days.to_string()
        }),
        output: serde_json::json!({
            "aguinaldo": amount.to_string()
        }),
        reasoning: format!(
            "${} x {} days = ${}",
            daily_salary.round_dp(2),
            annual_bonus_days,
            amount.round_dp(2)
        ),
    };

    BenefitResult { amount, audit_step }
}

/// Calculates the vacation premium:
/// `daily_salary × vacation_days × premium_rate`.
///
/// `premium_rate` is the effective rate, i.e. the contractual rate already
/// floored at the statutory minimum.
pub fn calculate_vacation_premium(
    daily_salary: Decimal,
    vacation_days: u32,
    premium_rate: Decimal,
    step_number: u32,
) -> BenefitResult {
    let amount = daily_salary * Decimal::from(vacation_days) * premium_rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_premium".to_string(),
        rule_name: "Vacation Premium".to_string(),
        legal_ref: "LFT art. 80".to_string(),
        input: serde_json::json!({
            "daily_salary": daily_salary.to_string(),
            "vacation_days": vacation_days,
            "premium_rate": premium_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "vacation_premium": amount.to_string()
        }),
        reasoning: format!(
            "${} x {} days x {} = ${}",
            daily_salary.round_dp(2),
            vacation_days,
            premium_rate.normalize(),
            amount.round_dp(2)
        ),
    };

    BenefitResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scenario_daily_salary() -> Decimal {
        dec("5000") / dec("30.4")
    }

    #[test]
    fn test_vacation_days_for_one_year() {
        let result = lookup_vacation_days(1, &VacationSchedule::mexico_2024(), 2);
        assert_eq!(result.vacation_days, 12);
        assert_eq!(result.audit_step.rule_id, "vacation_entitlement");
        assert_eq!(result.audit_step.output["vacation_days"], 12);
    }

    #[test]
    fn test_aguinaldo_for_scenario() {
        let result = calculate_aguinaldo(scenario_daily_salary(), dec("15"), 3);
        assert_eq!(result.amount.round_dp(2), dec("2467.11"));
        assert_eq!(result.audit_step.legal_ref, "LFT art. 87");
    }

    #[test]
    fn test_aguinaldo_with_zero_days_is_zero() {
        let result = calculate_aguinaldo(scenario_daily_salary(), Decimal::ZERO, 3);
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_vacation_premium_for_scenario() {
        let result = calculate_vacation_premium(scenario_daily_salary(), 12, dec("0.25"), 4);
        assert_eq!(result.amount.round_dp(2), dec("493.42"));
    }

    #[test]
    fn test_vacation_premium_reasoning_shows_rate() {
        let result = calculate_vacation_premium(dec("100"), 12, dec("0.25"), 4);
        assert_eq!(result.amount, dec("300"));
        assert!(result.audit_step.reasoning.contains("0.25"));
        assert!(result.audit_step.reasoning.contains("$300"));
    }
}
