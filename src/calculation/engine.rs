//! The payroll engine.
//!
//! Chains the individual formulas into a full [`PayrollResult`]. The engine
//! is a pure function of its input and the tax-year configuration: no
//! state, no I/O, safe to call from any number of threads.

use rust_decimal::Decimal;

use crate::config::TaxYearConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditTrace, AuditWarning, CompensationInput, PayrollResult};

use super::benefits::{calculate_aguinaldo, calculate_vacation_premium, lookup_vacation_days};
use super::contribution_base::calculate_contribution_base;
use super::employer_cost::{EmployerCostInput, calculate_employer_cost};
use super::income_tax::calculate_isr;
use super::normalization::{MONTHS_PER_YEAR, normalize_gross_pay};
use super::social_security::calculate_imss_worker;
use super::validation::validate_input;

/// Warning code raised when withholdings exceed gross pay.
pub const WARNING_NEGATIVE_NET: &str = "NEGATIVE_NET";
/// Warning code raised when the worker IMSS cap applies.
pub const WARNING_CONTRIBUTION_CAPPED: &str = "CONTRIBUTION_CAPPED";
/// Warning code raised when the daily salary is under the minimum wage.
pub const WARNING_BELOW_MINIMUM_WAGE: &str = "BELOW_MINIMUM_WAGE";

/// Calculates a full payroll breakdown.
///
/// Does not validate: out-of-range values produce odd figures rather than
/// errors, and amounts near `Decimal::MAX` overflow and panic. Only
/// [`calculate_validated`] is total over arbitrary input; use it at trust
/// boundaries.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::TaxYearConfig;
/// use payroll_engine::models::{CompensationInput, PayPeriod};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = TaxYearConfig::mexico_2024();
/// let input = CompensationInput::new(Decimal::from(5000), PayPeriod::Monthly)
///     .with_years_of_service(1)
///     .with_payroll_tax_rate(Decimal::from(3));
///
/// let result = calculate_payroll(&input, &config);
///
/// assert_eq!(result.isr.round_dp(2), Decimal::from_str("286.57").unwrap());
/// assert_eq!(result.net_monthly.round_dp(2), Decimal::from_str("4571.77").unwrap());
/// ```
pub fn calculate_payroll(input: &CompensationInput, config: &TaxYearConfig) -> PayrollResult {
    let rates = config.rates();
    let mut steps: Vec<AuditStep> = Vec::with_capacity(12);
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let normalized = normalize_gross_pay(input.gross_pay, input.pay_period, rates, step_number);
    let monthly_gross = normalized.monthly_gross;
    let daily_salary = normalized.daily_salary;
    steps.push(normalized.audit_step);
    step_number += 1;

    if daily_salary < rates.minimum_daily_wage {
        warnings.push(AuditWarning {
            code: WARNING_BELOW_MINIMUM_WAGE.to_string(),
            message: format!(
                "Daily salary ${} is below the minimum wage of ${}",
                daily_salary.round_dp(2),
                rates.minimum_daily_wage
            ),
            severity: "medium".to_string(),
        });
    }

    let vacation = lookup_vacation_days(
        input.years_of_service,
        config.vacation_schedule(),
        step_number,
    );
    let vacation_days = vacation.vacation_days;
    steps.push(vacation.audit_step);
    step_number += 1;

    let premium_rate = input.effective_premium_rate(rates.vacation_premium_rate);

    let aguinaldo = calculate_aguinaldo(daily_salary, input.annual_bonus_days, step_number);
    steps.push(aguinaldo.audit_step);
    step_number += 1;

    let vacation_premium =
        calculate_vacation_premium(daily_salary, vacation_days, premium_rate, step_number);
    steps.push(vacation_premium.audit_step);
    step_number += 1;

    let sbc = calculate_contribution_base(
        daily_salary,
        input.annual_bonus_days,
        vacation_days,
        premium_rate,
        rates,
        step_number,
    );
    steps.push(sbc.audit_step);
    step_number += 1;

    let isr = calculate_isr(monthly_gross, config.brackets(), step_number);
    steps.push(isr.audit_step);
    step_number += 1;

    let imss_worker = calculate_imss_worker(sbc.contribution_base, rates, step_number);
    if imss_worker.capped {
        warnings.push(AuditWarning {
            code: WARNING_CONTRIBUTION_CAPPED.to_string(),
            message: format!(
                "Worker IMSS contribution capped at {} UMA",
                rates.contribution_cap_multiplier
            ),
            severity: "low".to_string(),
        });
    }
    steps.push(imss_worker.audit_step);
    step_number += 1;

    let net_monthly = monthly_gross - isr.withholding - imss_worker.contribution;
    let net_annual = net_monthly * MONTHS_PER_YEAR + aguinaldo.amount + vacation_premium.amount;
    steps.push(net_pay_step(
        monthly_gross,
        isr.withholding,
        imss_worker.contribution,
        net_monthly,
        net_annual,
        step_number,
    ));
    step_number += 1;

    if net_monthly < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: WARNING_NEGATIVE_NET.to_string(),
            message: format!(
                "Withholdings exceed gross pay; net monthly is ${}",
                net_monthly.round_dp(2)
            ),
            severity: "high".to_string(),
        });
    }

    let employer = calculate_employer_cost(
        EmployerCostInput {
            monthly_gross,
            contribution_base: sbc.contribution_base,
            aguinaldo: aguinaldo.amount,
            vacation_premium: vacation_premium.amount,
            payroll_tax_rate: input.payroll_tax_rate,
        },
        rates,
        step_number,
    );
    steps.extend(employer.audit_steps);

    PayrollResult {
        gross_monthly: monthly_gross,
        gross_annual: normalized.annual_gross,
        daily_salary,
        net_monthly,
        net_annual,
        isr: isr.withholding,
        imss_worker: imss_worker.contribution,
        aguinaldo: aguinaldo.amount,
        vacation_days,
        vacation_premium: vacation_premium.amount,
        contribution_base: sbc.contribution_base,
        employer_cost: employer.employer_cost,
        audit_trace: AuditTrace { steps, warnings },
    }
}

/// Validates the input, then calculates.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_validated;
/// use payroll_engine::config::TaxYearConfig;
/// use payroll_engine::models::{CompensationInput, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::mexico_2024();
/// let input = CompensationInput::new(Decimal::from(-1), PayPeriod::Monthly);
/// assert!(calculate_validated(&input, &config).is_err());
/// ```
pub fn calculate_validated(
    input: &CompensationInput,
    config: &TaxYearConfig,
) -> EngineResult<PayrollResult> {
    validate_input(input)?;
    Ok(calculate_payroll(input, config))
}

fn net_pay_step(
    monthly_gross: Decimal,
    isr: Decimal,
    imss_worker: Decimal,
    net_monthly: Decimal,
    net_annual: Decimal,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        legal_ref: "LFT art. 110".to_string(),
        input: serde_json::json!({
            "monthly_gross": monthly_gross.to_string(),
            "isr": isr.to_string(),
            "imss_worker": imss_worker.to_string()
        }),
        output: serde_json::json!({
            "net_monthly": net_monthly.to_string(),
            "net_annual": net_annual.to_string()
        }),
        reasoning: format!(
            "${} - ${} ISR - ${} IMSS = ${} per month",
            monthly_gross.round_dp(2),
            isr.round_dp(2),
            imss_worker.round_dp(2),
            net_monthly.round_dp(2)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::PayPeriod;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scenario_input() -> CompensationInput {
        CompensationInput::new(dec("5000"), PayPeriod::Monthly)
            .with_years_of_service(1)
            .with_annual_bonus_days(dec("15"))
            .with_payroll_tax_rate(dec("3"))
    }

    fn assert_close(actual: Decimal, expected: Decimal) {
        let diff = (actual - expected).abs();
        assert!(
            diff < dec("0.000001"),
            "expected {} to be within tolerance of {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_scenario_worker_figures() {
        let result = calculate_payroll(&scenario_input(), &TaxYearConfig::mexico_2024());

        assert_eq!(result.gross_monthly, dec("5000"));
        assert_eq!(result.gross_annual, dec("60000"));
        assert_eq!(result.daily_salary.round_dp(2), dec("164.47"));
        assert_eq!(result.vacation_days, 12);
        assert_eq!(result.aguinaldo.round_dp(2), dec("2467.11"));
        assert_eq!(result.vacation_premium.round_dp(2), dec("493.42"));
        assert_eq!(result.contribution_base.round_dp(2), dec("172.58"));
        assert_eq!(result.isr, dec("286.5728"));
        assert_eq!(result.imss_worker.round_dp(2), dec("141.66"));
        assert_eq!(result.net_monthly.round_dp(2), dec("4571.77"));
        assert_eq!(result.net_annual.round_dp(2), dec("57821.76"));
    }

    #[test]
    fn test_scenario_employer_figures() {
        let result = calculate_payroll(&scenario_input(), &TaxYearConfig::mexico_2024());
        let cost = &result.employer_cost;

        assert_eq!(cost.imss_employer.round_dp(2), dec("1154.25"));
        assert_eq!(cost.infonavit.round_dp(2), dec("262.33"));
        assert_eq!(cost.isn, dec("150"));
        assert_eq!(cost.total_monthly.round_dp(2), dec("6566.58"));
        assert_eq!(cost.total_annual.round_dp(2), dec("82647.59"));
    }

    #[test]
    fn test_net_plus_withholdings_equals_gross() {
        let result = calculate_payroll(&scenario_input(), &TaxYearConfig::mexico_2024());
        assert_close(
            result.net_monthly + result.isr + result.imss_worker,
            result.gross_monthly,
        );
    }

    #[test]
    fn test_audit_trace_has_every_step_in_order() {
        let result = calculate_payroll(&scenario_input(), &TaxYearConfig::mexico_2024());

        let ids: Vec<&str> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "gross_normalization",
                "vacation_entitlement",
                "aguinaldo",
                "vacation_premium",
                "contribution_base",
                "isr_withholding",
                "imss_worker",
                "net_pay",
                "imss_employer",
                "infonavit",
                "isn",
                "employer_total",
            ]
        );

        for (index, step) in result.audit_trace.steps.iter().enumerate() {
            assert_eq!(step.step_number, index as u32 + 1);
        }
    }

    #[test]
    fn test_scenario_is_below_minimum_wage() {
        // 164.47 per day is under the 248.93 general minimum wage
        let result = calculate_payroll(&scenario_input(), &TaxYearConfig::mexico_2024());
        assert!(result.audit_trace.has_warning(WARNING_BELOW_MINIMUM_WAGE));
        assert!(!result.audit_trace.has_warning(WARNING_CONTRIBUTION_CAPPED));
        assert!(!result.audit_trace.has_warning(WARNING_NEGATIVE_NET));
    }

    #[test]
    fn test_high_salary_caps_worker_contribution() {
        let input = CompensationInput::new(dec("150000"), PayPeriod::Monthly);
        let result = calculate_payroll(&input, &TaxYearConfig::mexico_2024());

        assert_eq!(result.imss_worker, dec("2227.8564"));
        assert!(result.audit_trace.has_warning(WARNING_CONTRIBUTION_CAPPED));
    }

    #[test]
    fn test_employer_contributions_are_not_capped() {
        let input = CompensationInput::new(dec("150000"), PayPeriod::Monthly);
        let result = calculate_payroll(&input, &TaxYearConfig::mexico_2024());

        let expected = result.contribution_base * dec("30.4") * dec("0.22");
        assert_eq!(result.employer_cost.imss_employer, expected);
    }

    #[test]
    fn test_negative_net_is_reported_not_clamped() {
        let mut config_rates = TaxYearConfig::mexico_2024().rates().clone();
        config_rates.imss_worker_rate = dec("1.5");
        config_rates.reference_unit_value = dec("100000");
        let base = TaxYearConfig::mexico_2024();
        let config = TaxYearConfig::new(
            base.metadata().clone(),
            config_rates,
            base.brackets().clone(),
            base.vacation_schedule().clone(),
        )
        .unwrap();

        let input = CompensationInput::new(dec("5000"), PayPeriod::Monthly);
        let result = calculate_payroll(&input, &config);

        assert!(result.net_monthly < Decimal::ZERO);
        assert!(result.audit_trace.has_warning(WARNING_NEGATIVE_NET));
        assert_close(
            result.net_monthly + result.isr + result.imss_worker,
            result.gross_monthly,
        );
    }

    #[test]
    fn test_zero_years_of_service_uses_minimum_entitlement() {
        let input = scenario_input().with_years_of_service(0);
        let result = calculate_payroll(&input, &TaxYearConfig::mexico_2024());
        assert_eq!(result.vacation_days, 12);
    }

    #[test]
    fn test_premium_rate_below_statutory_is_ignored() {
        let config = TaxYearConfig::mexico_2024();
        let statutory = calculate_payroll(&scenario_input(), &config);
        let lower = calculate_payroll(
            &scenario_input().with_vacation_premium_rate(dec("0.10")),
            &config,
        );

        assert_eq!(lower.vacation_premium, statutory.vacation_premium);
        assert_eq!(lower, statutory);
    }

    #[test]
    fn test_contractual_premium_rate_is_wired_through() {
        let config = TaxYearConfig::mexico_2024();
        let statutory = calculate_payroll(&scenario_input(), &config);
        let doubled = calculate_payroll(
            &scenario_input().with_vacation_premium_rate(dec("0.50")),
            &config,
        );

        assert_close(
            doubled.vacation_premium,
            statutory.vacation_premium * Decimal::TWO,
        );
        assert!(doubled.contribution_base > statutory.contribution_base);
    }

    #[test]
    fn test_bonus_days_do_not_change_vacation_premium() {
        let config = TaxYearConfig::mexico_2024();
        let fifteen = calculate_payroll(&scenario_input(), &config);
        let thirty = calculate_payroll(
            &scenario_input().with_annual_bonus_days(dec("30")),
            &config,
        );

        assert_eq!(thirty.vacation_premium, fifteen.vacation_premium);
        assert!(thirty.aguinaldo > fifteen.aguinaldo);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let config = TaxYearConfig::mexico_2024();
        let first = calculate_payroll(&scenario_input(), &config);
        let second = calculate_payroll(&scenario_input(), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_calculate_validated_rejects_zero_gross() {
        let input = CompensationInput::new(Decimal::ZERO, PayPeriod::Weekly);
        let result = calculate_validated(&input, &TaxYearConfig::mexico_2024());

        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "gross_pay"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_calculate_validated_rejects_overflowing_gross() {
        let input = CompensationInput::new(dec("50000000000000000000000000000"), PayPeriod::Biweekly);
        let result = calculate_validated(&input, &TaxYearConfig::mexico_2024());

        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "gross_pay"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_largest_valid_input_calculates_for_every_period() {
        let config = TaxYearConfig::mexico_2024();
        for period in PayPeriod::ALL {
            let input = CompensationInput::new(crate::calculation::MAX_GROSS_PAY, period)
                .with_years_of_service(40)
                .with_annual_bonus_days(crate::calculation::MAX_ANNUAL_BONUS_DAYS)
                .with_vacation_premium_rate(Decimal::ONE)
                .with_payroll_tax_rate(Decimal::ONE_HUNDRED);

            let result = calculate_validated(&input, &config).unwrap();
            assert!(result.employer_cost.total_annual > result.gross_annual);
            assert_close(
                result.net_monthly + result.isr + result.imss_worker,
                result.gross_monthly,
            );
        }
    }

    #[test]
    fn test_calculate_validated_matches_unchecked() {
        let config = TaxYearConfig::mexico_2024();
        let checked = calculate_validated(&scenario_input(), &config).unwrap();
        assert_eq!(checked, calculate_payroll(&scenario_input(), &config));
    }

    #[test]
    fn test_unvalidated_zero_gross_is_total() {
        let input = CompensationInput::new(Decimal::ZERO, PayPeriod::Monthly);
        let result = calculate_payroll(&input, &TaxYearConfig::mexico_2024());

        assert_eq!(result.isr, Decimal::ZERO);
        assert_eq!(result.net_monthly, Decimal::ZERO);
    }
}
