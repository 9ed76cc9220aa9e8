//! Employer cost calculation.
//!
//! Employer IMSS, INFONAVIT and state payroll tax on top of the monthly
//! gross, and the annual total including benefit payouts.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::{AuditStep, EmployerCost};

use super::normalization::MONTHS_PER_YEAR;

/// Inputs to the employer cost calculation that come from earlier steps.
#[derive(Debug, Clone, Copy)]
pub struct EmployerCostInput {
    /// Gross pay per month.
    pub monthly_gross: Decimal,
    /// Daily contribution base (SBC).
    pub contribution_base: Decimal,
    /// Aguinaldo amount.
    pub aguinaldo: Decimal,
    /// Vacation premium amount.
    pub vacation_premium: Decimal,
    /// State payroll tax rate in percent.
    pub payroll_tax_rate: Decimal,
}

/// The result of calculating employer cost.
#[derive(Debug, Clone)]
pub struct EmployerCostResult {
    /// Employer contributions and totals.
    pub employer_cost: EmployerCost,
    /// One audit step per contribution, then one for the totals.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the employer's monthly contributions and total cost.
///
/// - IMSS employer: `contribution_base × days_per_month × imss_employer_rate`
/// - INFONAVIT: `contribution_base × days_per_month × infonavit_rate`
/// - ISN: `monthly_gross × payroll_tax_rate / 100`
/// - Monthly total: gross plus the three contributions
/// - Annual total: `monthly total × 12 + (aguinaldo + vacation premium) ×
///   benefit_load_factor`
pub fn calculate_employer_cost(
    input: EmployerCostInput,
    rates: &RateConfig,
    first_step_number: u32,
) -> EmployerCostResult {
    let monthly_base = input.contribution_base * rates.days_per_month;
    let imss_employer = monthly_base * rates.imss_employer_rate;
    let infonavit = monthly_base * rates.infonavit_rate;
    let isn = input.monthly_gross * (input.payroll_tax_rate / Decimal::ONE_HUNDRED);

    let total_monthly = input.monthly_gross + imss_employer + infonavit + isn;
    let total_annual = total_monthly * MONTHS_PER_YEAR
        + input.aguinaldo * rates.benefit_load_factor
        + input.vacation_premium * rates.benefit_load_factor;

    let mut step_number = first_step_number;
    let mut audit_steps = Vec::with_capacity(4);

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "imss_employer".to_string(),
        rule_name: "IMSS Employer Contribution".to_string(),
        legal_ref: "LSS arts. 25, 106, 168".to_string(),
        input: serde_json::json!({
            "contribution_base": input.contribution_base.to_string(),
            "rate": rates.imss_employer_rate.to_string()
        }),
        output: serde_json::json!({
            "imss_employer": imss_employer.to_string()
        }),
        reasoning: format!(
            "${} x {} days x {} = ${}",
            input.contribution_base.round_dp(2),
            rates.days_per_month,
            rates.imss_employer_rate,
            imss_employer.round_dp(2)
        ),
    });
    step_number += 1;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "infonavit".to_string(),
        rule_name: "INFONAVIT Contribution".to_string(),
        legal_ref: "Ley INFONAVIT art. 29".to_string(),
        input: serde_json::json!({
            "contribution_base": input.contribution_base.to_string(),
            "rate": rates.infonavit_rate.to_string()
        }),
        output: serde_json::json!({
            "infonavit": infonavit.to_string()
        }),
        reasoning: format!(
            "${} x {} days x {} = ${}",
            input.contribution_base.round_dp(2),
            rates.days_per_month,
            rates.infonavit_rate,
            infonavit.round_dp(2)
        ),
    });
    step_number += 1;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "isn".to_string(),
        rule_name: "State Payroll Tax".to_string(),
        legal_ref: "State payroll tax law".to_string(),
        input: serde_json::json!({
            "monthly_gross": input.monthly_gross.to_string(),
            "payroll_tax_rate": input.payroll_tax_rate.to_string()
        }),
        output: serde_json::json!({
            "isn": isn.to_string()
        }),
        reasoning: format!(
            "${} x {}% = ${}",
            input.monthly_gross.round_dp(2),
            input.payroll_tax_rate,
            isn.round_dp(2)
        ),
    });
    step_number += 1;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "employer_total".to_string(),
        rule_name: "Total Employer Cost".to_string(),
        legal_ref: "LSS art. 27".to_string(),
        input: serde_json::json!({
            "monthly_gross": input.monthly_gross.to_string(),
            "aguinaldo": input.aguinaldo.to_string(),
            "vacation_premium": input.vacation_premium.to_string(),
            "benefit_load_factor": rates.benefit_load_factor.to_string()
        }),
        output: serde_json::json!({
            "total_monthly": total_monthly.to_string(),
            "total_annual": total_annual.to_string()
        }),
        reasoning: format!(
            "Monthly ${} x 12 + (aguinaldo ${} + premium ${}) x {} = ${} per year",
            total_monthly.round_dp(2),
            input.aguinaldo.round_dp(2),
            input.vacation_premium.round_dp(2),
            rates.benefit_load_factor,
            total_annual.round_dp(2)
        ),
    });

    EmployerCostResult {
        employer_cost: EmployerCost {
            imss_employer,
            infonavit,
            isn,
            total_monthly,
            total_annual,
        },
        audit_steps,
    }
}
