//! Worker IMSS contribution.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::AuditStep;

/// The result of calculating the worker IMSS contribution.
#[derive(Debug, Clone)]
pub struct ImssWorkerResult {
    /// Monthly worker contribution after the cap.
    pub contribution: Decimal,
    /// Whether the reference-unit cap was applied.
    pub capped: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the monthly worker IMSS contribution.
///
/// `contribution_base × days_per_month × imss_worker_rate`, capped at the
/// contribution owed on a daily base of `contribution_cap_multiplier`
/// reference units (25 UMA).
pub fn calculate_imss_worker(
    contribution_base: Decimal,
    rates: &RateConfig,
    step_number: u32,
) -> ImssWorkerResult {
    let uncapped = contribution_base * rates.days_per_month * rates.imss_worker_rate;
    let cap = rates.imss_worker_cap();
    let capped = uncapped > cap;
    let contribution = if capped { cap } else { uncapped };

    let reasoning = if capped {
        format!(
            "${} exceeds the {} UMA cap; contribution limited to ${}",
            uncapped.round_dp(2),
            rates.contribution_cap_multiplier,
            cap.round_dp(2)
        )
    } else {
        format!(
            "${} x {} days x {} = ${}",
            contribution_base.round_dp(2),
            rates.days_per_month,
            rates.imss_worker_rate,
            contribution.round_dp(2)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "imss_worker".to_string(),
        rule_name: "IMSS Worker Contribution".to_string(),
        legal_ref: "LSS art. 28".to_string(),
        input: serde_json::json!({
            "contribution_base": contribution_base.to_string(),
            "rate": rates.imss_worker_rate.to_string(),
            "cap": cap.to_string()
        }),
        output: serde_json::json!({
            "imss_worker": contribution.to_string(),
            "capped": capped
        }),
        reasoning,
    };

    ImssWorkerResult {
        contribution,
        capped,
        audit_step,
    }
}
