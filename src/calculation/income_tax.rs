//! ISR withholding calculation.
//!
//! Monthly withholding from the progressive table: the bracket's fixed base
//! amount plus its marginal rate on the excess over the bracket's lower
//! bound.

use rust_decimal::Decimal;

use crate::models::AuditStep;
use crate::tables::{BracketTable, TaxBracket};

/// The result of calculating ISR withholding.
#[derive(Debug, Clone)]
pub struct IsrResult {
    /// Monthly ISR withheld.
    pub withholding: Decimal,
    /// The bracket applied, if the gross reached the first bracket.
    pub bracket: Option<TaxBracket>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates monthly ISR withholding.
///
/// A monthly gross below the table's first lower bound (only possible for
/// zero or negative gross) has no bracket and withholds nothing.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_isr;
/// use payroll_engine::tables::BracketTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = BracketTable::mexico_2024_monthly();
/// let result = calculate_isr(Decimal::from(5000), &table, 1);
///
/// // 14.32 + (5000 - 746.05) x 6.40%
/// assert_eq!(result.withholding, Decimal::from_str("286.5728").unwrap());
/// ```
pub fn calculate_isr(monthly_gross: Decimal, table: &BracketTable, step_number: u32) -> IsrResult {
    let bracket = table.bracket_for(monthly_gross).cloned();

    let (withholding, output, reasoning) = match &bracket {
        Some(b) => {
            let withholding = b.withholding(monthly_gross);
            let excess = monthly_gross - b.lower_bound;
            (
                withholding,
                serde_json::json!({
                    "isr": withholding.to_string(),
                    "lower_bound": b.lower_bound.to_string(),
                    "base_amount": b.base_amount.to_string(),
                    "marginal_rate": b.marginal_rate.to_string(),
                    "excess": excess.to_string()
                }),
                format!(
                    "${} + (${} - ${}) x {}% = ${}",
                    b.base_amount,
                    monthly_gross.round_dp(2),
                    b.lower_bound,
                    b.marginal_rate,
                    withholding.round_dp(2)
                ),
            )
        }
        None => (
            Decimal::ZERO,
            serde_json::json!({
                "isr": Decimal::ZERO.to_string()
            }),
            format!(
                "Monthly gross ${} is below the first bracket; no ISR withheld",
                monthly_gross.round_dp(2)
            ),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "isr_withholding".to_string(),
        rule_name: "ISR Withholding".to_string(),
        legal_ref: "LISR art. 96".to_string(),
        input: serde_json::json!({
            "monthly_gross": monthly_gross.to_string()
        }),
        output,
        reasoning,
    };

    IsrResult {
        withholding,
        bracket,
        audit_step,
    }
}
