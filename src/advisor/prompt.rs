//! Advisor prompt construction.

use rust_decimal::Decimal;

use crate::export::to_fixed_2;
use crate::models::PayrollResult;

/// Builds the Spanish prompt asking for an assessment of a salary.
///
/// Embeds the monthly gross, monthly net, total monthly employer cost, the
/// aguinaldo days the input was calculated with, and the vacation days the
/// result carries.
pub fn build_prompt(result: &PayrollResult, annual_bonus_days: Decimal) -> String {
    format!(
        "Analiza este sueldo en México: \
         Bruto Mensual: {} MXN. \
         Neto Mensual: {} MXN. \
         Costo Total Empresa: {} MXN. \
         Prestaciones de Ley: {} días de aguinaldo, {} días de vacaciones. \
         ¿Es competitivo? Da 3 consejos breves.",
        to_fixed_2(result.gross_monthly),
        to_fixed_2(result.net_monthly),
        to_fixed_2(result.employer_cost.total_monthly),
        annual_bonus_days.normalize(),
        result.vacation_days
    )
}
