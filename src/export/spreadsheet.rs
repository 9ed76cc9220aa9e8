//! Spreadsheet export.
//!
//! Two tab-separated rows (a header and a data line) that paste straight
//! into a spreadsheet. Column labels are in Spanish and the per-period
//! columns are labelled with the pay period the input was stated in.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{PayPeriod, PayrollResult};

/// Number of columns in the export.
pub const COLUMN_COUNT: usize = 20;

/// The eight monthly worker and employer figures restated per pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodAmounts {
    /// Gross pay per period.
    pub gross: Decimal,
    /// Net pay per period.
    pub net: Decimal,
    /// ISR per period.
    pub isr: Decimal,
    /// Worker IMSS per period.
    pub imss_worker: Decimal,
    /// Employer IMSS per period.
    pub imss_employer: Decimal,
    /// INFONAVIT per period.
    pub infonavit: Decimal,
    /// State payroll tax per period.
    pub isn: Decimal,
    /// Total employer cost per period.
    pub total_cost: Decimal,
}

impl PeriodAmounts {
    /// Divides the monthly figures by the number of periods in a month.
    pub fn from_result(result: &PayrollResult, period: PayPeriod, days_per_month: Decimal) -> Self {
        let divisor = period.periods_per_month(days_per_month);
        let cost = &result.employer_cost;
        Self {
            gross: result.gross_monthly / divisor,
            net: result.net_monthly / divisor,
            isr: result.isr / divisor,
            imss_worker: result.imss_worker / divisor,
            imss_employer: cost.imss_employer / divisor,
            infonavit: cost.infonavit / divisor,
            isn: cost.isn / divisor,
            total_cost: cost.total_monthly / divisor,
        }
    }
}

/// Formats a value with exactly two decimals, rounding half away from zero.
pub fn to_fixed_2(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// A payroll result laid out as spreadsheet columns.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::TaxYearConfig;
/// use payroll_engine::export::SpreadsheetExport;
/// use payroll_engine::models::{CompensationInput, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::mexico_2024();
/// let input = CompensationInput::new(Decimal::from(5000), PayPeriod::Monthly);
/// let result = calculate_payroll(&input, &config);
///
/// let export = SpreadsheetExport::from_result(&result, PayPeriod::Monthly, config.rates().days_per_month);
/// assert!(export.header_row().starts_with("Trabajador Bruto (Mensual)\t"));
/// assert!(export.data_row().starts_with("5000.00\t4571.77\t286.57\t141.66\t"));
/// ```
#[derive(Debug, Clone)]
pub struct SpreadsheetExport {
    period: PayPeriod,
    headers: Vec<String>,
    values: Vec<Decimal>,
}

impl SpreadsheetExport {
    /// Builds the export for a result whose input was stated in `period`.
    pub fn from_result(result: &PayrollResult, period: PayPeriod, days_per_month: Decimal) -> Self {
        let per_period = PeriodAmounts::from_result(result, period, days_per_month);
        let label = period.label();
        let cost = &result.employer_cost;

        let headers = vec![
            format!("Trabajador Bruto ({})", label),
            format!("Trabajador Neto ({})", label),
            format!("ISR ({})", label),
            format!("IMSS Obrero ({})", label),
            "Trabajador Bruto (Mensual)".to_string(),
            "Trabajador Neto (Mensual)".to_string(),
            "ISR (Mensual)".to_string(),
            "IMSS Obrero (Mensual)".to_string(),
            format!("Empresa IMSS Pat. ({})", label),
            format!("Empresa INFONAVIT ({})", label),
            format!("Empresa ISN ({})", label),
            format!("Empresa Costo Total ({})", label),
            "Empresa IMSS Pat. (Mensual)".to_string(),
            "Empresa INFONAVIT (Mensual)".to_string(),
            "Empresa ISN (Mensual)".to_string(),
            "Empresa Costo Total (Mensual)".to_string(),
            "Anual Aguinaldo".to_string(),
            "Anual Prima Vacacional".to_string(),
            "Anual Neto Total".to_string(),
            "Anual Costo Patronal".to_string(),
        ];

        let values = vec![
            per_period.gross,
            per_period.net,
            per_period.isr,
            per_period.imss_worker,
            result.gross_monthly,
            result.net_monthly,
            result.isr,
            result.imss_worker,
            per_period.imss_employer,
            per_period.infonavit,
            per_period.isn,
            per_period.total_cost,
            cost.imss_employer,
            cost.infonavit,
            cost.isn,
            cost.total_monthly,
            result.aguinaldo,
            result.vacation_premium,
            result.net_annual,
            cost.total_annual,
        ];

        Self {
            period,
            headers,
            values,
        }
    }

    /// The pay period the per-period columns are stated in.
    pub fn period(&self) -> PayPeriod {
        self.period
    }

    /// Column labels.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Unrounded column values, in header order.
    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    /// Tab-separated header line.
    pub fn header_row(&self) -> String {
        self.headers.join("\t")
    }

    /// Tab-separated data line, two decimals per value.
    pub fn data_row(&self) -> String {
        self.values
            .iter()
            .map(|v| to_fixed_2(*v))
            .collect::<Vec<_>>()
            .join("\t")
    }

    /// Header and data lines joined by a newline, ready to paste.
    pub fn to_clipboard_text(&self) -> String {
        format!("{}\n{}", self.header_row(), self.data_row())
    }
}
