//! Request types for the payroll engine API.
//!
//! This module defines the JSON request body shared by the `/calculate` and
//! `/export` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CompensationInput, PayPeriod};

/// Request body for the `/calculate` and `/export` endpoints.
///
/// Amounts may be sent as JSON numbers or strings. Everything but the gross
/// pay and its period falls back to statutory defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Gross pay, stated in the unit of `pay_period`.
    pub gross_pay: Decimal,
    /// One of `weekly`, `biweekly`, `monthly`.
    pub pay_period: PayPeriod,
    /// Completed years of service.
    #[serde(default)]
    pub years_of_service: u32,
    /// Aguinaldo days; 15 when omitted.
    #[serde(default)]
    pub annual_bonus_days: Option<Decimal>,
    /// Contractual vacation premium rate as a fraction.
    #[serde(default)]
    pub vacation_premium_rate: Option<Decimal>,
    /// State payroll tax rate in percent.
    #[serde(default)]
    pub payroll_tax_rate: Decimal,
}

impl From<CalculationRequest> for CompensationInput {
    fn from(req: CalculationRequest) -> Self {
        let mut input = CompensationInput::new(req.gross_pay, req.pay_period)
            .with_years_of_service(req.years_of_service)
            .with_payroll_tax_rate(req.payroll_tax_rate);
        if let Some(days) = req.annual_bonus_days {
            input = input.with_annual_bonus_days(days);
        }
        input.vacation_premium_rate = req.vacation_premium_rate;
        input
    }
}
