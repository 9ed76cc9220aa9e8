//! Compensation input model.
//!
//! This module defines [`CompensationInput`], the request handed to the
//! payroll engine for a single calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// The compensation details of one worker.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CompensationInput, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput::new(Decimal::from(5000), PayPeriod::Monthly)
///     .with_years_of_service(1)
///     .with_annual_bonus_days(Decimal::from(15))
///     .with_payroll_tax_rate(Decimal::from(3));
/// assert_eq!(input.years_of_service, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// Gross pay, stated in the unit of `pay_period`.
    pub gross_pay: Decimal,
    /// Frequency `gross_pay` is stated in.
    pub pay_period: PayPeriod,
    /// Completed years of service.
    #[serde(default)]
    pub years_of_service: u32,
    /// Aguinaldo entitlement in daily-salary units.
    #[serde(default = "default_annual_bonus_days")]
    pub annual_bonus_days: Decimal,
    /// Contractual vacation premium rate as a fraction (0.25 for 25%).
    ///
    /// The statutory rate from the tax-year configuration acts as a floor;
    /// `None` applies the statutory rate.
    #[serde(default)]
    pub vacation_premium_rate: Option<Decimal>,
    /// State payroll tax (ISN) rate in percent (3 for 3%).
    #[serde(default)]
    pub payroll_tax_rate: Decimal,
}

/// LFT art. 87 minimum aguinaldo.
fn default_annual_bonus_days() -> Decimal {
    Decimal::from(15)
}

impl CompensationInput {
    /// Creates an input with statutory defaults: no seniority, 15 aguinaldo
    /// days, statutory premium rate and no payroll tax.
    pub fn new(gross_pay: Decimal, pay_period: PayPeriod) -> Self {
        Self {
            gross_pay,
            pay_period,
            years_of_service: 0,
            annual_bonus_days: default_annual_bonus_days(),
            vacation_premium_rate: None,
            payroll_tax_rate: Decimal::ZERO,
        }
    }

    /// Sets the completed years of service.
    pub fn with_years_of_service(mut self, years: u32) -> Self {
        self.years_of_service = years;
        self
    }

    /// Sets the aguinaldo days.
    pub fn with_annual_bonus_days(mut self, days: Decimal) -> Self {
        self.annual_bonus_days = days;
        self
    }

    /// Sets a contractual vacation premium rate.
    pub fn with_vacation_premium_rate(mut self, rate: Decimal) -> Self {
        self.vacation_premium_rate = Some(rate);
        self
    }

    /// Sets the state payroll tax rate in percent.
    pub fn with_payroll_tax_rate(mut self, rate: Decimal) -> Self {
        self.payroll_tax_rate = rate;
        self
    }

    /// The premium rate actually applied: the contractual rate, but never
    /// below `statutory_rate`.
    pub fn effective_premium_rate(&self, statutory_rate: Decimal) -> Decimal {
        match self.vacation_premium_rate {
            Some(rate) if rate > statutory_rate => rate,
            _ => statutory_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_full_input() {
        let json = r#"{
            "gross_pay": "5000",
            "pay_period": "weekly",
            "years_of_service": 3,
            "annual_bonus_days": "30",
            "vacation_premium_rate": "0.5",
            "payroll_tax_rate": "3"
        }"#;

        let input: CompensationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.gross_pay, dec("5000"));
        assert_eq!(input.pay_period, PayPeriod::Weekly);
        assert_eq!(input.years_of_service, 3);
        assert_eq!(input.annual_bonus_days, dec("30"));
        assert_eq!(input.vacation_premium_rate, Some(dec("0.5")));
        assert_eq!(input.payroll_tax_rate, dec("3"));
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let json = r#"{"gross_pay": "12000", "pay_period": "monthly"}"#;

        let input: CompensationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.years_of_service, 0);
        assert_eq!(input.annual_bonus_days, dec("15"));
        assert_eq!(input.vacation_premium_rate, None);
        assert_eq!(input.payroll_tax_rate, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_unknown_period_fails() {
        let json = r#"{"gross_pay": "12000", "pay_period": "daily"}"#;
        let result: Result<CompensationInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_negative_years_fails() {
        let json = r#"{"gross_pay": "12000", "pay_period": "monthly", "years_of_service": -1}"#;
        let result: Result<CompensationInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_fractional_years_fails() {
        let json = r#"{"gross_pay": "12000", "pay_period": "monthly", "years_of_service": 2.5}"#;
        let result: Result<CompensationInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_effective_premium_rate_defaults_to_statutory() {
        let input = CompensationInput::new(dec("5000"), PayPeriod::Monthly);
        assert_eq!(input.effective_premium_rate(dec("0.25")), dec("0.25"));
    }

    #[test]
    fn test_effective_premium_rate_never_below_statutory() {
        let input = CompensationInput::new(dec("5000"), PayPeriod::Monthly)
            .with_vacation_premium_rate(dec("0.10"));
        assert_eq!(input.effective_premium_rate(dec("0.25")), dec("0.25"));
    }

    #[test]
    fn test_effective_premium_rate_uses_higher_contractual_rate() {
        let input = CompensationInput::new(dec("5000"), PayPeriod::Monthly)
            .with_vacation_premium_rate(dec("0.50"));
        assert_eq!(input.effective_premium_rate(dec("0.25")), dec("0.50"));
    }

    #[test]
    fn test_builder_sets_fields() {
        let input = CompensationInput::new(dec("5000"), PayPeriod::Biweekly)
            .with_years_of_service(7)
            .with_annual_bonus_days(dec("20"))
            .with_payroll_tax_rate(dec("2.5"));
        assert_eq!(input.years_of_service, 7);
        assert_eq!(input.annual_bonus_days, dec("20"));
        assert_eq!(input.payroll_tax_rate, dec("2.5"));
    }
}
