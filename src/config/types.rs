//! Configuration types for a payroll tax year.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. One [`TaxYearConfig`]
//! holds everything that changes from one tax year to the next.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::tables::{BracketTable, VacationSchedule};

/// Identifying information about a tax-year configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearMetadata {
    /// Fiscal year the tables apply to.
    pub year: i32,
    /// Jurisdiction code (e.g., "MX").
    pub jurisdiction: String,
    /// Date from which these tables are in force.
    pub effective_date: NaiveDate,
    /// Where the figures were published.
    pub source_url: String,
}

/// Named rates and constants used by the payroll formulas.
///
/// All fractions are expressed as decimals (0.027 for 2.7%), except where a
/// field name says otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Average days per month used to normalize pay (30.4).
    pub days_per_month: Decimal,
    /// Days per year used by the integration factor (365).
    pub days_per_year: Decimal,
    /// Worker IMSS contribution rate on the monthly contribution base.
    pub imss_worker_rate: Decimal,
    /// Aggregate employer IMSS contribution rate.
    pub imss_employer_rate: Decimal,
    /// Employer INFONAVIT housing-fund rate.
    pub infonavit_rate: Decimal,
    /// Statutory minimum vacation premium rate (LFT art. 80).
    pub vacation_premium_rate: Decimal,
    /// Daily value of the UMA reference unit.
    pub reference_unit_value: Decimal,
    /// Number of reference units the daily contribution base is capped at.
    pub contribution_cap_multiplier: Decimal,
    /// Multiplier applied to bonus and premium payouts for the employer's
    /// added social-security load.
    pub benefit_load_factor: Decimal,
    /// General daily minimum wage.
    pub minimum_daily_wage: Decimal,
}

impl RateConfig {
    /// The 2024 federal rate set.
    pub fn mexico_2024() -> Self {
        Self {
            days_per_month: Decimal::new(304, 1),
            days_per_year: Decimal::new(365, 0),
            imss_worker_rate: Decimal::new(27, 3),
            imss_employer_rate: Decimal::new(22, 2),
            infonavit_rate: Decimal::new(5, 2),
            vacation_premium_rate: Decimal::new(25, 2),
            reference_unit_value: Decimal::new(10857, 2),
            contribution_cap_multiplier: Decimal::new(25, 0),
            benefit_load_factor: Decimal::new(13, 1),
            minimum_daily_wage: Decimal::new(24893, 2),
        }
    }

    /// Checks that divisors are positive and no rate is negative.
    pub fn validate(&self) -> EngineResult<()> {
        let positive = [
            ("days_per_month", self.days_per_month),
            ("days_per_year", self.days_per_year),
            ("contribution_cap_multiplier", self.contribution_cap_multiplier),
            ("reference_unit_value", self.reference_unit_value),
        ];
        for (name, value) in positive {
            if value <= Decimal::ZERO {
                return Err(EngineError::invalid_config(format!(
                    "{} must be greater than zero, found {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("imss_worker_rate", self.imss_worker_rate),
            ("imss_employer_rate", self.imss_employer_rate),
            ("infonavit_rate", self.infonavit_rate),
            ("vacation_premium_rate", self.vacation_premium_rate),
            ("benefit_load_factor", self.benefit_load_factor),
            ("minimum_daily_wage", self.minimum_daily_wage),
        ];
        for (name, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::invalid_config(format!(
                    "{} must not be negative, found {}",
                    name, value
                )));
            }
        }

        if self.vacation_premium_rate > Decimal::ONE {
            return Err(EngineError::invalid_config(format!(
                "vacation_premium_rate must be a fraction, found {}",
                self.vacation_premium_rate
            )));
        }

        Ok(())
    }

    /// Monthly cap on the worker IMSS contribution: the contribution owed
    /// on a daily base of `contribution_cap_multiplier` reference units.
    pub fn imss_worker_cap(&self) -> Decimal {
        self.contribution_cap_multiplier
            * self.reference_unit_value
            * self.days_per_month
            * self.imss_worker_rate
    }
}

/// Everything needed to run the payroll formulas for one tax year.
///
/// Swapping this value is the only thing required to support a new year:
/// the calculation functions take it as an explicit parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxYearConfig {
    metadata: TaxYearMetadata,
    rates: RateConfig,
    brackets: BracketTable,
    vacation_schedule: VacationSchedule,
}

impl TaxYearConfig {
    /// Creates a new configuration from its component parts.
    ///
    /// The tables validate themselves on construction; the rate set is
    /// validated here.
    pub fn new(
        metadata: TaxYearMetadata,
        rates: RateConfig,
        brackets: BracketTable,
        vacation_schedule: VacationSchedule,
    ) -> EngineResult<Self> {
        rates.validate()?;
        Ok(Self {
            metadata,
            rates,
            brackets,
            vacation_schedule,
        })
    }

    /// The built-in 2024 Mexican federal configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::TaxYearConfig;
    ///
    /// let config = TaxYearConfig::mexico_2024();
    /// assert_eq!(config.metadata().year, 2024);
    /// assert_eq!(config.vacation_schedule().vacation_days(1), 12);
    /// ```
    pub fn mexico_2024() -> Self {
        Self {
            metadata: TaxYearMetadata {
                year: 2024,
                jurisdiction: "MX".to_string(),
                effective_date: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap_or(NaiveDate::MIN),
                source_url: "https://www.dof.gob.mx/".to_string(),
            },
            rates: RateConfig::mexico_2024(),
            brackets: BracketTable::mexico_2024_monthly(),
            vacation_schedule: VacationSchedule::mexico_2024(),
        }
    }

    /// Returns the tax-year metadata.
    pub fn metadata(&self) -> &TaxYearMetadata {
        &self.metadata
    }

    /// Returns the rate set.
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Returns the ISR bracket table.
    pub fn brackets(&self) -> &BracketTable {
        &self.brackets
    }

    /// Returns the vacation schedule.
    pub fn vacation_schedule(&self) -> &VacationSchedule {
        &self.vacation_schedule
    }
}

/// Layout of `tax_year.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxYearFile {
    /// Tax-year metadata.
    pub metadata: TaxYearMetadata,
    /// Rate set.
    pub rates: RateConfig,
}

/// Layout of `isr_brackets.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BracketsFile {
    /// The monthly ISR table.
    pub brackets: BracketTable,
}

/// Layout of `vacation_schedule.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct VacationScheduleFile {
    /// The vacation steps.
    pub steps: VacationSchedule,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_2024_rates_pass_validation() {
        assert!(RateConfig::mexico_2024().validate().is_ok());
    }

    #[test]
    fn test_2024_rate_values() {
        let rates = RateConfig::mexico_2024();
        assert_eq!(rates.days_per_month, dec("30.4"));
        assert_eq!(rates.imss_worker_rate, dec("0.027"));
        assert_eq!(rates.imss_employer_rate, dec("0.22"));
        assert_eq!(rates.infonavit_rate, dec("0.05"));
        assert_eq!(rates.vacation_premium_rate, dec("0.25"));
        assert_eq!(rates.reference_unit_value, dec("108.57"));
        assert_eq!(rates.benefit_load_factor, dec("1.3"));
    }

    #[test]
    fn test_imss_worker_cap_is_25_umas() {
        // 25 x 108.57 x 30.4 x 0.027
        let rates = RateConfig::mexico_2024();
        assert_eq!(rates.imss_worker_cap(), dec("2227.8564"));
    }

    #[test]
    fn test_zero_days_per_month_is_rejected() {
        let mut rates = RateConfig::mexico_2024();
        rates.days_per_month = Decimal::ZERO;
        match rates.validate() {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("days_per_month"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let mut rates = RateConfig::mexico_2024();
        rates.infonavit_rate = dec("-0.05");
        assert!(rates.validate().is_err());
    }

    #[test]
    fn test_premium_rate_above_one_is_rejected() {
        let mut rates = RateConfig::mexico_2024();
        rates.vacation_premium_rate = dec("25");
        assert!(rates.validate().is_err());
    }

    #[test]
    fn test_new_rejects_invalid_rates() {
        let base = TaxYearConfig::mexico_2024();
        let mut rates = base.rates().clone();
        rates.days_per_year = Decimal::ZERO;

        let result = TaxYearConfig::new(
            base.metadata().clone(),
            rates,
            base.brackets().clone(),
            base.vacation_schedule().clone(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_builtin_config_metadata() {
        let config = TaxYearConfig::mexico_2024();
        assert_eq!(config.metadata().jurisdiction, "MX");
        assert_eq!(
            config.metadata().effective_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }
}
