//! Pay period model.
//!
//! A closed enumeration of the pay frequencies the engine understands.
//! Anything else is rejected at the boundary instead of falling back to
//! monthly.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The frequency a gross pay amount is stated in.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
///
/// let period: PayPeriod = "biweekly".parse().unwrap();
/// assert_eq!(period, PayPeriod::Biweekly);
/// assert!("fortnightly".parse::<PayPeriod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayPeriod {
    /// Paid every week (semanal).
    Weekly,
    /// Paid twice a month (quincenal).
    Biweekly,
    /// Paid once a month (mensual).
    Monthly,
}

impl PayPeriod {
    /// All supported periods.
    pub const ALL: [PayPeriod; 3] = [PayPeriod::Weekly, PayPeriod::Biweekly, PayPeriod::Monthly];

    /// Returns the wire name of the period.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayPeriod::Weekly => "weekly",
            PayPeriod::Biweekly => "biweekly",
            PayPeriod::Monthly => "monthly",
        }
    }

    /// Spanish label used in exported spreadsheets.
    pub fn label(&self) -> &'static str {
        match self {
            PayPeriod::Weekly => "Semanal",
            PayPeriod::Biweekly => "Quincenal",
            PayPeriod::Monthly => "Mensual",
        }
    }

    /// Number of periods of this kind in one month.
    ///
    /// Dividing a monthly figure by this value gives the per-period figure.
    /// Weekly uses `days_per_month / 7`.
    pub fn periods_per_month(&self, days_per_month: Decimal) -> Decimal {
        match self {
            PayPeriod::Weekly => days_per_month / Decimal::from(7),
            PayPeriod::Biweekly => Decimal::TWO,
            PayPeriod::Monthly => Decimal::ONE,
        }
    }

    /// Converts an amount stated in this period into a monthly amount.
    ///
    /// Weekly pay is converted through a daily figure (`x / 7 × days_per_month`)
    /// so the result matches the published formula digit for digit.
    pub fn to_monthly(&self, amount: Decimal, days_per_month: Decimal) -> Decimal {
        match self {
            PayPeriod::Weekly => amount / Decimal::from(7) * days_per_month,
            PayPeriod::Biweekly => amount * Decimal::TWO,
            PayPeriod::Monthly => amount,
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts exactly the wire names serde accepts, with no trimming or case
/// folding.
impl FromStr for PayPeriod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(PayPeriod::Weekly),
            "biweekly" => Ok(PayPeriod::Biweekly),
            "monthly" => Ok(PayPeriod::Monthly),
            other => Err(EngineError::invalid_input(
                "pay_period",
                format!("unknown pay period '{}', expected weekly, biweekly or monthly", other),
            )),
        }
    }
}
