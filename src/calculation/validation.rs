//! Input validation.
//!
//! The calculation functions produce nonsense for nonsense, and decimal
//! arithmetic overflows on amounts near `Decimal::MAX`. This module is the
//! boundary check that rejects malformed or out-of-range
//! [`CompensationInput`] values before they reach the engine.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::CompensationInput;

/// Largest accepted gross pay per period: one trillion pesos.
///
/// Keeps every product in the engine (weekly scaling, ×12 annualisation,
/// benefit days, employer load) far below `Decimal::MAX`.
pub const MAX_GROSS_PAY: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Largest accepted aguinaldo entitlement, in days.
pub const MAX_ANNUAL_BONUS_DAYS: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// Validates a compensation input.
///
/// Rejects:
/// - `gross_pay` of zero or below, or above [`MAX_GROSS_PAY`]
/// - `annual_bonus_days` outside `[0, 365]`
/// - `vacation_premium_rate` outside `[0, 1]`
/// - `payroll_tax_rate` outside `[0, 100]`
///
/// Pay period and years of service are already constrained by their types.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::validate_input;
/// use payroll_engine::models::{CompensationInput, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let valid = CompensationInput::new(Decimal::from(5000), PayPeriod::Monthly);
/// assert!(validate_input(&valid).is_ok());
///
/// let zero = CompensationInput::new(Decimal::ZERO, PayPeriod::Monthly);
/// assert!(validate_input(&zero).is_err());
/// ```
pub fn validate_input(input: &CompensationInput) -> EngineResult<()> {
    if input.gross_pay <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "gross_pay",
            format!("must be greater than zero, found {}", input.gross_pay),
        ));
    }

    if input.gross_pay > MAX_GROSS_PAY {
        return Err(EngineError::invalid_input(
            "gross_pay",
            format!("must not exceed {}, found {}", MAX_GROSS_PAY, input.gross_pay),
        ));
    }

    if input.annual_bonus_days < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "annual_bonus_days",
            format!("must not be negative, found {}", input.annual_bonus_days),
        ));
    }

    if input.annual_bonus_days > MAX_ANNUAL_BONUS_DAYS {
        return Err(EngineError::invalid_input(
            "annual_bonus_days",
            format!(
                "must not exceed {} days, found {}",
                MAX_ANNUAL_BONUS_DAYS, input.annual_bonus_days
            ),
        ));
    }

    if let Some(rate) = input.vacation_premium_rate {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(EngineError::invalid_input(
                "vacation_premium_rate",
                format!("must be a fraction between 0 and 1, found {}", rate),
            ));
        }
    }

    if input.payroll_tax_rate < Decimal::ZERO || input.payroll_tax_rate > Decimal::ONE_HUNDRED {
        return Err(EngineError::invalid_input(
            "payroll_tax_rate",
            format!(
                "must be a percentage between 0 and 100, found {}",
                input.payroll_tax_rate
            ),
        ));
    }

    Ok(())
}
