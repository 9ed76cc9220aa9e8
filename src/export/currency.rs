//! MXN currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as Mexican pesos: `$1,234.57`.
///
/// Two decimals, thousands separated by commas, rounded half away from
/// zero. Negative amounts carry a leading minus: `-$1,234.57`.
///
/// # Examples
///
/// ```
/// use payroll_engine::export::format_mxn;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_mxn(Decimal::from_str("4571.7697").unwrap()), "$4,571.77");
/// assert_eq!(format_mxn(Decimal::from_str("-8.5").unwrap()), "-$8.50");
/// ```
pub fn format_mxn(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}
