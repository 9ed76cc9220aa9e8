//! Progressive income-tax (ISR) bracket table.
//!
//! A bracket applies from its `lower_bound` up to the next bracket's lower
//! bound. Lookup picks the bracket with the greatest lower bound that does
//! not exceed the monthly gross.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One row of the progressive ISR table.
///
/// # Example
///
/// ```
/// use payroll_engine::tables::TaxBracket;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let bracket = TaxBracket {
///     lower_bound: Decimal::from_str("746.05").unwrap(),
///     base_amount: Decimal::from_str("14.32").unwrap(),
///     marginal_rate: Decimal::from_str("6.40").unwrap(),
/// };
/// assert_eq!(
///     bracket.withholding(Decimal::from_str("5000").unwrap()),
///     Decimal::from_str("286.5728").unwrap()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Monthly gross threshold where this bracket starts (inclusive).
    pub lower_bound: Decimal,
    /// Fixed tax owed on everything below `lower_bound`.
    pub base_amount: Decimal,
    /// Percent applied to the excess above `lower_bound` (e.g. 6.40 for 6.4%).
    pub marginal_rate: Decimal,
}

impl TaxBracket {
    /// Tax withheld for a monthly gross falling in this bracket.
    pub fn withholding(&self, monthly_gross: Decimal) -> Decimal {
        let excess = monthly_gross - self.lower_bound;
        self.base_amount + excess * self.marginal_rate / Decimal::ONE_HUNDRED
    }
}

/// An ordered, validated set of [`TaxBracket`] rows.
///
/// Construction through [`BracketTable::new`] (or deserialization) enforces
/// that the table is non-empty, strictly ascending by lower bound, and that
/// the first lower bound is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Builds a table, validating its ordering invariants.
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let first = brackets
            .first()
            .ok_or_else(|| EngineError::invalid_config("ISR bracket table is empty"))?;

        if first.lower_bound <= Decimal::ZERO {
            return Err(EngineError::invalid_config(format!(
                "first ISR bracket must start above zero, found {}",
                first.lower_bound
            )));
        }

        for pair in brackets.windows(2) {
            if pair[1].lower_bound <= pair[0].lower_bound {
                return Err(EngineError::invalid_config(format!(
                    "ISR brackets must be strictly ascending: {} follows {}",
                    pair[1].lower_bound, pair[0].lower_bound
                )));
            }
        }

        Ok(Self { brackets })
    }

    /// The 2024 monthly ISR table (Anexo 8 RMF 2024).
    pub fn mexico_2024_monthly() -> Self {
        let row = |lower: i64, base: i64, rate: i64| TaxBracket {
            lower_bound: Decimal::new(lower, 2),
            base_amount: Decimal::new(base, 2),
            marginal_rate: Decimal::new(rate, 2),
        };

        Self {
            brackets: vec![
                row(1, 0, 192),
                row(74605, 1432, 640),
                row(633206, 37183, 1088),
                row(1112802, 89363, 1600),
                row(1293583, 118288, 1792),
                row(1548772, 164018, 2136),
                row(3123650, 500412, 2352),
                row(4923301, 923689, 3000),
                row(9399391, 2266517, 3200),
                row(12532546, 3269118, 3400),
                row(37597630, 11791243, 3500),
            ],
        }
    }

    /// Selects the bracket with the greatest lower bound not exceeding
    /// `monthly_gross`.
    ///
    /// Returns `None` only when `monthly_gross` is below the first lower
    /// bound, which for a valid table means zero or negative gross.
    pub fn bracket_for(&self, monthly_gross: Decimal) -> Option<&TaxBracket> {
        self.brackets
            .iter()
            .rfind(|b| b.lower_bound <= monthly_gross)
    }

    /// Returns the rows in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

impl TryFrom<Vec<TaxBracket>> for BracketTable {
    type Error = EngineError;

    fn try_from(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        Self::new(brackets)
    }
}

impl From<BracketTable> for Vec<TaxBracket> {
    fn from(table: BracketTable) -> Self {
        table.brackets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(lower: &str, base: &str, rate: &str) -> TaxBracket {
        TaxBracket {
            lower_bound: dec(lower),
            base_amount: dec(base),
            marginal_rate: dec(rate),
        }
    }

    #[test]
    fn test_2024_table_has_eleven_rows() {
        let table = BracketTable::mexico_2024_monthly();
        assert_eq!(table.brackets().len(), 11);
        assert_eq!(table.brackets()[0].lower_bound, dec("0.01"));
        assert_eq!(table.brackets()[10].marginal_rate, dec("35.00"));
    }

    #[test]
    fn test_2024_table_passes_validation() {
        let table = BracketTable::mexico_2024_monthly();
        assert!(BracketTable::new(table.brackets().to_vec()).is_ok());
    }

    #[test]
    fn test_bracket_for_5000_is_second_row() {
        let table = BracketTable::mexico_2024_monthly();
        let bracket = table.bracket_for(dec("5000")).unwrap();
        assert_eq!(bracket.lower_bound, dec("746.05"));
        assert_eq!(bracket.base_amount, dec("14.32"));
    }

    #[test]
    fn test_bracket_for_exact_lower_bound_selects_that_bracket() {
        let table = BracketTable::mexico_2024_monthly();
        let bracket = table.bracket_for(dec("6332.06")).unwrap();
        assert_eq!(bracket.lower_bound, dec("6332.06"));
    }

    #[test]
    fn test_bracket_for_just_below_lower_bound_selects_previous() {
        let table = BracketTable::mexico_2024_monthly();
        let bracket = table.bracket_for(dec("6332.05")).unwrap();
        assert_eq!(bracket.lower_bound, dec("746.05"));
    }

    #[test]
    fn test_bracket_for_minimum_positive_gross() {
        let table = BracketTable::mexico_2024_monthly();
        let bracket = table.bracket_for(dec("0.01")).unwrap();
        assert_eq!(bracket.marginal_rate, dec("1.92"));
    }

    #[test]
    fn test_bracket_for_very_high_income_selects_top_row() {
        let table = BracketTable::mexico_2024_monthly();
        let bracket = table.bracket_for(dec("1000000")).unwrap();
        assert_eq!(bracket.lower_bound, dec("375976.30"));
    }

    #[test]
    fn test_bracket_for_zero_has_no_bracket() {
        let table = BracketTable::mexico_2024_monthly();
        assert!(table.bracket_for(Decimal::ZERO).is_none());
        assert!(table.bracket_for(dec("-100")).is_none());
    }

    #[test]
    fn test_withholding_at_lower_bound_is_base_amount() {
        let b = bracket("11128.02", "893.63", "16.00");
        assert_eq!(b.withholding(dec("11128.02")), dec("893.63"));
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let result = BracketTable::new(vec![]);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_zero_first_lower_bound_is_rejected() {
        let result = BracketTable::new(vec![bracket("0", "0", "1.92")]);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_unsorted_table_is_rejected() {
        let result = BracketTable::new(vec![
            bracket("0.01", "0", "1.92"),
            bracket("6332.06", "371.83", "10.88"),
            bracket("746.05", "14.32", "6.40"),
        ]);
        match result {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("strictly ascending"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_validates_table() {
        let json = r#"[
            {"lower_bound": "746.05", "base_amount": "14.32", "marginal_rate": "6.40"},
            {"lower_bound": "0.01", "base_amount": "0", "marginal_rate": "1.92"}
        ]"#;
        let result: Result<BracketTable, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_valid_table() {
        let json = r#"[
            {"lower_bound": "0.01", "base_amount": "0", "marginal_rate": "1.92"},
            {"lower_bound": "746.05", "base_amount": "14.32", "marginal_rate": "6.40"}
        ]"#;
        let table: BracketTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.brackets().len(), 2);
    }
}
