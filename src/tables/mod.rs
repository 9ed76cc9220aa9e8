//! Statutory lookup tables.
//!
//! The progressive ISR bracket table and the seniority-based vacation
//! schedule. Both are plain values owned by a [`crate::config::TaxYearConfig`]
//! and passed explicitly into every calculation.

mod bracket_table;
mod vacation_schedule;

pub use bracket_table::{BracketTable, TaxBracket};
pub use vacation_schedule::{VacationSchedule, VacationStep};
