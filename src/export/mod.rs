//! Export surfaces for payroll results.
//!
//! This module turns a [`PayrollResult`](crate::models::PayrollResult) into
//! spreadsheet-ready text and display strings. Nothing here recalculates:
//! every figure comes straight from the engine output.
//!
//! [`format_mxn`] also renders the `formatted` block of the `/calculate`
//! response.

mod currency;
mod spreadsheet;

pub use currency::format_mxn;
pub use spreadsheet::{COLUMN_COUNT, PeriodAmounts, SpreadsheetExport, to_fixed_2};
