//! Core data models for the payroll engine.
//!
//! This module contains the input and output records of a payroll
//! calculation.

mod compensation_input;
mod pay_period;
mod payroll_result;

pub use compensation_input::CompensationInput;
pub use pay_period::PayPeriod;
pub use payroll_result::{
    AuditStep, AuditTrace, AuditWarning, BreakdownEntry, EmployerCost, PayrollResult,
};
