//! Payroll Engine for Mexican Salaried Employees
//!
//! This crate calculates net pay, statutory benefits and total employer cost
//! for a salaried worker under Mexican federal payroll rules (ISR, IMSS,
//! INFONAVIT, state payroll tax), with an audit trace of every formula
//! applied.

#![warn(missing_docs)]

pub mod advisor;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod tables;
