//! Tax-year configuration for the payroll engine.
//!
//! This module provides functionality to load a tax-year configuration from
//! YAML files: metadata, the named rate set, the ISR bracket table and the
//! vacation schedule. A built-in 2024 configuration is also available.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/mx2024").unwrap();
//! println!("Loaded tax year: {}", loader.config().metadata().year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BracketsFile, RateConfig, TaxYearConfig, TaxYearFile, TaxYearMetadata, VacationScheduleFile,
};
