//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax-year
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{BracketsFile, TaxYearConfig, TaxYearFile, VacationScheduleFile};

/// Loads and provides access to a tax-year configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/mx2024/
/// ├── tax_year.yaml          # Metadata and rate set
/// ├── isr_brackets.yaml      # Monthly ISR table
/// └── vacation_schedule.yaml # Years of service -> vacation days
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/mx2024").unwrap();
/// println!("Loaded tax year: {}", loader.config().metadata().year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxYearConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A table or rate violates its invariants
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tax_year = Self::load_yaml::<TaxYearFile>(&path.join("tax_year.yaml"))?;
        let brackets = Self::load_yaml::<BracketsFile>(&path.join("isr_brackets.yaml"))?;
        let vacation =
            Self::load_yaml::<VacationScheduleFile>(&path.join("vacation_schedule.yaml"))?;

        let config = TaxYearConfig::new(
            tax_year.metadata,
            tax_year.rates,
            brackets.brackets,
            vacation.steps,
        )?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: TaxYearConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying tax-year configuration.
    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> TaxYearConfig {
        self.config
    }
}
