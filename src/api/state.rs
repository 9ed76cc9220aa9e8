//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, TaxYearConfig};

/// Shared application state.
///
/// Holds the loaded tax-year configuration. It is read-only, so handlers
/// share it through an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn loader(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the tax-year configuration.
    pub fn config(&self) -> &TaxYearConfig {
        self.config.config()
    }
}
