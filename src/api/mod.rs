//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for calculating payroll and
//! exporting results as spreadsheet rows.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, FormattedSummary};
pub use state::AppState;
