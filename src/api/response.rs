//! Response types for the payroll engine API.
//!
//! This module defines the success envelope, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::export::format_mxn;
use crate::models::{BreakdownEntry, PayrollResult};

/// Success body of the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The fiscal year of the tables used.
    pub tax_year: i32,
    /// The payroll figures and audit trace.
    pub result: PayrollResult,
    /// Net, ISR and worker IMSS shares of the monthly gross.
    pub breakdown: Vec<BreakdownEntry>,
    /// Headline figures formatted as pesos for display.
    pub formatted: FormattedSummary,
}

impl CalculationResponse {
    /// Wraps a result in a fresh envelope.
    pub fn new(calculation_id: Uuid, tax_year: i32, result: PayrollResult) -> Self {
        Self {
            calculation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            tax_year,
            breakdown: result.breakdown(),
            formatted: FormattedSummary::from_result(&result),
            result,
        }
    }
}

/// Headline monthly and annual figures as MXN display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSummary {
    /// Monthly gross, e.g. `$5,000.00`.
    pub gross_monthly: String,
    /// Monthly net.
    pub net_monthly: String,
    /// Monthly ISR.
    pub isr: String,
    /// Monthly worker IMSS.
    pub imss_worker: String,
    /// Total monthly employer cost.
    pub employer_total_monthly: String,
    /// Annual net including benefits.
    pub net_annual: String,
    /// Total annual employer cost.
    pub employer_total_annual: String,
}

impl FormattedSummary {
    /// Formats the headline figures of a result.
    pub fn from_result(result: &PayrollResult) -> Self {
        Self {
            gross_monthly: format_mxn(result.gross_monthly),
            net_monthly: format_mxn(result.net_monthly),
            isr: format_mxn(result.isr),
            imss_worker: format_mxn(result.imss_worker),
            employer_total_monthly: format_mxn(result.employer_cost.total_monthly),
            net_annual: format_mxn(result.net_annual),
            employer_total_annual: format_mxn(result.employer_cost.total_annual),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing content type error response.
    pub fn missing_content_type() -> Self {
        Self::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input field '{}': {}", field, message),
                    field,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_envelope_carries_breakdown_and_formatted_figures() {
        use crate::calculation::calculate_payroll;
        use crate::config::TaxYearConfig;
        use crate::models::{CompensationInput, PayPeriod};
        use rust_decimal::Decimal;

        let input = CompensationInput::new(Decimal::from(5000), PayPeriod::Monthly)
            .with_years_of_service(1)
            .with_payroll_tax_rate(Decimal::from(3));
        let result = calculate_payroll(&input, &TaxYearConfig::mexico_2024());
        let response = CalculationResponse::new(Uuid::new_v4(), 2024, result);

        assert_eq!(response.breakdown.len(), 3);
        assert_eq!(response.breakdown[0].name, "Sueldo Neto");
        assert_eq!(response.formatted.gross_monthly, "$5,000.00");
        assert_eq!(response.formatted.net_monthly, "$4,571.77");
        assert_eq!(response.formatted.employer_total_annual, "$82,647.59");
    }

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let engine_error = EngineError::invalid_input("gross_pay", "must be greater than zero");
        let api_error: ApiErrorResponse = engine_error.into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("gross_pay"));
        assert_eq!(api_error.error.details.as_deref(), Some("gross_pay"));
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let errors = vec![
            EngineError::ConfigNotFound {
                path: "missing.yaml".to_string(),
            },
            EngineError::ConfigParseError {
                path: "bad.yaml".to_string(),
                message: "unexpected key".to_string(),
            },
            EngineError::invalid_config("brackets must not be empty"),
        ];

        for engine_error in errors {
            let api_error: ApiErrorResponse = engine_error.into();
            assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api_error.error.code, "CONFIG_ERROR");
        }
    }
}
