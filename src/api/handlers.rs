//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_validated;
use crate::export::SpreadsheetExport;
use crate::models::{CompensationInput, PayrollResult};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Content type of the `/export` response.
const TSV_CONTENT_TYPE: &str = "text/tab-separated-values; charset=utf-8";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/export", post(export_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts compensation details and returns the payroll result with its
/// audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let input = match parse_request(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match run_calculation(&state, &input, correlation_id) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                pay_period = %input.pay_period,
                gross_monthly = %result.gross_monthly,
                net_monthly = %result.net_monthly,
                warnings = result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            let body =
                CalculationResponse::new(correlation_id, state.config().metadata().year, result);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(response) => response,
    }
}

/// Handler for POST /export endpoint.
///
/// Accepts the same body as `/calculate` and returns the header and data
/// rows as tab-separated text.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let input = match parse_request(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    match run_calculation(&state, &input, correlation_id) {
        Ok(result) => {
            let export = SpreadsheetExport::from_result(
                &result,
                input.pay_period,
                state.config().rates().days_per_month,
            );
            info!(
                correlation_id = %correlation_id,
                pay_period = %input.pay_period,
                "Export completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, TSV_CONTENT_TYPE)],
                export.to_clipboard_text(),
            )
                .into_response()
        }
        Err(response) => response,
    }
}

/// Validates and calculates, logging and mapping any engine error.
fn run_calculation(
    state: &AppState,
    input: &CompensationInput,
    correlation_id: Uuid,
) -> Result<PayrollResult, Response> {
    calculate_validated(input, state.config()).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Calculation rejected"
        );
        error_response(err.into())
    })
}

/// Converts the JSON extractor result into a domain input or an error
/// response.
fn parse_request(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<CompensationInput, Response> {
    match payload {
        Ok(Json(request)) => Ok(request.into()),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Well-formed JSON with the wrong shape: a missing field,
                    // an unknown pay period, a negative or fractional year.
                    if body_text.contains("missing field")
                        || body_text.contains("unknown variant")
                        || body_text.contains("invalid value")
                        || body_text.contains("invalid type")
                    {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(error_response(ApiErrorResponse::bad_request(error)))
        }
    }
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
