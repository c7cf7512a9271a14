//! HTTP request handlers for the tax engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::recompute;
use crate::error::EngineResult;
use crate::models::{CalculationResult, CalculatorState};
use crate::presentation::summary_text;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/summary", post(summary_handler))
        .route("/schedule", get(schedule_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: crate::error::EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Builds calculator state from a request and recomputes it.
fn run_calculation(
    state: &AppState,
    request: CalculationRequest,
) -> EngineResult<(CalculatorState, CalculationResult)> {
    let config = state.config();
    let calculator_state = request.into_state(config.vat().default_rate);
    let result = recompute(&calculator_state, config.schedule())?;
    Ok((calculator_state, result))
}

/// Handler for POST /calculate.
///
/// Returns the full calculation result with its audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match run_calculation(&state, request) {
        Ok((calculator_state, result)) => {
            info!(
                correlation_id = %correlation_id,
                gross_amount = calculator_state.gross_amount,
                withholding_rate = %result.rates.withholding_rate,
                scenario = ?result.highlighted_scenario,
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /summary.
///
/// Returns the plain-text summary for the same request body as `/calculate`.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match run_calculation(&state, request) {
        Ok((calculator_state, result)) => {
            let text = summary_text(
                &result.breakdown,
                calculator_state.rate_selection.transaction_type,
                result.rates.vat_rate,
                result.rates.withholding_rate,
            );
            info!(correlation_id = %correlation_id, "Summary rendered");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                text,
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /schedule.
async fn schedule_handler(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(state.config().schedule().clone()),
    )
        .into_response()
}
