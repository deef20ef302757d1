//! Underfloor heating calculation route.
//!
//! The handler takes the raw JSON value so validation can report every field
//! at once; see `services::validate`. Calculation and budget run inline, they
//! are pure and fast enough not to need a blocking task.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use heating::Catalog;
use heating::envelope::{CalculationData, Failure, FieldError, Success};
use serde_json::Value;

use crate::config::Environment;
use crate::services::budget::{self, BudgetError};
use crate::services::{calculation, validate};
use crate::state::AppState;

/// Message returned in place of internal error detail outside development.
pub const GENERIC_INTERNAL_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    Capacity(#[from] BudgetError),
    #[error("{0}")]
    Internal(String),
}

pub(crate) fn api_error_to_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        ApiError::Capacity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Failure envelope for `err`. Internal detail is only exposed in development.
pub(crate) fn failure_body(err: ApiError, environment: Environment) -> Failure {
    match err {
        ApiError::Validation(details) => Failure::validation(details),
        ApiError::Capacity(e) => Failure::with_message("Unprocessable Entity", e.to_string()),
        ApiError::Internal(detail) => {
            let message = if environment.exposes_error_detail() { detail } else { GENERIC_INTERNAL_MESSAGE.to_owned() };
            Failure::with_message("Internal Server Error", message)
        }
    }
}

pub(crate) fn error_response(err: ApiError, environment: Environment) -> Response {
    let status = api_error_to_status(&err);
    (status, Json(failure_body(err, environment))).into_response()
}

/// Validate, calculate and price a request body.
///
/// # Errors
///
/// `Validation` for bad input, `Capacity` when no manifold fits.
pub fn run_calculation(body: &Value, catalog: &Catalog) -> Result<CalculationData, ApiError> {
    let input = validate::calculation_input(body).map_err(ApiError::Validation)?;
    let calculation = calculation::calculate(&input);
    let budget = budget::budget(&calculation, input.area, catalog)?;
    Ok(CalculationData { calculation, budget })
}

fn rejection_to_error(rejection: &JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
            ApiError::Validation(vec![FieldError::new(validate::FIELD_BODY, rejection.body_text())])
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::Validation(vec![FieldError::new(
            validate::FIELD_BODY,
            "Expected request with `Content-Type: application/json`",
        )]),
        other => ApiError::Internal(other.body_text()),
    }
}

/// `POST /api/v1/underfloor/calculate` — sizing and materials budget.
pub async fn calculate(State(state): State<AppState>, body: Result<Json<Value>, JsonRejection>) -> Response {
    let result = match body {
        Ok(Json(body)) => run_calculation(&body, &state.catalog),
        Err(rejection) => Err(rejection_to_error(&rejection)),
    };

    match result {
        Ok(data) => {
            tracing::info!(
                circuits = data.calculation.circuit_count,
                total_length = data.calculation.total_length,
                total = data.budget.total,
                "calculation complete"
            );
            (StatusCode::OK, Json(Success::new(data))).into_response()
        }
        Err(err) => {
            match &err {
                ApiError::Validation(details) => tracing::debug!(fields = details.len(), "calculation rejected"),
                ApiError::Capacity(e) => tracing::warn!(error = %e, "calculation exceeds manifold capacity"),
                ApiError::Internal(e) => tracing::error!(error = %e, "calculation failed"),
            }
            error_response(err, state.config.environment)
        }
    }
}

#[cfg(test)]
#[path = "underfloor_test.rs"]
mod tests;
