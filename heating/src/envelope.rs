//! JSON response envelopes for the calculation API.
//!
//! Success: `{ "success": true, "data": ... }`.
//! Failure: `{ "success": false, "error": "...", "details"?: [...], "message"?: "..." }`.

use serde::{Deserialize, Serialize};

use crate::catalog::BudgetSummary;
use crate::model::CalculationOutput;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self { field: field.to_owned(), message: message.into() }
    }
}

/// Calculation result merged with its materials budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationData {
    #[serde(flatten)]
    pub calculation: CalculationOutput,
    #[serde(rename = "presupuesto")]
    pub budget: BudgetSummary,
}

/// Successful response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Success<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Success<T> {
    pub fn new(data: T) -> Self {
        Self { success: true, data }
    }
}

/// Failure response wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Failure {
    #[must_use]
    pub fn validation(details: Vec<FieldError>) -> Self {
        Self { success: false, error: "Validation Error".to_owned(), details: Some(details), message: None }
    }

    #[must_use]
    pub fn with_message(error: &str, message: impl Into<String>) -> Self {
        Self { success: false, error: error.to_owned(), details: None, message: Some(message.into()) }
    }
}

/// `GET /health` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}
