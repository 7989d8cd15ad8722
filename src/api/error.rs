//! API error handling
//!
//! Every failed request answers with a JSON [`ApiError`] body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::simple_types::ValidationError;
use crate::zone::ShippingError;

// =============================================================================
// API Error
// =============================================================================

/// JSON error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Field-level errors for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Creates an error without field details
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a validation error with field-level details
    #[must_use]
    pub fn validation(message: impl Into<String>, details: Vec<FieldError>) -> Self {
        Self {
            code: "VALIDATION_ERROR".to_string(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// A single invalid field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the field, as sent by the client
    pub field: String,
    /// What is wrong with it
    pub message: String,
}

impl FieldError {
    /// Creates a field error
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<&ValidationError> for FieldError {
    fn from(error: &ValidationError) -> Self {
        Self::new(error.field_name.clone(), error.message.clone())
    }
}

// =============================================================================
// API Error Response
// =============================================================================

/// Status code plus error body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Error body
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates an error response
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// 400 Bad Request with field details
    #[must_use]
    pub fn validation_error(message: impl Into<String>, details: Vec<FieldError>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiError::validation(message, details),
        )
    }

    /// 404 Not Found
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", message))
    }

    /// 500 Internal Server Error
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("INTERNAL_ERROR", message),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ValidationError> for ApiErrorResponse {
    fn from(error: ValidationError) -> Self {
        Self::validation_error("Invalid input", vec![FieldError::from(&error)])
    }
}

impl From<ShippingError> for ApiErrorResponse {
    fn from(error: ShippingError) -> Self {
        match error {
            ShippingError::InvalidInput(validation) => validation.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
