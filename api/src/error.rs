//! Unified error types for the Department API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Business rule and persistence errors raised by ports and services
//! - `AppError`: HTTP boundary errors (wraps domain errors for HTTP responses)

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Message returned for every 500 response; details only go to the log
const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected server error";

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Field-level validation failures keyed by JSON field name
    #[error("Invalid fields: {0:?}")]
    InvalidFields(BTreeMap<String, String>),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let message = errors
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "is invalid".to_string());
                (camel_case(field), message)
            })
            .collect();
        AppError::InvalidFields(fields)
    }
}

/// Validation reports Rust field names; request DTOs are
/// `#[serde(rename_all = "camelCase")]`, so map snake_case to that form
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: u16,
    error: String,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    fn new(status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            timestamp: Utc::now(),
            message: None,
            errors: None,
        }
    }

    fn with_message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::new(status)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Domain(DomainError::NotFound(msg)) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::with_message(StatusCode::NOT_FOUND, msg),
            ),
            AppError::Domain(DomainError::AlreadyExists(msg)) => (
                StatusCode::CONFLICT,
                ErrorResponse::with_message(StatusCode::CONFLICT, msg),
            ),
            AppError::Domain(DomainError::Validation(msg)) | AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_message(StatusCode::BAD_REQUEST, msg),
            ),
            AppError::InvalidFields(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    errors: Some(fields),
                    ..ErrorResponse::new(StatusCode::BAD_REQUEST)
                },
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_message(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        UNEXPECTED_ERROR_MESSAGE,
                    ),
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_message(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        UNEXPECTED_ERROR_MESSAGE,
                    ),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
