//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::{USER_NOT_FOUND_MESSAGE, VALIDATION_FAILED_MESSAGE};

/// Per-field validation messages keyed by wire field name
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Lookup by id matched no record
    #[error("{msg}", msg = USER_NOT_FOUND_MESSAGE)]
    NotFound,

    /// Payload decoded but failed field rules
    #[error("{msg}", msg = VALIDATION_FAILED_MESSAGE)]
    Validation(FieldErrors),

    /// Payload could not be decoded at all
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.user_message();
        let fields = match self {
            AppError::Validation(fields) => Some(fields),
            _ => None,
        };

        (
            status,
            Json(ErrorResponse {
                error: message,
                fields,
            }),
        )
            .into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(field_errors(&errors))
    }
}

/// Flatten validator output into wire-named field messages.
///
/// Rules that fail with the same message on one field are reported once.
pub fn field_errors(errors: &validator::ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let mut messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect();
            messages.dedup();
            (to_camel_case(&field), messages)
        })
        .collect()
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// `first_name` -> `firstName`; already camel-cased names pass through
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_camel_case("lastName"), "lastName");
        assert_eq!(to_camel_case("email"), "email");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Validation(FieldErrors::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let json = body_json(AppError::NotFound.into_response()).await;
        assert_eq!(json, serde_json::json!({ "error": "User not found" }));
    }

    #[tokio::test]
    async fn test_validation_body_lists_fields() {
        let mut fields = FieldErrors::new();
        fields.insert("email".to_string(), vec!["Enter a valid email address".to_string()]);

        let json = body_json(AppError::Validation(fields).into_response()).await;
        assert_eq!(json["error"], "Validation failed");
        assert_eq!(json["fields"]["email"][0], "Enter a valid email address");
    }

    #[tokio::test]
    async fn test_internal_hides_details() {
        let json = body_json(AppError::internal("socket exploded").into_response()).await;
        assert_eq!(json["error"], "An internal error occurred");
    }
}
