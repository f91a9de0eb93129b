//! # HTTP API Errors
//!
//! Maps registry failures and rejected request bodies to HTTP responses.
//! Bodies follow the `{"detail": ...}` shape: a string for lookup
//! failures, a list of field entries for body rejections.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::error::Category;
use thiserror::Error;

use crate::registry::RegistryError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Airline or flight lookup failed
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Request body could not be read as a flight
    #[error("{message}")]
    InvalidBody { kind: &'static str, message: String },
}

impl ApiError {
    /// Body declared with a media type other than JSON
    pub fn not_json(content_type: &str) -> Self {
        ApiError::InvalidBody {
            kind: "content_type",
            message: format!("Expected a JSON body, got content type '{}'", content_type),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Registry(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        let kind = match err.classify() {
            Category::Data => "value_error",
            Category::Syntax | Category::Eof | Category::Io => "json_invalid",
        };

        ApiError::InvalidBody {
            kind,
            message: err.to_string(),
        }
    }
}

/// Body for lookup failures
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

/// One rejected field of a request body
#[derive(Debug, Serialize)]
pub struct ValidationDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body for rejected request bodies
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub detail: Vec<ValidationDetail>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Registry(err) => (
                status,
                Json(DetailResponse {
                    detail: err.to_string(),
                }),
            )
                .into_response(),
            ApiError::InvalidBody { kind, message, .. } => (
                status,
                Json(ValidationResponse {
                    detail: vec![ValidationDetail {
                        loc: vec!["body".to_string()],
                        msg: message,
                        kind: kind.to_string(),
                    }],
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(RegistryError::AirlineNotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(RegistryError::FlightNotFound).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_decode_errors_are_422() {
        let syntax = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::from(syntax);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(matches!(err, ApiError::InvalidBody { kind: "json_invalid", .. }));

        let data = serde_json::from_str::<crate::registry::Flight>("{}").unwrap_err();
        assert!(matches!(
            ApiError::from(data),
            ApiError::InvalidBody { kind: "value_error", .. }
        ));

        assert_eq!(
            ApiError::not_json("text/plain").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_registry_message_passthrough() {
        let err = ApiError::from(RegistryError::FlightNotFound);
        assert_eq!(err.to_string(), "Flight not found");
    }

    #[test]
    fn test_validation_detail_serialization() {
        let body = ValidationResponse {
            detail: vec![ValidationDetail {
                loc: vec!["body".to_string()],
                msg: "missing field".to_string(),
                kind: "value_error".to_string(),
            }],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["detail"][0]["type"], "value_error");
        assert_eq!(json["detail"][0]["loc"][0], "body");
    }
}
