//! API error types and the uniform JSON response envelope
//!
//! Every endpoint answers with `{"status": "success"|"error", "message"?,
//! "data"?}`. Failures map onto a small taxonomy: validation problems are the
//! caller's fault (400), everything that goes wrong past validation surfaces
//! as a database or internal error (500) carrying the raw driver message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database_layer::DatabaseError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Uniform response envelope returned by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// "success" or "error"
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Wrap a payload in a success envelope.
pub fn api_success<T>(data: T) -> ApiResponse<T> {
    ApiResponse {
        status: "success".to_string(),
        message: None,
        data: Some(data),
    }
}

/// Success envelope carrying only a message.
pub fn api_message<T>(message: impl Into<String>) -> ApiResponse<T> {
    ApiResponse {
        status: "success".to_string(),
        message: Some(message.into()),
        data: None,
    }
}

/// Success envelope carrying both a message and a payload.
pub fn api_success_with_message<T>(data: T, message: impl Into<String>) -> ApiResponse<T> {
    ApiResponse {
        status: "success".to_string(),
        message: Some(message.into()),
        data: Some(data),
    }
}

/// API error taxonomy.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        Self::Database(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body: ApiResponse<serde_json::Value> = ApiResponse {
            status: "error".to_string(),
            message: Some(self.to_string()),
            data: None,
        };
        (status, Json(body)).into_response()
    }
}
