//! API error handling
//!
//! Pipeline failures are reported as `200 OK` with an error payload: the
//! browser extension checks `res.ok` for transport success and then looks
//! for an `error` field. Request-shape problems are handled separately by
//! `ValidationError`.

use application::{OutreachError, StageError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was rejected before the pipeline ran
    #[error("{0}")]
    InvalidInput(String),

    /// A model stage aborted the pipeline
    #[error(transparent)]
    StageFailed(StageError),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Remediation hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Truncated underlying error text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput(error) => Self {
                error,
                hint: None,
                details: None,
            },
            ApiError::StageFailed(stage) => Self {
                error: stage.error,
                hint: Some(stage.hint),
                details: Some(stage.details),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(ErrorResponse::from(self))).into_response()
    }
}

impl From<OutreachError> for ApiError {
    fn from(err: OutreachError) -> Self {
        match err {
            OutreachError::InvalidRequest(e) => Self::InvalidInput(e.to_string()),
            OutreachError::Stage(e) => Self::StageFailed(e),
        }
    }
}
