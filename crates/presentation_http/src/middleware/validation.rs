//! Request validation
//!
//! Provides a `ValidatedJson` extractor that validates request bodies using the validator crate.
//! Unparseable bodies and missing fields are `422`; field constraint
//! violations are `400`. Both use the `validation_error` code.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::Validate;

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] JsonRejection),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::JsonError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "code": "validation_error"
        });

        (status, Json(body)).into_response()
    }
}

/// A JSON extractor that also validates the request body
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value.validate().map_err(|e| {
            let mut errors: Vec<String> = e
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| {
                        format!(
                            "{}: {}",
                            field,
                            error
                                .message
                                .as_ref()
                                .map_or_else(|| error.code.to_string(), ToString::to_string)
                        )
                    })
                })
                .collect();
            // HashMap order is unstable
            errors.sort();

            ValidationError::ValidationFailed(errors.join("; "))
        })?;

        Ok(Self(value))
    }
}
