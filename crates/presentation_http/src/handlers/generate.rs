//! Email generation handlers

use axum::{Json, extract::State};
use domain::OutreachRequest;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Maximum characters of the company profile
pub const MAX_PROFILE_CHARS: u64 = 20_000;

/// Maximum characters of every identity field
pub const MAX_FIELD_CHARS: u64 = 200;

/// `POST /generate` body
///
/// All fields must be present; blank identity fields get defaults later.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(length(max = MAX_FIELD_CHARS, message = "must be at most 200 characters"))]
    pub your_company: String,
    #[validate(length(max = MAX_FIELD_CHARS, message = "must be at most 200 characters"))]
    pub your_name: String,
    #[validate(length(max = MAX_FIELD_CHARS, message = "must be at most 200 characters"))]
    pub your_title: String,
    #[validate(length(max = MAX_FIELD_CHARS, message = "must be at most 200 characters"))]
    pub target_company: String,
    #[validate(length(max = MAX_PROFILE_CHARS, message = "must be at most 20000 characters"))]
    pub company_profile: String,
}

impl From<GenerateRequest> for OutreachRequest {
    fn from(request: GenerateRequest) -> Self {
        Self {
            your_company: request.your_company,
            your_name: request.your_name,
            your_title: request.your_title,
            target_company: request.target_company,
            company_profile: request.company_profile,
        }
    }
}

/// Successful generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub email_body_en: String,
    pub filename: String,
}

/// `GET /generate` payload pointing callers at the POST endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageHintResponse {
    pub error: String,
    pub example_payload: GenerateRequest,
}

/// Explain how to call the endpoint; never runs the pipeline
pub async fn usage_hint() -> Json<UsageHintResponse> {
    Json(UsageHintResponse {
        error: "Use POST /generate".to_string(),
        example_payload: GenerateRequest {
            your_company: "Your Co.".to_string(),
            your_name: "Jasmine".to_string(),
            your_title: "BD Manager".to_string(),
            target_company: "Acme Inc.".to_string(),
            company_profile: "Paste the target company's intro here...".to_string(),
        },
    })
}

/// Generate an outreach email
#[instrument(skip_all, fields(mode = ?state.mode()))]
pub async fn generate(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let email = state.outreach.generate_today(&request.into()).await?;

    Ok(Json(GenerateResponse {
        email_body_en: email.body,
        filename: email.filename,
    }))
}
