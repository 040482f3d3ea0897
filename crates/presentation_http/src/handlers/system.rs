//! Status and liveness handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Endpoints advertised by `GET /`
pub const ADVERTISED_ENDPOINTS: [&str; 2] = ["POST /generate", "GET /healthz"];

/// Service status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    pub endpoints: Vec<String>,
    /// `"1"` when the template-only path is active, else `"0"`
    pub lite_mode: String,
    pub version: String,
}

/// Service status
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        message: "Backend is running".to_string(),
        endpoints: ADVERTISED_ENDPOINTS.iter().map(ToString::to_string).collect(),
        lite_mode: state.mode().lite_flag().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthzResponse {
    pub ok: bool,
}

/// Liveness check - is the server running?
pub async fn healthz() -> Json<HealthzResponse> {
    Json(HealthzResponse { ok: true })
}
