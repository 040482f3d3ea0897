//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::{handlers, state::AppState};

/// Upper bound on request bodies; a maximal profile is 20 000 characters
const MAX_BODY_BYTES: usize = 256 * 1024;

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::system::status))
        .route("/healthz", get(handlers::system::healthz))
        .route(
            "/generate",
            get(handlers::generate::usage_hint).post(handlers::generate::generate),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

/// Router plus tracing and CORS, as served by the binary
///
/// The client is a browser extension, so any origin is allowed.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
}
