//! Outreach HTTP presentation layer
//!
//! Exposes the email generator to the browser extension:
//! `GET /`, `GET /healthz`, `GET /generate` (usage hint) and `POST /generate`.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{ValidatedJson, ValidationError};
pub use routes::{create_app, create_router};
pub use state::AppState;
