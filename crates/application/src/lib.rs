//! Application layer - Use cases and orchestration
//!
//! Defines the ports the outreach pipeline needs (language classifiers and
//! the three model-backed text stages), the lazily initialized model
//! registry, the stage failure policy and the draft strategies that the
//! `OutreachService` use case runs.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
