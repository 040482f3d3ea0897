//! Domain layer for the outreach email generator
//!
//! Contains the request entities, the language tag value object, the text
//! heuristics used by the pipeline stages and the deterministic email composer.
//! This layer performs no I/O.

pub mod composer;
pub mod entities;
pub mod errors;
pub mod text;
pub mod value_objects;

pub use composer::{
    CALL_TO_ACTION, EmailComposer, FALLBACK_INTEREST, MIN_INTEREST_CHARS, email_filename,
};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
