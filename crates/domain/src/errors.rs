//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The company profile was blank after trimming
    #[error("Empty company profile.")]
    EmptyProfile,
}
