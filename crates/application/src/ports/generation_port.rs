//! Text generation port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for a loaded instruction-following text generator
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// Produce text for `prompt` with bounded, repetition-constrained decoding
    async fn generate(&self, prompt: &str) -> Result<String, ApplicationError>;
}
