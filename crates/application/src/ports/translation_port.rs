//! Translation port - Chinese to English

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for a loaded translation model
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranslationPort: Send + Sync {
    /// Translate Chinese `text` into English with deterministic decoding
    async fn translate(&self, text: &str) -> Result<String, ApplicationError>;
}
