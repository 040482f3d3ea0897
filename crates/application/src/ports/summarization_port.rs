//! Summarization port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for a loaded abstractive summarizer
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SummarizationPort: Send + Sync {
    /// Summarize English `text` into a short passage
    async fn summarize(&self, text: &str) -> Result<String, ApplicationError>;
}
