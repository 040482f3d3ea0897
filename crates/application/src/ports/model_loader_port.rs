//! Model loader port
//!
//! Constructs the model handles the registry caches. Every call performs a
//! full load; caching is the registry's job.

use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;
use crate::ports::{GenerationPort, LanguageClassifierPort, SummarizationPort, TranslationPort};

/// Port for building model handles
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelLoaderPort: Send + Sync {
    /// Build the fast primary language classifier
    async fn load_primary_classifier(
        &self,
    ) -> Result<Arc<dyn LanguageClassifierPort>, ApplicationError>;

    /// Build the secondary language classifier used on escalation
    async fn load_secondary_classifier(
        &self,
    ) -> Result<Arc<dyn LanguageClassifierPort>, ApplicationError>;

    async fn load_translator(&self) -> Result<Arc<dyn TranslationPort>, ApplicationError>;

    async fn load_summarizer(&self) -> Result<Arc<dyn SummarizationPort>, ApplicationError>;

    async fn load_generator(&self) -> Result<Arc<dyn GenerationPort>, ApplicationError>;
}
