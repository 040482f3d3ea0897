//! Model loader over the configured inference backend

use std::sync::Arc;

use ai_core::{InferenceConfig, Task, TaskEngine};
use application::{
    error::ApplicationError,
    ports::{
        GenerationPort, LanguageClassifierPort, ModelLoaderPort, SummarizationPort,
        TranslationPort,
    },
};
use async_trait::async_trait;
use tracing::{info, instrument};

use super::{
    EngineGenerator, EngineSummarizer, EngineTranslator, LinguaClassifier, WhatlangClassifier,
    map_inference_error,
};

/// Builds classifiers locally and stage models over one shared task engine
pub struct InferenceModelLoader {
    engine: Arc<dyn TaskEngine>,
}

impl std::fmt::Debug for InferenceModelLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceModelLoader")
            .field("backend", &self.engine.backend())
            .finish()
    }
}

impl InferenceModelLoader {
    pub fn new(config: &InferenceConfig) -> Result<Self, ApplicationError> {
        let engine = ai_core::create_engine(config).map_err(map_inference_error)?;
        Ok(Self::with_engine(engine))
    }

    pub fn with_engine(engine: Arc<dyn TaskEngine>) -> Self {
        Self { engine }
    }

    /// Verify the backend serves the model for `task`
    async fn ensure(&self, task: Task) -> Result<(), ApplicationError> {
        self.engine
            .ensure_model(task)
            .await
            .map_err(map_inference_error)?;
        info!(task = %task, model = %self.engine.model_for(task), "Model available");
        Ok(())
    }
}

#[async_trait]
impl ModelLoaderPort for InferenceModelLoader {
    async fn load_primary_classifier(
        &self,
    ) -> Result<Arc<dyn LanguageClassifierPort>, ApplicationError> {
        Ok(Arc::new(WhatlangClassifier::new()))
    }

    #[instrument(skip(self))]
    async fn load_secondary_classifier(
        &self,
    ) -> Result<Arc<dyn LanguageClassifierPort>, ApplicationError> {
        let classifier = tokio::task::spawn_blocking(LinguaClassifier::all_languages)
            .await
            .map_err(|e| {
                ApplicationError::Internal(format!("Language classifier build failed: {e}"))
            })?;
        Ok(Arc::new(classifier))
    }

    #[instrument(skip(self))]
    async fn load_translator(&self) -> Result<Arc<dyn TranslationPort>, ApplicationError> {
        self.ensure(Task::Translation).await?;
        Ok(Arc::new(EngineTranslator::new(Arc::clone(&self.engine))))
    }

    #[instrument(skip(self))]
    async fn load_summarizer(&self) -> Result<Arc<dyn SummarizationPort>, ApplicationError> {
        self.ensure(Task::Summarization).await?;
        Ok(Arc::new(EngineSummarizer::new(Arc::clone(&self.engine))))
    }

    #[instrument(skip(self))]
    async fn load_generator(&self) -> Result<Arc<dyn GenerationPort>, ApplicationError> {
        self.ensure(Task::Text2TextGeneration).await?;
        Ok(Arc::new(EngineGenerator::new(Arc::clone(&self.engine))))
    }
}
