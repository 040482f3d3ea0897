//! Lazily initialized, shared model handles
//!
//! Each handle lives in its own `OnceCell`. Concurrent first use runs exactly
//! one load; the other callers await it. A failed load leaves the cell empty
//! so the next request tries again. Handles are never replaced once loaded.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::error::ApplicationError;
use crate::ports::{
    GenerationPort, LanguageClassifierPort, ModelLoaderPort, SummarizationPort, TranslationPort,
};

/// Owner of every model handle used by the model-backed pipeline
pub struct ModelRegistry {
    loader: Arc<dyn ModelLoaderPort>,
    primary_classifier: OnceCell<Arc<dyn LanguageClassifierPort>>,
    secondary_classifier: OnceCell<Arc<dyn LanguageClassifierPort>>,
    translator: OnceCell<Arc<dyn TranslationPort>>,
    summarizer: OnceCell<Arc<dyn SummarizationPort>>,
    generator: OnceCell<Arc<dyn GenerationPort>>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("primary_classifier", &self.primary_classifier.initialized())
            .field("secondary_classifier", &self.secondary_classifier.initialized())
            .field("translator", &self.translator.initialized())
            .field("summarizer", &self.summarizer.initialized())
            .field("generator", &self.generator.initialized())
            .finish_non_exhaustive()
    }
}

async fn get_or_load<T, F, Fut>(
    cell: &OnceCell<Arc<T>>,
    model: &'static str,
    load: F,
) -> Result<Arc<T>, ApplicationError>
where
    T: ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Arc<T>, ApplicationError>>,
{
    cell.get_or_try_init(|| async {
        info!(model, "Loading model");
        let handle = load().await.inspect_err(|e| {
            warn!(model, error = %e, "Model load failed, will retry on next request");
        })?;
        info!(model, "Model ready");
        Ok(handle)
    })
    .await
    .map(Arc::clone)
}

impl ModelRegistry {
    pub fn new(loader: Arc<dyn ModelLoaderPort>) -> Self {
        Self {
            loader,
            primary_classifier: OnceCell::new(),
            secondary_classifier: OnceCell::new(),
            translator: OnceCell::new(),
            summarizer: OnceCell::new(),
            generator: OnceCell::new(),
        }
    }

    pub async fn primary_classifier(
        &self,
    ) -> Result<Arc<dyn LanguageClassifierPort>, ApplicationError> {
        get_or_load(&self.primary_classifier, "primary-classifier", || {
            self.loader.load_primary_classifier()
        })
        .await
    }

    pub async fn secondary_classifier(
        &self,
    ) -> Result<Arc<dyn LanguageClassifierPort>, ApplicationError> {
        get_or_load(&self.secondary_classifier, "secondary-classifier", || {
            self.loader.load_secondary_classifier()
        })
        .await
    }

    pub async fn translator(&self) -> Result<Arc<dyn TranslationPort>, ApplicationError> {
        get_or_load(&self.translator, "translator", || self.loader.load_translator()).await
    }

    pub async fn summarizer(&self) -> Result<Arc<dyn SummarizationPort>, ApplicationError> {
        get_or_load(&self.summarizer, "summarizer", || self.loader.load_summarizer()).await
    }

    pub async fn generator(&self) -> Result<Arc<dyn GenerationPort>, ApplicationError> {
        get_or_load(&self.generator, "generator", || self.loader.load_generator()).await
    }
}
