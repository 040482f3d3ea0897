//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ApplicationError, DraftStrategy, ModelDraftStrategy, ModelRegistry, OutreachService,
    PipelineMode, TemplateDraftStrategy,
};
use infrastructure::{AppConfig, InferenceModelLoader};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Email generation use case, bound to the strategy chosen at startup
    pub outreach: Arc<OutreachService>,
}

impl AppState {
    pub fn new(outreach: Arc<OutreachService>) -> Self {
        Self { outreach }
    }

    /// Build the state from configuration
    ///
    /// Lite mode never constructs the inference engine.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let strategy: Arc<dyn DraftStrategy> = if config.pipeline.lite_mode {
            Arc::new(TemplateDraftStrategy)
        } else {
            let loader = InferenceModelLoader::new(&config.inference)?;
            let registry = Arc::new(ModelRegistry::new(Arc::new(loader)));
            Arc::new(ModelDraftStrategy::new(registry, config.pipeline.on_failure))
        };

        Ok(Self::new(Arc::new(OutreachService::new(strategy))))
    }

    pub fn mode(&self) -> PipelineMode {
        self.outreach.mode()
    }
}
