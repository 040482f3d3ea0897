//! AI Core - Inference engines for the text-processing pipeline
//!
//! Provides a task-oriented inference port (translation, summarization,
//! text2text generation) with two HTTP backends:
//! - Hugging Face pipeline endpoints (hosted Inference API or self-hosted)
//! - Ollama-compatible chat servers

pub mod config;
pub mod error;
pub mod huggingface;
pub mod ollama;
pub mod ports;

use std::sync::Arc;

pub use config::{InferenceBackend, InferenceConfig, ModelNames};
pub use error::InferenceError;
pub use huggingface::HuggingFaceTaskEngine;
pub use ollama::OllamaTaskEngine;
pub use ports::{DecodingParams, Task, TaskEngine, TaskRequest, TaskResponse};

/// Build the task engine selected by `config.backend`
pub fn create_engine(config: &InferenceConfig) -> Result<Arc<dyn TaskEngine>, InferenceError> {
    let engine: Arc<dyn TaskEngine> = match config.backend {
        InferenceBackend::HuggingFace => Arc::new(HuggingFaceTaskEngine::new(config.clone())?),
        InferenceBackend::Ollama => Arc::new(OllamaTaskEngine::new(config.clone())?),
    };
    Ok(engine)
}
