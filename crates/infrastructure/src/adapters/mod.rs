//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod inference_model_loader;
mod lingua_classifier;
mod task_engine_adapters;
mod whatlang_classifier;

pub use inference_model_loader::InferenceModelLoader;
pub use lingua_classifier::LinguaClassifier;
pub use task_engine_adapters::{
    EngineGenerator, EngineSummarizer, EngineTranslator, generation_params, map_inference_error,
    summarization_params, translation_params,
};
pub use whatlang_classifier::WhatlangClassifier;
