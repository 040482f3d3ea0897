//! Stage ports implemented over an `ai_core` task engine
//!
//! Each adapter pins the decoding parameters of its stage and maps
//! inference errors into application errors.

use std::sync::Arc;

use ai_core::{DecodingParams, InferenceError, Task, TaskEngine, TaskRequest};
use application::{
    error::ApplicationError,
    ports::{GenerationPort, SummarizationPort, TranslationPort},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Greedy translation, output capped at the model's 512-token window
pub fn translation_params() -> DecodingParams {
    DecodingParams::greedy().with_max_length(512)
}

/// Bounded abstractive summary
pub fn summarization_params() -> DecodingParams {
    DecodingParams::greedy().with_max_length(80).with_min_length(15)
}

/// Beam search with a no-repeat window against looping output
pub fn generation_params() -> DecodingParams {
    DecodingParams::greedy()
        .with_max_length(140)
        .with_num_beams(4)
        .with_no_repeat_ngram_size(4)
}

/// Convert ai_core error to application error
pub fn map_inference_error(err: InferenceError) -> ApplicationError {
    match err {
        InferenceError::ModelNotAvailable(msg) => ApplicationError::ModelUnavailable(msg),
        InferenceError::ConnectionFailed(msg) => {
            ApplicationError::ModelUnavailable(format!("Inference server unreachable: {msg}"))
        },
        InferenceError::Unauthorized(msg) => {
            ApplicationError::Configuration(format!("Inference credentials rejected: {msg}"))
        },
        other => ApplicationError::Inference(other.to_string()),
    }
}

async fn run(
    engine: &dyn TaskEngine,
    task: Task,
    input: &str,
    params: DecodingParams,
) -> Result<String, ApplicationError> {
    let response = engine
        .run(TaskRequest::new(task, input).with_params(params))
        .await
        .map_err(map_inference_error)?;

    debug!(model = %response.model, chars = response.text.chars().count(), "Task completed");
    Ok(response.text)
}

/// Translation model served by a task engine
#[derive(Clone)]
pub struct EngineTranslator {
    engine: Arc<dyn TaskEngine>,
}

impl EngineTranslator {
    pub fn new(engine: Arc<dyn TaskEngine>) -> Self {
        Self { engine }
    }
}

impl std::fmt::Debug for EngineTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineTranslator")
            .field("model", &self.engine.model_for(Task::Translation))
            .finish()
    }
}

#[async_trait]
impl TranslationPort for EngineTranslator {
    #[instrument(skip_all)]
    async fn translate(&self, text: &str) -> Result<String, ApplicationError> {
        run(self.engine.as_ref(), Task::Translation, text, translation_params()).await
    }
}

/// Summarization model served by a task engine
#[derive(Clone)]
pub struct EngineSummarizer {
    engine: Arc<dyn TaskEngine>,
}

impl EngineSummarizer {
    pub fn new(engine: Arc<dyn TaskEngine>) -> Self {
        Self { engine }
    }
}

impl std::fmt::Debug for EngineSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineSummarizer")
            .field("model", &self.engine.model_for(Task::Summarization))
            .finish()
    }
}

#[async_trait]
impl SummarizationPort for EngineSummarizer {
    #[instrument(skip_all)]
    async fn summarize(&self, text: &str) -> Result<String, ApplicationError> {
        run(self.engine.as_ref(), Task::Summarization, text, summarization_params()).await
    }
}

/// Text2text generation model served by a task engine
#[derive(Clone)]
pub struct EngineGenerator {
    engine: Arc<dyn TaskEngine>,
}

impl EngineGenerator {
    pub fn new(engine: Arc<dyn TaskEngine>) -> Self {
        Self { engine }
    }
}

impl std::fmt::Debug for EngineGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineGenerator")
            .field("model", &self.engine.model_for(Task::Text2TextGeneration))
            .finish()
    }
}

#[async_trait]
impl GenerationPort for EngineGenerator {
    #[instrument(skip_all)]
    async fn generate(&self, prompt: &str) -> Result<String, ApplicationError> {
        run(
            self.engine.as_ref(),
            Task::Text2TextGeneration,
            prompt,
            generation_params(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_parameters() {
        let summary = summarization_params();
        assert_eq!(summary.max_length, Some(80));
        assert_eq!(summary.min_length, Some(15));
        assert!(!summary.do_sample);

        let generation = generation_params();
        assert_eq!(generation.max_length, Some(140));
        assert_eq!(generation.num_beams, Some(4));
        assert_eq!(generation.no_repeat_ngram_size, Some(4));
        assert!(!generation.do_sample);

        assert!(!translation_params().do_sample);
    }

    #[test]
    fn error_mapping() {
        assert!(matches!(
            map_inference_error(InferenceError::ModelNotAvailable("bart".into())),
            ApplicationError::ModelUnavailable(ref m) if m == "bart"
        ));
        assert!(matches!(
            map_inference_error(InferenceError::ConnectionFailed("refused".into())),
            ApplicationError::ModelUnavailable(_)
        ));
        assert!(matches!(
            map_inference_error(InferenceError::Unauthorized("bad token".into())),
            ApplicationError::Configuration(_)
        ));
        assert!(matches!(
            map_inference_error(InferenceError::RateLimited),
            ApplicationError::Inference(ref m) if m == "Rate limit exceeded"
        ));
    }
}
