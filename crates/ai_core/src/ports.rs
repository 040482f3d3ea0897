//! Port definitions for task inference engines

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::InferenceBackend;
use crate::error::InferenceError;

/// Pipeline task a model is asked to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Task {
    Translation,
    Summarization,
    Text2TextGeneration,
}

impl Task {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Translation => "translation",
            Self::Summarization => "summarization",
            Self::Text2TextGeneration => "text2text-generation",
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoding parameters, serialized as pipeline `parameters`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_beams: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_repeat_ngram_size: Option<u32>,
    pub do_sample: bool,
}

impl DecodingParams {
    /// Deterministic decoding with no length limits
    pub fn greedy() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    #[must_use]
    pub const fn with_min_length(mut self, min_length: u32) -> Self {
        self.min_length = Some(min_length);
        self
    }

    #[must_use]
    pub const fn with_num_beams(mut self, num_beams: u32) -> Self {
        self.num_beams = Some(num_beams);
        self
    }

    #[must_use]
    pub const fn with_no_repeat_ngram_size(mut self, size: u32) -> Self {
        self.no_repeat_ngram_size = Some(size);
        self
    }
}

/// A single task invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    pub task: Task,
    pub input: String,
    pub params: DecodingParams,
    /// Overrides the configured model for this task
    pub model: Option<String>,
}

impl TaskRequest {
    pub fn new(task: Task, input: impl Into<String>) -> Self {
        Self {
            task,
            input: input.into(),
            params: DecodingParams::greedy(),
            model: None,
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: DecodingParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Output text of a task invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResponse {
    pub text: String,
    pub model: String,
}

/// Port for task-oriented inference backends
#[async_trait]
pub trait TaskEngine: Send + Sync {
    /// Run one task and return the produced text
    async fn run(&self, request: TaskRequest) -> Result<TaskResponse, InferenceError>;

    /// Verify that the model serving `task` can be used
    async fn ensure_model(&self, task: Task) -> Result<(), InferenceError>;

    /// Model configured for `task`
    fn model_for(&self, task: Task) -> &str;

    fn backend(&self) -> InferenceBackend;
}
