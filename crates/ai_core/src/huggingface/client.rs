//! Client for Hugging Face style pipeline endpoints
//!
//! Each model is served at `{base_url}/{model}` and accepts
//! `{"inputs", "parameters", "options"}`. The hosted Inference API and
//! self-hosted text-generation-inference both speak this shape.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::{InferenceBackend, InferenceConfig};
use crate::error::InferenceError;
use crate::ports::{DecodingParams, Task, TaskEngine, TaskRequest, TaskResponse};

/// Task engine backed by Hugging Face pipeline endpoints
pub struct HuggingFaceTaskEngine {
    client: Client,
    config: InferenceConfig,
}

impl std::fmt::Debug for HuggingFaceTaskEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceTaskEngine")
            .field("base_url", &self.config.resolved_base_url())
            .field("models", &self.config.models)
            .finish_non_exhaustive()
    }
}

impl HuggingFaceTaskEngine {
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = &config.api_token {
            let mut value =
                header::HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                    .map_err(|e| InferenceError::RequestFailed(format!("Invalid API token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.resolved_base_url(),
            translation = %config.models.translation,
            summarization = %config.models.summarization,
            generation = %config.models.generation,
            "Initialized Hugging Face task engine"
        );

        Ok(Self { client, config })
    }

    fn model_url(&self, model: &str) -> String {
        format!(
            "{}/{}",
            self.config.resolved_base_url(),
            model.trim_start_matches('/')
        )
    }

    fn resolve_model<'a>(&'a self, request: &'a TaskRequest) -> &'a str {
        request
            .model
            .as_deref()
            .unwrap_or_else(|| self.config.models.for_task(request.task))
    }
}

#[derive(Debug, Serialize)]
struct PipelineRequest<'a> {
    inputs: &'a str,
    parameters: &'a DecodingParams,
    options: PipelineOptions,
}

#[derive(Debug, Serialize)]
struct PipelineOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct PipelineOutput {
    #[serde(default)]
    translation_text: Option<String>,
    #[serde(default)]
    summary_text: Option<String>,
    #[serde(default)]
    generated_text: Option<String>,
}

impl PipelineOutput {
    fn into_text(self, task: Task) -> Option<String> {
        match task {
            Task::Translation => self.translation_text,
            Task::Summarization => self.summary_text,
            Task::Text2TextGeneration => self.generated_text,
        }
    }
}

/// Error body returned while a model is loading or missing
#[derive(Debug, Deserialize)]
struct PipelineError {
    error: String,
    #[serde(default)]
    estimated_time: Option<f64>,
}

fn map_status(model: &str, status: StatusCode, body: &str) -> InferenceError {
    let detail = serde_json::from_str::<PipelineError>(body).ok();
    match status {
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::NOT_FOUND => {
            let reason = detail.map_or_else(
                || body.to_string(),
                |d| match d.estimated_time {
                    Some(eta) => format!("{} (estimated {eta:.0}s)", d.error),
                    None => d.error,
                },
            );
            InferenceError::ModelNotAvailable(format!("{model}: {reason}"))
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            InferenceError::Unauthorized(detail.map_or_else(|| status.to_string(), |d| d.error))
        },
        StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
        _ => InferenceError::ServerError(format!("Status {status}: {body}")),
    }
}

#[async_trait]
impl TaskEngine for HuggingFaceTaskEngine {
    #[instrument(skip(self, request), fields(task = %request.task, model = %self.resolve_model(&request)))]
    async fn run(&self, request: TaskRequest) -> Result<TaskResponse, InferenceError> {
        let model = self.resolve_model(&request).to_string();

        let body = PipelineRequest {
            inputs: &request.input,
            parameters: &request.params,
            options: PipelineOptions {
                wait_for_model: self.config.wait_for_model,
            },
        };

        debug!(chars = request.input.chars().count(), "Sending pipeline request");

        let response = self
            .client
            .post(self.model_url(&model))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Pipeline request failed");
            return Err(map_status(&model, status, &body));
        }

        let outputs: Vec<PipelineOutput> = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let text = outputs
            .into_iter()
            .next()
            .and_then(|output| output.into_text(request.task))
            .ok_or_else(|| {
                InferenceError::InvalidResponse(format!(
                    "no {} output in pipeline response",
                    request.task
                ))
            })?;

        debug!(chars = text.chars().count(), "Pipeline completed");

        Ok(TaskResponse { text, model })
    }

    /// Hosted pipelines load lazily on the first `run`; nothing to probe
    async fn ensure_model(&self, task: Task) -> Result<(), InferenceError> {
        debug!(task = %task, model = %self.model_for(task), "Model is served remotely");
        Ok(())
    }

    fn model_for(&self, task: Task) -> &str {
        self.config.models.for_task(task)
    }

    fn backend(&self) -> InferenceBackend {
        InferenceBackend::HuggingFace
    }
}
