//! Ollama chat client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::config::{InferenceBackend, InferenceConfig};
use crate::error::InferenceError;
use crate::ports::{DecodingParams, Task, TaskEngine, TaskRequest, TaskResponse};

use super::prompts::system_prompt;

const SAMPLING_TEMPERATURE: f32 = 0.7;
const NO_REPEAT_PENALTY: f32 = 1.3;

/// Task engine using an Ollama-compatible chat server
pub struct OllamaTaskEngine {
    client: Client,
    config: InferenceConfig,
}

impl std::fmt::Debug for OllamaTaskEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaTaskEngine")
            .field("base_url", &self.config.resolved_base_url())
            .field("models", &self.config.models)
            .finish_non_exhaustive()
    }
}

impl OllamaTaskEngine {
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.resolved_base_url(),
            generation = %config.models.generation,
            "Initialized Ollama task engine"
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/api/{}",
            self.config.resolved_base_url(),
            endpoint.trim_start_matches('/')
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
struct OllamaChatRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct OllamaOptions {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repeat_last_n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repeat_penalty: Option<f32>,
}

impl From<&DecodingParams> for OllamaOptions {
    fn from(params: &DecodingParams) -> Self {
        if params.num_beams.is_some_and(|beams| beams > 1) {
            debug!(
                num_beams = ?params.num_beams,
                "Beam search is not supported by Ollama, decoding greedily"
            );
        }

        Self {
            temperature: if params.do_sample { SAMPLING_TEMPERATURE } else { 0.0 },
            num_predict: params.max_length,
            repeat_last_n: params.no_repeat_ngram_size,
            repeat_penalty: params.no_repeat_ngram_size.map(|_| NO_REPEAT_PENALTY),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    model: String,
    message: OllamaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

#[derive(Debug, Serialize)]
struct OllamaShowRequest<'a> {
    model: &'a str,
}

#[async_trait]
impl TaskEngine for OllamaTaskEngine {
    #[instrument(skip(self, request), fields(task = %request.task, model = %self.resolve_model(&request)))]
    async fn run(&self, request: TaskRequest) -> Result<TaskResponse, InferenceError> {
        let model = self.resolve_model(&request).to_string();

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt(request.task, &request.params) {
            messages.push(OllamaMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(OllamaMessage {
            role: "user",
            content: request.input.clone(),
        });

        let chat_request = OllamaChatRequest {
            model: model.clone(),
            messages,
            stream: false,
            options: OllamaOptions::from(&request.params),
        };

        debug!("Sending chat request to Ollama");

        let response = self
            .client
            .post(self.api_url("chat"))
            .json(&chat_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Inference request failed");
            return Err(match status {
                StatusCode::NOT_FOUND => InferenceError::ModelNotAvailable(model),
                StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
                _ => InferenceError::ServerError(format!("Status {status}: {body}")),
            });
        }

        let chat_response: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        debug!(model = %chat_response.model, "Inference completed");

        Ok(TaskResponse {
            text: chat_response.message.content.trim().to_string(),
            model: chat_response.model,
        })
    }

    #[instrument(skip(self))]
    async fn ensure_model(&self, task: Task) -> Result<(), InferenceError> {
        let model = self.model_for(task);

        let response = self
            .client
            .post(self.api_url("show"))
            .json(&OllamaShowRequest { model })
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(InferenceError::ModelNotAvailable(format!(
                "{model} is not pulled on the Ollama server"
            ))),
            status => Err(InferenceError::ServerError(format!(
                "Status {status} while checking {model}"
            ))),
        }
    }

    fn model_for(&self, task: Task) -> &str {
        self.config.models.for_task(task)
    }

    fn backend(&self) -> InferenceBackend {
        InferenceBackend::Ollama
    }
}
