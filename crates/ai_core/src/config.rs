//! Configuration for the task inference engines

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::ports::Task;

/// Which HTTP inference backend serves the pipeline models
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceBackend {
    /// Hugging Face pipeline endpoints (`POST {base_url}/{model}`)
    #[default]
    #[serde(alias = "hf")]
    HuggingFace,
    /// Ollama-compatible chat server (`POST {base_url}/api/chat`)
    Ollama,
}

impl InferenceBackend {
    /// Base URL used when none is configured
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::HuggingFace => "https://api-inference.huggingface.co/models",
            Self::Ollama => "http://localhost:11434",
        }
    }
}

/// Model identifiers, one per pipeline task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelNames {
    #[serde(default = "default_translation_model")]
    pub translation: String,

    #[serde(default = "default_summarization_model")]
    pub summarization: String,

    #[serde(default = "default_generation_model")]
    pub generation: String,
}

fn default_translation_model() -> String {
    "Helsinki-NLP/opus-mt-zh-en".to_string()
}

fn default_summarization_model() -> String {
    "facebook/bart-large-cnn".to_string()
}

fn default_generation_model() -> String {
    "google/flan-t5-base".to_string()
}

impl Default for ModelNames {
    fn default() -> Self {
        Self {
            translation: default_translation_model(),
            summarization: default_summarization_model(),
            generation: default_generation_model(),
        }
    }
}

impl ModelNames {
    /// Use one model for every task
    pub fn uniform(model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            translation: model.clone(),
            summarization: model.clone(),
            generation: model,
        }
    }

    /// Model configured for `task`
    pub fn for_task(&self, task: Task) -> &str {
        match task {
            Task::Translation => &self.translation,
            Task::Summarization => &self.summarization,
            Task::Text2TextGeneration => &self.generation,
        }
    }
}

/// Configuration for the inference engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default)]
    pub backend: InferenceBackend,

    /// Base URL of the inference server; backend default when unset
    #[serde(default)]
    pub base_url: Option<String>,

    /// Bearer token sent with every request
    #[serde(default, skip_serializing)]
    pub api_token: Option<SecretString>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Ask hosted pipelines to block until a cold model is loaded
    #[serde(default = "default_wait_for_model")]
    pub wait_for_model: bool,

    #[serde(default)]
    pub models: ModelNames,
}

const fn default_timeout_ms() -> u64 {
    120_000
}

const fn default_wait_for_model() -> bool {
    true
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            backend: InferenceBackend::default(),
            base_url: None,
            api_token: None,
            timeout_ms: default_timeout_ms(),
            wait_for_model: default_wait_for_model(),
            models: ModelNames::default(),
        }
    }
}

impl InferenceConfig {
    /// Ollama server on localhost serving every task with one instruct model
    pub fn ollama(model: impl Into<String>) -> Self {
        Self {
            backend: InferenceBackend::Ollama,
            models: ModelNames::uniform(model),
            ..Default::default()
        }
    }

    /// Configured base URL without a trailing slash
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.backend.default_base_url())
            .trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.backend, InferenceBackend::HuggingFace);
        assert_eq!(
            config.resolved_base_url(),
            "https://api-inference.huggingface.co/models"
        );
        assert_eq!(config.timeout_ms, 120_000);
        assert!(config.wait_for_model);
        assert!(config.api_token.is_none());
        assert_eq!(config.models.translation, "Helsinki-NLP/opus-mt-zh-en");
        assert_eq!(config.models.summarization, "facebook/bart-large-cnn");
        assert_eq!(config.models.generation, "google/flan-t5-base");
    }

    #[test]
    fn ollama_preset() {
        let config = InferenceConfig::ollama("qwen2.5:1.5b-instruct");
        assert_eq!(config.backend, InferenceBackend::Ollama);
        assert_eq!(config.resolved_base_url(), "http://localhost:11434");
        assert_eq!(
            config.models.for_task(Task::Translation),
            "qwen2.5:1.5b-instruct"
        );
    }

    #[test]
    fn explicit_base_url_is_trimmed() {
        let config = InferenceConfig {
            base_url: Some("http://tgi.local:8080/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_base_url(), "http://tgi.local:8080");
    }

    #[test]
    fn blank_base_url_falls_back_to_backend_default() {
        let config = InferenceConfig {
            backend: InferenceBackend::Ollama,
            base_url: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_base_url(), "http://localhost:11434");
    }

    #[test]
    fn model_lookup_by_task() {
        let models = ModelNames::default();
        assert_eq!(models.for_task(Task::Summarization), "facebook/bart-large-cnn");
        assert_eq!(models.for_task(Task::Text2TextGeneration), "google/flan-t5-base");
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let config: InferenceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.backend, InferenceBackend::HuggingFace);
        assert_eq!(config.timeout_ms, 120_000);
    }

    #[test]
    fn config_deserialization() {
        let json = r#"{
            "backend": "ollama",
            "base_url": "http://custom:8080",
            "api_token": "hf_secret",
            "models": {"generation": "llama3.2:1b"}
        }"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.backend, InferenceBackend::Ollama);
        assert_eq!(config.resolved_base_url(), "http://custom:8080");
        assert!(config.api_token.is_some());
        assert_eq!(config.models.generation, "llama3.2:1b");
        assert_eq!(config.models.translation, "Helsinki-NLP/opus-mt-zh-en");
    }

    #[test]
    fn hf_alias_is_accepted() {
        let config: InferenceConfig = serde_json::from_str(r#"{"backend":"hf"}"#).unwrap();
        assert_eq!(config.backend, InferenceBackend::HuggingFace);
    }

    #[test]
    fn api_token_is_never_serialized_or_printed() {
        let json = r#"{"api_token": "hf_secret"}"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();

        let serialized = serde_json::to_string(&config).unwrap();
        assert!(!serialized.contains("hf_secret"));

        let debug = format!("{config:?}");
        assert!(!debug.contains("hf_secret"));
    }
}
