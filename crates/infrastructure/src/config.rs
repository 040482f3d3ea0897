//! Application configuration
//!
//! Layered as: serde defaults → optional `config.toml` → `OUTREACH_*`
//! environment variables (nested keys joined by `__`, e.g.
//! `OUTREACH_SERVER__PORT=9000`). The legacy `LITE_MODE` variable is applied
//! last and wins over `pipeline.lite_mode`.

use ai_core::InferenceConfig;
use application::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "OUTREACH";

/// Legacy switch for the degraded template-only path
pub const LITE_MODE_ENV: &str = "LITE_MODE";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub inference: InferenceConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8000
}

const fn default_shutdown_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_secs: default_shutdown_timeout_secs(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Pipeline behaviour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Use the template-only path and never touch a model
    #[serde(default)]
    pub lite_mode: bool,

    /// Abort or fall back, per stage
    #[serde(default)]
    pub on_failure: FailurePolicy,
}

impl AppConfig {
    /// Load configuration from `config.toml`, the environment and `LITE_MODE`
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut config = Self::load_from(config::File::with_name("config").required(false))?;
        config.apply_lite_mode(std::env::var(LITE_MODE_ENV).ok().as_deref());
        Ok(config)
    }

    /// Load from a specific file source, then `OUTREACH_*` overrides
    pub fn load_from<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Apply the legacy `LITE_MODE` value: `"1"` enables, anything else disables
    pub fn apply_lite_mode(&mut self, value: Option<&str>) {
        if let Some(value) = value {
            self.pipeline.lite_mode = value.trim() == "1";
        }
    }
}
