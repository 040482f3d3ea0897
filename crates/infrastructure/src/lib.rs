//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: language classifiers,
//! task-engine backed translation/summarization/generation models and the
//! model loader. Also owns configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod logging;

pub use adapters::*;
pub use config::{AppConfig, LITE_MODE_ENV, LogFormat, PipelineConfig, ServerConfig};
pub use logging::{LoggingError, init_logging};
