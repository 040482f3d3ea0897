//! Stage failure policy
//!
//! Each model-backed stage either aborts the request with a `StageError` or
//! substitutes a deterministic fallback value. The table is explicit and
//! configurable per stage.

use std::fmt;

use domain::text::truncate_chars;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::error::ApplicationError;

/// Maximum characters of the underlying error kept in `StageError::details`
pub const MAX_DETAIL_CHARS: usize = 500;

const MODEL_DOWNLOAD_HINT: &str =
    "Ensure model download completed. Or set LITE_MODE=1 to skip models.";

/// A model-backed pipeline step
///
/// Detection and composition cannot fail, so they are not stages here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Translate,
    Summarize,
    Generate,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Summarize => "summarize",
            Self::Generate => "generate",
        }
    }

    /// User-facing error message for an aborted stage
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Translate => "Translation model unavailable.",
            Self::Summarize => "Summarization model unavailable.",
            Self::Generate => "Generation model unavailable.",
        }
    }

    /// Remediation hint for an aborted stage
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Translate => {
                "First run requires internet to download Hugging Face weights. Or set LITE_MODE=1 to skip models."
            },
            Self::Summarize | Self::Generate => MODEL_DOWNLOAD_HINT,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the pipeline does when a stage fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnFailure {
    /// Stop the request and report a `StageError`
    #[default]
    Abort,
    /// Continue with the stage's fallback value
    Fallback,
}

/// A stage failure that aborted the request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{stage} stage failed: {error}")]
pub struct StageError {
    pub stage: Stage,
    /// Fixed human-readable message
    pub error: String,
    /// Fixed remediation hint
    pub hint: String,
    /// Underlying error text, at most `MAX_DETAIL_CHARS` characters
    pub details: String,
}

impl StageError {
    pub fn new(stage: Stage, cause: &impl fmt::Display) -> Self {
        let details = cause.to_string();
        Self {
            stage,
            error: stage.error_message().to_string(),
            hint: stage.hint().to_string(),
            details: truncate_chars(&details, MAX_DETAIL_CHARS).to_string(),
        }
    }
}

/// Per-stage failure handling table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailurePolicy {
    #[serde(default)]
    pub translate: OnFailure,
    #[serde(default)]
    pub summarize: OnFailure,
    #[serde(default)]
    pub generate: OnFailure,
}

impl FailurePolicy {
    /// Every stage substitutes its fallback
    pub const fn lenient() -> Self {
        Self {
            translate: OnFailure::Fallback,
            summarize: OnFailure::Fallback,
            generate: OnFailure::Fallback,
        }
    }

    pub const fn for_stage(&self, stage: Stage) -> OnFailure {
        match stage {
            Stage::Translate => self.translate,
            Stage::Summarize => self.summarize,
            Stage::Generate => self.generate,
        }
    }

    /// Turn a stage result into its value, its fallback, or a `StageError`
    pub fn settle<T>(
        &self,
        stage: Stage,
        result: Result<T, ApplicationError>,
        fallback: impl FnOnce() -> T,
    ) -> Result<T, StageError> {
        match result {
            Ok(value) => Ok(value),
            Err(e) => match self.for_stage(stage) {
                OnFailure::Abort => {
                    warn!(stage = %stage, error = %e, "Stage failed, aborting request");
                    Err(StageError::new(stage, &e))
                },
                OnFailure::Fallback => {
                    warn!(stage = %stage, error = %e, "Stage failed, using fallback");
                    Ok(fallback())
                },
            },
        }
    }
}
