//! Draft strategies
//!
//! A strategy turns a normalized brief into the summary and interest
//! paragraph the composer needs. The model-backed strategy runs the
//! detect → translate → summarize → generate stages; the template strategy
//! is the deterministic degraded path. One is chosen at process start.

mod model_strategy;
mod policy;
mod prompts;
mod template_strategy;

use async_trait::async_trait;
use domain::{DraftContent, OutreachBrief};
#[cfg(test)]
use mockall::automock;
use serde::Serialize;

pub use model_strategy::{ModelDraftStrategy, TRANSLATION_MAX_TOKENS};
pub use policy::{FailurePolicy, MAX_DETAIL_CHARS, OnFailure, Stage, StageError};
pub use prompts::interest_prompt;
pub use template_strategy::{LITE_INTEREST, TemplateDraftStrategy};

/// Which pipeline implementation serves requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineMode {
    /// Model-backed stages
    Full,
    /// Template-only degraded path
    Lite,
}

impl PipelineMode {
    /// The `LITE_MODE` value this mode corresponds to
    pub const fn lite_flag(self) -> &'static str {
        match self {
            Self::Full => "0",
            Self::Lite => "1",
        }
    }
}

/// Produces the variable parts of an email from a brief
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DraftStrategy: Send + Sync {
    fn mode(&self) -> PipelineMode;

    async fn draft(&self, brief: &OutreachBrief) -> Result<DraftContent, StageError>;
}
