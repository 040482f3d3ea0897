//! Template-only degraded path

use async_trait::async_trait;
use domain::text::{SUMMARY_TRUNCATE_CHARS, truncate_chars};
use domain::{DraftContent, LanguageTag, OutreachBrief};
use tracing::debug;

use super::{DraftStrategy, PipelineMode, StageError};

/// Interest paragraph used by the degraded path
pub const LITE_INTEREST: &str = "We see strong partnership potential given your capabilities \
and our offerings. We'd love to explore a collaboration that drives mutual growth.";

/// Deterministic strategy with no model, network or shared state
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateDraftStrategy;

#[async_trait]
impl DraftStrategy for TemplateDraftStrategy {
    fn mode(&self) -> PipelineMode {
        PipelineMode::Lite
    }

    async fn draft(&self, brief: &OutreachBrief) -> Result<DraftContent, StageError> {
        debug!("Drafting from template");
        Ok(DraftContent {
            language: LanguageTag::english(),
            summary: truncate_chars(&brief.company_profile, SUMMARY_TRUNCATE_CHARS).to_string(),
            interest: LITE_INTEREST.to_string(),
        })
    }
}
