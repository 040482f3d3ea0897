//! Outreach service - the email generation use case

use std::sync::Arc;

use chrono::NaiveDate;
use domain::{ComposedEmail, DomainError, EmailComposer, OutreachRequest};
use thiserror::Error;
use tracing::{debug, info, instrument};

use super::pipeline::{DraftStrategy, PipelineMode, StageError};

/// Why a request produced no email
#[derive(Debug, Error)]
pub enum OutreachError {
    /// The request was rejected before any stage ran
    #[error(transparent)]
    InvalidRequest(#[from] DomainError),

    /// A model stage aborted the request
    #[error(transparent)]
    Stage(#[from] StageError),
}

/// Normalizes a request, drafts it with the configured strategy and composes the email
pub struct OutreachService {
    strategy: Arc<dyn DraftStrategy>,
}

impl std::fmt::Debug for OutreachService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutreachService")
            .field("mode", &self.strategy.mode())
            .finish()
    }
}

impl OutreachService {
    pub fn new(strategy: Arc<dyn DraftStrategy>) -> Self {
        Self { strategy }
    }

    pub fn mode(&self) -> PipelineMode {
        self.strategy.mode()
    }

    /// Generate an email dated `date`
    #[instrument(skip_all, fields(target = %request.target_company, mode = ?self.mode()))]
    pub async fn generate(
        &self,
        request: &OutreachRequest,
        date: NaiveDate,
    ) -> Result<ComposedEmail, OutreachError> {
        let brief = request.normalize()?;

        let draft = self.strategy.draft(&brief).await?;
        debug!(
            language = %draft.language,
            summary_chars = draft.summary.chars().count(),
            interest_chars = draft.interest.chars().count(),
            "Draft ready"
        );

        let email = EmailComposer::compose(&brief, &draft.summary, &draft.interest, date);
        info!(filename = %email.filename, "Email composed");
        Ok(email)
    }

    /// Generate an email dated with today's local date
    pub async fn generate_today(
        &self,
        request: &OutreachRequest,
    ) -> Result<ComposedEmail, OutreachError> {
        self.generate(request, chrono::Local::now().date_naive())
            .await
    }
}
