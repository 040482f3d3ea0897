//! Application services - Use case implementations

mod language_detector;
mod model_registry;
mod outreach_service;
mod pipeline;

pub use language_detector::LanguageDetector;
pub use model_registry::ModelRegistry;
pub use outreach_service::{OutreachError, OutreachService};
pub use pipeline::{
    DraftStrategy, FailurePolicy, LITE_INTEREST, MAX_DETAIL_CHARS, ModelDraftStrategy, OnFailure,
    PipelineMode, Stage, StageError, TRANSLATION_MAX_TOKENS, TemplateDraftStrategy,
    interest_prompt,
};
