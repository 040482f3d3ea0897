//! Two-tier language detection
//!
//! The primary classifier runs first. When its tag is not one of the
//! supported Chinese/English tags, the secondary classifier re-labels the
//! text and its answer is final. Detection never fails.

use std::sync::Arc;

use domain::LanguageTag;
use tracing::{debug, instrument, warn};

use crate::services::ModelRegistry;

#[derive(Debug, Clone)]
pub struct LanguageDetector {
    registry: Arc<ModelRegistry>,
}

impl LanguageDetector {
    pub const fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    #[instrument(skip_all, fields(chars = text.chars().count()))]
    pub async fn detect(&self, text: &str) -> LanguageTag {
        let primary = match self.registry.primary_classifier().await {
            Ok(classifier) => classifier.classify(text),
            Err(e) => {
                warn!(error = %e, "Primary language classifier unavailable");
                LanguageTag::default()
            },
        };

        if primary.is_supported() {
            debug!(language = %primary, "Primary classifier accepted");
            return primary;
        }

        debug!(primary = %primary, "Escalating to secondary classifier");

        match self.registry.secondary_classifier().await {
            Ok(classifier) => {
                let secondary = classifier.classify(text);
                debug!(language = %secondary, classifier = classifier.name(), "Secondary classifier result");
                secondary
            },
            Err(e) => {
                warn!(error = %e, "Secondary language classifier unavailable");
                LanguageTag::undetermined()
            },
        }
    }
}
