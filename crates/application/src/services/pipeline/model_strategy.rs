//! Model-backed draft strategy

use std::sync::Arc;

use async_trait::async_trait;
use domain::text::{
    approximate_token_count, is_summarizable, remove_duplicate_lines, truncate_to_token_budget, truncated_summary,
};
use domain::{DraftContent, LanguageTag, OutreachBrief};
use tracing::{debug, instrument};

use super::{DraftStrategy, FailurePolicy, PipelineMode, Stage, StageError, interest_prompt};
use crate::error::ApplicationError;
use crate::services::{LanguageDetector, ModelRegistry};

/// Input token budget for the translation model
pub const TRANSLATION_MAX_TOKENS: usize = 512;

/// Runs detect → translate → summarize → generate against the model registry
#[derive(Debug, Clone)]
pub struct ModelDraftStrategy {
    registry: Arc<ModelRegistry>,
    detector: LanguageDetector,
    policy: FailurePolicy,
}

impl ModelDraftStrategy {
    pub fn new(registry: Arc<ModelRegistry>, policy: FailurePolicy) -> Self {
        Self {
            detector: LanguageDetector::new(Arc::clone(&registry)),
            registry,
            policy,
        }
    }

    /// Translate Chinese text, pass every other language through
    #[instrument(skip_all, fields(language = %language))]
    async fn translate(&self, text: &str, language: &LanguageTag) -> Result<String, StageError> {
        if !language.is_chinese() {
            debug!("Not Chinese, skipping translation");
            return Ok(text.to_string());
        }

        let result = self.run_translation(text).await;
        self.policy
            .settle(Stage::Translate, result, || text.to_string())
    }

    async fn run_translation(&self, text: &str) -> Result<String, ApplicationError> {
        let translator = self.registry.translator().await?;
        let tokens = approximate_token_count(text);
        if tokens > TRANSLATION_MAX_TOKENS {
            debug!(
                tokens,
                budget = TRANSLATION_MAX_TOKENS,
                "Truncating translation input"
            );
        }
        let input = truncate_to_token_budget(text, TRANSLATION_MAX_TOKENS);
        let english = translator.translate(input).await?;
        Ok(english.trim().to_string())
    }

    #[instrument(skip_all)]
    async fn summarize(&self, english: &str) -> Result<String, StageError> {
        if !is_summarizable(english) {
            debug!(
                chars = english.trim().chars().count(),
                "Passage too short or unstructured, truncating instead of summarizing"
            );
            return Ok(truncated_summary(english));
        }

        let result = self.run_summarization(english).await;
        self.policy
            .settle(Stage::Summarize, result, || truncated_summary(english))
    }

    async fn run_summarization(&self, english: &str) -> Result<String, ApplicationError> {
        let summarizer = self.registry.summarizer().await?;
        let summary = summarizer.summarize(english).await?;
        Ok(summary.trim().to_string())
    }

    #[instrument(skip_all, fields(target = %brief.target_company))]
    async fn generate_interest(
        &self,
        brief: &OutreachBrief,
        summary: &str,
    ) -> Result<String, StageError> {
        let prompt = interest_prompt(&brief.sender.company, &brief.target_company, summary);
        let result = self.run_generation(&prompt).await;
        // An empty paragraph is replaced by the composer's fallback
        self.policy.settle(Stage::Generate, result, String::new)
    }

    async fn run_generation(&self, prompt: &str) -> Result<String, ApplicationError> {
        let generator = self.registry.generator().await?;
        let text = generator.generate(prompt).await?;
        Ok(remove_duplicate_lines(&text))
    }
}

#[async_trait]
impl DraftStrategy for ModelDraftStrategy {
    fn mode(&self) -> PipelineMode {
        PipelineMode::Full
    }

    async fn draft(&self, brief: &OutreachBrief) -> Result<DraftContent, StageError> {
        let language = self.detector.detect(&brief.company_profile).await;
        let english = self.translate(&brief.company_profile, &language).await?;
        let summary = self.summarize(&english).await?;
        let interest = self.generate_interest(brief, &summary).await?;

        Ok(DraftContent {
            language,
            summary,
            interest,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::ports::{
        GenerationPort, LanguageClassifierPort, MockGenerationPort, MockLanguageClassifierPort,
        MockModelLoaderPort, MockSummarizationPort, MockTranslationPort, SummarizationPort,
        TranslationPort,
    };
    use crate::services::pipeline::OnFailure;
    use domain::OutreachRequest;

    const LONG_PROFILE: &str = "Acme Robotics designs industrial robot arms. \
It serves automotive plants across Europe. It was founded in 2009.";

    fn brief(profile: &str) -> OutreachBrief {
        OutreachRequest {
            your_company: "Globex".to_string(),
            target_company: "Acme".to_string(),
            company_profile: profile.to_string(),
            ..Default::default()
        }
        .normalize()
        .unwrap()
    }

    fn classifier(tag: &'static str) -> Arc<dyn LanguageClassifierPort> {
        let mut mock = MockLanguageClassifierPort::new();
        mock.expect_classify().returning(move |_| LanguageTag::new(tag));
        mock.expect_name().return_const("mock");
        Arc::new(mock)
    }

    fn translator(output: &'static str) -> Arc<dyn TranslationPort> {
        let mut mock = MockTranslationPort::new();
        mock.expect_translate()
            .times(1)
            .returning(move |_| Ok(output.to_string()));
        Arc::new(mock)
    }

    fn summarizer(output: &'static str) -> Arc<dyn SummarizationPort> {
        let mut mock = MockSummarizationPort::new();
        mock.expect_summarize()
            .times(1)
            .returning(move |_| Ok(output.to_string()));
        Arc::new(mock)
    }

    fn generator(output: &'static str) -> Arc<dyn GenerationPort> {
        let mut mock = MockGenerationPort::new();
        mock.expect_generate()
            .times(1)
            .returning(move |_| Ok(output.to_string()));
        Arc::new(mock)
    }

    fn strategy(loader: MockModelLoaderPort, policy: FailurePolicy) -> ModelDraftStrategy {
        ModelDraftStrategy::new(Arc::new(ModelRegistry::new(Arc::new(loader))), policy)
    }

    #[tokio::test]
    async fn chinese_profile_runs_every_stage() {
        let mut loader = MockModelLoaderPort::new();
        loader
            .expect_load_primary_classifier()
            .returning(|| Ok(classifier("zh-cn")));
        loader.expect_load_secondary_classifier().times(0);
        loader
            .expect_load_translator()
            .returning(|| Ok(translator(LONG_PROFILE)));
        loader
            .expect_load_summarizer()
            .returning(|| Ok(summarizer(" Acme builds robot arms. ")));
        loader
            .expect_load_generator()
            .returning(|| Ok(generator("We want to partner.\nWe want to partner.\nTruly.")));

        let draft = strategy(loader, FailurePolicy::default())
            .draft(&brief("艾克米机器人公司设计工业机器人手臂。"))
            .await
            .unwrap();

        assert_eq!(draft.language.as_str(), "zh-cn");
        assert_eq!(draft.summary, "Acme builds robot arms.");
        assert_eq!(draft.interest, "We want to partner.\nTruly.");
    }

    #[tokio::test]
    async fn escalated_french_profile_skips_translation() {
        let mut loader = MockModelLoaderPort::new();
        loader
            .expect_load_primary_classifier()
            .returning(|| Ok(classifier("fra")));
        loader
            .expect_load_secondary_classifier()
            .times(1)
            .returning(|| Ok(classifier("fr")));
        loader.expect_load_translator().times(0);
        loader.expect_load_summarizer().returning(|| Ok(summarizer("ok")));
        loader.expect_load_generator().returning(|| Ok(generator("x")));

        let profile = "Nous fabriquons des panneaux solaires. Depuis 1990. Pour les maisons.";
        let draft = strategy(loader, FailurePolicy::default())
            .draft(&brief(profile))
            .await
            .unwrap();

        assert_eq!(draft.language.as_str(), "fr");
    }

    #[tokio::test]
    async fn short_profile_skips_summarizer() {
        let mut loader = MockModelLoaderPort::new();
        loader
            .expect_load_primary_classifier()
            .returning(|| Ok(classifier("en")));
        loader.expect_load_summarizer().times(0);
        loader
            .expect_load_generator()
            .returning(|| Ok(generator("We would be glad to collaborate closely.")));

        // 40 characters, one period
        let profile = "We build solar panels for all homes now.";
        assert_eq!(profile.chars().count(), 40);

        let draft = strategy(loader, FailurePolicy::default())
            .draft(&brief(profile))
            .await
            .unwrap();

        assert_eq!(draft.summary, profile);
    }

    #[tokio::test]
    async fn generator_receives_fixed_prompt() {
        let seen = Arc::new(Mutex::new(String::new()));
        let captured = Arc::clone(&seen);

        let mut loader = MockModelLoaderPort::new();
        loader
            .expect_load_primary_classifier()
            .returning(|| Ok(classifier("en")));
        loader.expect_load_generator().returning(move || {
            let captured = Arc::clone(&captured);
            let mut mock = MockGenerationPort::new();
            mock.expect_generate().returning(move |prompt| {
                *captured.lock().unwrap() = prompt.to_string();
                Ok("Interest paragraph long enough.".to_string())
            });
            Ok(Arc::new(mock) as Arc<dyn GenerationPort>)
        });

        strategy(loader, FailurePolicy::default())
            .draft(&brief("Short intro."))
            .await
            .unwrap();

        let prompt = seen.lock().unwrap().clone();
        assert_eq!(prompt, interest_prompt("Globex", "Acme", "Short intro."));
    }

    #[tokio::test]
    async fn long_chinese_profile_is_cut_to_translation_budget() {
        let seen = Arc::new(Mutex::new(String::new()));
        let captured = Arc::clone(&seen);

        let mut loader = MockModelLoaderPort::new();
        loader
            .expect_load_primary_classifier()
            .returning(|| Ok(classifier("zh-cn")));
        loader.expect_load_translator().returning(move || {
            let captured = Arc::clone(&captured);
            let mut mock = MockTranslationPort::new();
            mock.expect_translate().times(1).returning(move |text| {
                *captured.lock().unwrap() = text.to_string();
                Ok("Acme makes panels.".to_string())
            });
            Ok(Arc::new(mock) as Arc<dyn TranslationPort>)
        });
        loader.expect_load_summarizer().times(0);
        loader
            .expect_load_generator()
            .returning(|| Ok(generator("We would be glad to collaborate closely.")));

        let profile = "太".repeat(TRANSLATION_MAX_TOKENS + 88);
        let draft = strategy(loader, FailurePolicy::default())
            .draft(&brief(&profile))
            .await
            .unwrap();

        let input = seen.lock().unwrap().clone();
        assert_eq!(input.chars().count(), TRANSLATION_MAX_TOKENS);
        assert!(profile.starts_with(&input));
        assert_eq!(draft.summary, "Acme makes panels.");
    }

    #[tokio::test]
    async fn translation_failure_aborts_before_summarizing() {
        let mut loader = MockModelLoaderPort::new();
        loader
            .expect_load_primary_classifier()
            .returning(|| Ok(classifier("zh-tw")));
        loader
            .expect_load_translator()
            .returning(|| Err(ApplicationError::ModelUnavailable("opus-mt".into())));
        loader.expect_load_summarizer().times(0);
        loader.expect_load_generator().times(0);

        let err = strategy(loader, FailurePolicy::default())
            .draft(&brief("我們是一家公司。"))
            .await
            .unwrap_err();

        assert_eq!(err.stage, Stage::Translate);
        assert_eq!(err.error, "Translation model unavailable.");
        assert!(err.details.contains("opus-mt"));
    }

    #[tokio::test]
    async fn summarization_failure_aborts() {
        let mut loader = MockModelLoaderPort::new();
        loader
            .expect_load_primary_classifier()
            .returning(|| Ok(classifier("en")));
        loader.expect_load_summarizer().returning(|| {
            let mut mock = MockSummarizationPort::new();
            mock.expect_summarize()
                .returning(|_| Err(ApplicationError::Inference("CUDA out of memory".into())));
            Ok(Arc::new(mock) as Arc<dyn SummarizationPort>)
        });
        loader.expect_load_generator().times(0);

        let err = strategy(loader, FailurePolicy::default())
            .draft(&brief(LONG_PROFILE))
            .await
            .unwrap_err();

        assert_eq!(err.stage, Stage::Summarize);
        assert_eq!(err.details, "Inference error: CUDA out of memory");
    }

    #[tokio::test]
    async fn generation_failure_aborts() {
        let mut loader = MockModelLoaderPort::new();
        loader
            .expect_load_primary_classifier()
            .returning(|| Ok(classifier("en")));
        loader
            .expect_load_generator()
            .returning(|| Err(ApplicationError::ModelUnavailable("flan-t5".into())));

        let err = strategy(loader, FailurePolicy::default())
            .draft(&brief("Tiny."))
            .await
            .unwrap_err();

        assert_eq!(err.stage, Stage::Generate);
        assert_eq!(err.error, "Generation model unavailable.");
    }

    #[tokio::test]
    async fn lenient_policy_substitutes_fallbacks() {
        let mut loader = MockModelLoaderPort::new();
        loader
            .expect_load_primary_classifier()
            .returning(|| Ok(classifier("zh")));
        loader
            .expect_load_translator()
            .returning(|| Err(ApplicationError::ModelUnavailable("opus-mt".into())));
        loader
            .expect_load_generator()
            .returning(|| Err(ApplicationError::ModelUnavailable("flan-t5".into())));

        let profile = "我们是一家公司。";
        let draft = strategy(loader, FailurePolicy::lenient())
            .draft(&brief(profile))
            .await
            .unwrap();

        // Untranslated text is too short to summarize, so it is truncated
        assert_eq!(draft.summary, profile);
        assert!(draft.interest.is_empty());
    }

    #[tokio::test]
    async fn summarize_fallback_uses_truncation() {
        let mut loader = MockModelLoaderPort::new();
        loader
            .expect_load_primary_classifier()
            .returning(|| Ok(classifier("en")));
        loader
            .expect_load_summarizer()
            .returning(|| Err(ApplicationError::ModelUnavailable("bart".into())));
        loader
            .expect_load_generator()
            .returning(|| Ok(generator("We are keen to work with Acme on robotics.")));

        let policy = FailurePolicy {
            summarize: OnFailure::Fallback,
            ..FailurePolicy::default()
        };
        let draft = strategy(loader, policy).draft(&brief(LONG_PROFILE)).await.unwrap();

        assert_eq!(draft.summary, LONG_PROFILE);
    }
}
