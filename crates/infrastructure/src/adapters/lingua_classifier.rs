//! Secondary language classifier backed by `lingua`
//!
//! Slower and more accurate on short or mixed text. Building the detector
//! is expensive, so the loader constructs it off the async runtime.

use application::ports::LanguageClassifierPort;
use domain::LanguageTag;
use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};

/// Secondary classifier returning ISO 639-1 codes, or `und`
pub struct LinguaClassifier {
    detector: LanguageDetector,
}

impl std::fmt::Debug for LinguaClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinguaClassifier").finish_non_exhaustive()
    }
}

impl LinguaClassifier {
    /// Classifier over every language lingua knows
    pub fn all_languages() -> Self {
        Self {
            detector: LanguageDetectorBuilder::from_all_languages().build(),
        }
    }

    /// Classifier restricted to `languages`
    pub fn from_languages(languages: &[Language]) -> Self {
        Self {
            detector: LanguageDetectorBuilder::from_languages(languages).build(),
        }
    }
}

impl LanguageClassifierPort for LinguaClassifier {
    fn classify(&self, text: &str) -> LanguageTag {
        self.detector
            .detect_language_of(text)
            .map_or_else(LanguageTag::undetermined, |language| {
                LanguageTag::new(language.iso_code_639_1().to_string())
            })
    }

    fn name(&self) -> &'static str {
        "lingua"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> LinguaClassifier {
        LinguaClassifier::from_languages(&[Language::English, Language::French, Language::Chinese])
    }

    #[test]
    fn french_is_iso_639_1() {
        let tag = classifier().classify("Nous fabriquons des panneaux solaires pour les maisons.");
        assert_eq!(tag.as_str(), "fr");
    }

    #[test]
    fn chinese_is_zh() {
        let tag = classifier().classify("我们是一家公司");
        assert_eq!(tag.as_str(), "zh");
    }

    #[test]
    fn undecidable_text_is_und() {
        assert_eq!(classifier().classify("12345 !!!"), LanguageTag::undetermined());
    }
}
