//! Primary language classifier backed by `whatlang`
//!
//! Fast trigram detection. Mandarin is split into `zh-cn`/`zh-tw` by counting
//! characters whose simplified and traditional forms differ.

use application::ports::LanguageClassifierPort;
use domain::LanguageTag;
use whatlang::Lang;

const SIMPLIFIED_ONLY: &str = "这们来时个说国会对发过还经学产业为务与开场";
const TRADITIONAL_ONLY: &str = "這們來時個說國會對發過還經學產業為務與開場";

/// Primary classifier; unreliable detections yield the empty tag
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangClassifier;

impl WhatlangClassifier {
    pub const fn new() -> Self {
        Self
    }
}

/// `zh-tw` when traditional-only characters outnumber simplified-only ones
fn chinese_variant(text: &str) -> &'static str {
    let (simplified, traditional) = text.chars().fold((0usize, 0usize), |(s, t), c| {
        (
            s + usize::from(SIMPLIFIED_ONLY.contains(c)),
            t + usize::from(TRADITIONAL_ONLY.contains(c)),
        )
    });

    if traditional > simplified { "zh-tw" } else { "zh-cn" }
}

impl LanguageClassifierPort for WhatlangClassifier {
    fn classify(&self, text: &str) -> LanguageTag {
        match whatlang::detect(text) {
            Some(info) if info.is_reliable() => match info.lang() {
                Lang::Cmn => LanguageTag::new(chinese_variant(text)),
                Lang::Eng => LanguageTag::english(),
                other => LanguageTag::new(other.code()),
            },
            _ => LanguageTag::default(),
        }
    }

    fn name(&self) -> &'static str {
        "whatlang"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_text() {
        let tag = WhatlangClassifier.classify(
            "We are a technology company building industrial robots for automotive \
             factories across Europe and North America.",
        );
        assert_eq!(tag.as_str(), "en");
    }

    #[test]
    fn simplified_chinese() {
        let tag = WhatlangClassifier.classify(
            "我们是一家专注于人工智能技术的公司，这个团队来自国内外的著名大学，为企业提供服务。",
        );
        assert_eq!(tag.as_str(), "zh-cn");
    }

    #[test]
    fn traditional_chinese() {
        let tag = WhatlangClassifier.classify(
            "我們是一家專注於人工智慧技術的公司，這個團隊來自國內外的著名大學，為企業提供服務。",
        );
        assert_eq!(tag.as_str(), "zh-tw");
    }

    #[test]
    fn other_languages_are_not_supported_tags() {
        let tag = WhatlangClassifier.classify(
            "Nous sommes une entreprise française qui fabrique des panneaux solaires \
             pour les maisons et les bureaux depuis plus de trente ans.",
        );
        assert!(!tag.is_supported());
    }

    #[test]
    fn empty_text_is_empty_tag() {
        assert!(WhatlangClassifier.classify("").is_empty());
    }

    #[test]
    fn variant_counting() {
        assert_eq!(chinese_variant("这个"), "zh-cn");
        assert_eq!(chinese_variant("這個"), "zh-tw");
        assert_eq!(chinese_variant("公司"), "zh-cn");
        assert_eq!(chinese_variant("這個这"), "zh-tw");
    }
}
