//! Language tag value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tags the primary classifier is trusted to report without escalation
pub const SUPPORTED_PRIMARY_TAGS: [&str; 4] = ["zh-cn", "zh-tw", "zh", "en"];

/// A lowercase language tag such as `en`, `zh-cn` or `fr`
///
/// The set of tags is open-ended: whatever the fallback classifier reports is
/// carried through unchanged apart from case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create a tag, trimming and lowercasing the input
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().to_lowercase())
    }

    /// English
    pub fn english() -> Self {
        Self("en".to_string())
    }

    /// Undetermined (BCP 47 `und`)
    pub fn undetermined() -> Self {
        Self("und".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no classifier produced a result
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Any Chinese variant (`zh`, `zh-cn`, `zh-tw`, ...)
    pub fn is_chinese(&self) -> bool {
        self.0.starts_with("zh")
    }

    /// Whether the tag is one the primary classifier may report directly
    pub fn is_supported(&self) -> bool {
        SUPPORTED_PRIMARY_TAGS.contains(&self.0.as_str())
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}
