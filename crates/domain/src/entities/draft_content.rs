//! Intermediate output of a draft strategy

use crate::value_objects::LanguageTag;

/// What a draft strategy hands to the composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftContent {
    /// Language the profile was classified as
    pub language: LanguageTag,
    /// English summary of the target company
    pub summary: String,
    /// Interest paragraph, possibly too short to use (the composer decides)
    pub interest: String,
}
