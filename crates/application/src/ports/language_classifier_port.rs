//! Language classifier port
//!
//! A statistical classifier that labels a text with a language tag.

#[cfg(test)]
use mockall::automock;

use domain::LanguageTag;

/// Port for a single language classifier
///
/// Classification never fails. A classifier that cannot decide returns the
/// empty tag (primary) or `und` (secondary).
#[cfg_attr(test, automock)]
pub trait LanguageClassifierPort: Send + Sync {
    /// Label `text` with a language tag
    fn classify(&self, text: &str) -> LanguageTag;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
