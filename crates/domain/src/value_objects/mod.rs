//! Value objects - Immutable objects defined by their attributes

mod language_tag;

pub use language_tag::{LanguageTag, SUPPORTED_PRIMARY_TAGS};
