//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod generation_port;
mod language_classifier_port;
mod model_loader_port;
mod summarization_port;
mod translation_port;

pub use generation_port::GenerationPort;
#[cfg(test)]
pub use generation_port::MockGenerationPort;
pub use language_classifier_port::LanguageClassifierPort;
#[cfg(test)]
pub use language_classifier_port::MockLanguageClassifierPort;
pub use model_loader_port::ModelLoaderPort;
#[cfg(test)]
pub use model_loader_port::MockModelLoaderPort;
#[cfg(test)]
pub use summarization_port::MockSummarizationPort;
pub use summarization_port::SummarizationPort;
#[cfg(test)]
pub use translation_port::MockTranslationPort;
pub use translation_port::TranslationPort;
