//! System prompts that turn a chat model into a task model

use crate::ports::{DecodingParams, Task};

const TRANSLATION_PROMPT: &str = "You are a translation engine. Translate the user's Chinese text into English. \
Reply with the English translation only, without notes or quotation marks.";

const DEFAULT_SUMMARY_MIN: u32 = 15;
const DEFAULT_SUMMARY_MAX: u32 = 80;

/// System prompt for `task`, if the task needs one
pub(super) fn system_prompt(task: Task, params: &DecodingParams) -> Option<String> {
    match task {
        Task::Translation => Some(TRANSLATION_PROMPT.to_string()),
        Task::Summarization => {
            let min = params.min_length.unwrap_or(DEFAULT_SUMMARY_MIN);
            let max = params.max_length.unwrap_or(DEFAULT_SUMMARY_MAX);
            Some(format!(
                "Summarize the user's text in English using between {min} and {max} words. \
Reply with the summary only."
            ))
        },
        // Generation prompts are self-contained instructions
        Task::Text2TextGeneration => None,
    }
}
