//! Text heuristics shared by the pipeline stages
//!
//! All lengths are counted in Unicode scalar values, never bytes, so slicing
//! is always on a character boundary.

/// Characters kept when a passage is truncated instead of summarized
pub const SUMMARY_TRUNCATE_CHARS: usize = 180;

/// Passages shorter than this (after trimming) skip the summarizer
pub const MIN_SUMMARIZABLE_CHARS: usize = 60;

/// Passages with fewer periods than this skip the summarizer
pub const MIN_SUMMARIZABLE_PERIODS: usize = 2;

/// Summary used when the passage is empty
pub const EMPTY_SUMMARY_PLACEHOLDER: &str = "(No valid summary found)";

/// Return at most `max_chars` leading characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Whether a passage is long and structured enough to be worth a model call
///
/// Short passages, or passages with fewer than two sentence-ending periods,
/// produce degenerate abstractive summaries.
pub fn is_summarizable(text: &str) -> bool {
    text.trim().chars().count() >= MIN_SUMMARIZABLE_CHARS
        && text.matches('.').count() >= MIN_SUMMARIZABLE_PERIODS
}

/// The summary produced when the summarizer is skipped
pub fn truncated_summary(text: &str) -> String {
    if text.is_empty() {
        EMPTY_SUMMARY_PLACEHOLDER.to_string()
    } else {
        truncate_chars(text, SUMMARY_TRUNCATE_CHARS).to_string()
    }
}

/// Collapse runs of consecutive duplicate lines
///
/// Lines compare equal when they match after trimming and lowercasing. The
/// first line of each run is kept verbatim. Non-consecutive repeats are left
/// alone, and applying the function twice yields the same text as once.
pub fn remove_duplicate_lines(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();

    for line in text.trim().split('\n') {
        let repeated = kept
            .last()
            .is_some_and(|previous| normalized(previous) == normalized(line));
        if !repeated {
            kept.push(line);
        }
    }

    kept.join("\n").trim().to_string()
}

fn normalized(line: &str) -> String {
    line.trim().to_lowercase()
}

/// CJK ideographs, CJK punctuation and full-width forms count as one token each
fn is_cjk(c: char) -> bool {
    matches!(
        c,
        '\u{3000}'..='\u{303F}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FF00}'..='\u{FFEF}'
            | '\u{20000}'..='\u{2A6DF}'
    )
}

/// Byte offsets at which an approximate model token begins
///
/// Every CJK character is one token; every other maximal run of
/// non-whitespace characters is one token.
fn token_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    let mut in_word = false;

    text.char_indices().filter_map(move |(idx, c)| {
        let starts_token = if is_cjk(c) {
            in_word = false;
            true
        } else if c.is_whitespace() {
            in_word = false;
            false
        } else {
            let starts = !in_word;
            in_word = true;
            starts
        };
        starts_token.then_some(idx)
    })
}

/// Approximate the number of model tokens in `text`
pub fn approximate_token_count(text: &str) -> usize {
    token_starts(text).count()
}

/// Cut `text` so that it holds at most `max_tokens` approximate tokens
pub fn truncate_to_token_budget(text: &str, max_tokens: usize) -> &str {
    token_starts(text)
        .nth(max_tokens)
        .map_or(text, |idx| text[..idx].trim_end())
}
