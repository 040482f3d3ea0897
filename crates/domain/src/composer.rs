//! Deterministic email composer
//!
//! Assembles the five fixed sections of the outreach email. Pure and
//! infallible: every input is already normalized by the time it gets here.

use chrono::NaiveDate;

use crate::entities::{ComposedEmail, OutreachBrief};

/// Interest paragraphs shorter than this (trimmed) are replaced
pub const MIN_INTEREST_CHARS: usize = 20;

/// Substituted for a generated interest paragraph that is too thin to use
pub const FALLBACK_INTEREST: &str = "We admire your company's accomplishments and are eager to \
     explore how we can collaborate to achieve mutual growth and innovation.";

/// Fixed call-to-action paragraph
pub const CALL_TO_ACTION: &str = "We believe there are meaningful opportunities for partnership \
     between our companies. If you are interested, I would be delighted to schedule a call or \
     meeting to discuss further.";

/// Suggested download filename for an email to `target_company` on `date`
///
/// The company name is used verbatim.
pub fn email_filename(target_company: &str, date: NaiveDate) -> String {
    format!(
        "Business_Dev_Email_{target_company}_{}.txt",
        date.format("%Y%m%d")
    )
}

/// Email template
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailComposer;

impl EmailComposer {
    /// Pick the generated interest paragraph, or the fallback when it is too short
    pub fn interest_or_fallback(interest: &str) -> &str {
        if interest.trim().chars().count() < MIN_INTEREST_CHARS {
            FALLBACK_INTEREST
        } else {
            interest
        }
    }

    /// Build the email body and filename
    pub fn compose(
        brief: &OutreachBrief,
        summary: &str,
        interest: &str,
        date: NaiveDate,
    ) -> ComposedEmail {
        let sender = &brief.sender;

        let greeting = format!("Dear {} Team,", brief.target_company);
        let self_intro = format!(
            "My name is {}, and I am a {} at {}.",
            sender.name, sender.title, sender.company
        );
        let summary_part =
            format!("I recently learned about your company and was impressed by: {summary}");
        let closing = format!(
            "Best regards,\n{}\n{}\n{}",
            sender.name, sender.title, sender.company
        );

        let body = [
            greeting.as_str(),
            self_intro.as_str(),
            summary_part.as_str(),
            Self::interest_or_fallback(interest),
            CALL_TO_ACTION,
            closing.as_str(),
        ]
        .join("\n\n");

        ComposedEmail {
            body: body.trim().to_string(),
            filename: email_filename(&brief.target_company, date),
        }
    }
}
