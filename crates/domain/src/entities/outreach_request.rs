//! Outreach request as received, and its normalized brief

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Substituted when `your_company` is blank
pub const DEFAULT_YOUR_COMPANY: &str = "Your Company";
/// Substituted when `your_name` is blank
pub const DEFAULT_YOUR_NAME: &str = "Your Name";
/// Substituted when `your_title` is blank
pub const DEFAULT_YOUR_TITLE: &str = "BD Manager";
/// Substituted when `target_company` is blank
pub const DEFAULT_TARGET_COMPANY: &str = "Target Company";

/// Raw request payload
///
/// Every field is a plain string; only `company_profile` is semantically
/// required, the identity fields fall back to defaults when blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachRequest {
    pub your_company: String,
    pub your_name: String,
    pub your_title: String,
    pub target_company: String,
    pub company_profile: String,
}

/// Identity of the person sending the email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub company: String,
    pub name: String,
    pub title: String,
}

/// A request after trimming and default substitution
///
/// Constructing one guarantees a non-empty company profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutreachBrief {
    pub sender: Sender,
    pub target_company: String,
    pub company_profile: String,
}

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

impl OutreachRequest {
    /// Trim every field, substitute defaults and reject a blank profile
    pub fn normalize(&self) -> Result<OutreachBrief, DomainError> {
        let company_profile = self.company_profile.trim();
        if company_profile.is_empty() {
            return Err(DomainError::EmptyProfile);
        }

        Ok(OutreachBrief {
            sender: Sender {
                company: or_default(&self.your_company, DEFAULT_YOUR_COMPANY),
                name: or_default(&self.your_name, DEFAULT_YOUR_NAME),
                title: or_default(&self.your_title, DEFAULT_YOUR_TITLE),
            },
            target_company: or_default(&self.target_company, DEFAULT_TARGET_COMPANY),
            company_profile: company_profile.to_string(),
        })
    }
}
