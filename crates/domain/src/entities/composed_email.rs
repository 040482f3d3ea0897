//! Final composed email

use serde::{Deserialize, Serialize};

/// The assembled email body and its suggested filename
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedEmail {
    /// Trimmed English email body
    pub body: String,
    /// `Business_Dev_Email_{target_company}_{YYYYMMDD}.txt`
    pub filename: String,
}
