//! Domain entities - Request-scoped values flowing through the pipeline

mod composed_email;
mod draft_content;
mod outreach_request;

pub use composed_email::ComposedEmail;
pub use draft_content::DraftContent;
pub use outreach_request::{
    DEFAULT_TARGET_COMPANY, DEFAULT_YOUR_COMPANY, DEFAULT_YOUR_NAME, DEFAULT_YOUR_TITLE,
    OutreachBrief, OutreachRequest, Sender,
};
