//! Prompt for the interest paragraph

/// Build the business-interest prompt for the generator
pub fn interest_prompt(your_company: &str, target_company: &str, summary: &str) -> String {
    format!(
        "As a business development manager at {your_company}, write 3-4 sentences explaining \
why you are interested in partnering with {target_company}, using the following summary: \
{summary} Do not mention job applications, do not write as a candidate. Focus on B2B cooperation."
    )
}
