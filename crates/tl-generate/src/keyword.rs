//! Keyword matcher — rule-based tag detection over the profile text.

use tl_core::result::RawGeneration;
use tl_core::vocab::InterestTag;

/// Description emitted by the keyword strategy. Callers can compare
/// against this const to detect rows that never saw an LLM.
pub const PLACEHOLDER_DESCRIPTION: &str = "Auto-generated summary to be completed.";

/// Case-insensitive substring scan of every vocabulary tag inside the
/// profile text. Matches are emitted in vocabulary order, not text order.
///
/// This strategy cannot synthesize a real description; it returns the
/// fixed placeholder and is therefore a degraded mode, never equivalent
/// to LLM output. The warn below keeps that visible in the logs.
pub fn build(profile_text: &str) -> RawGeneration {
    let text_norm = profile_text.to_lowercase();

    let matched: Vec<&str> = InterestTag::ALL
        .iter()
        .filter(|tag| text_norm.contains(&tag.as_str().to_lowercase()))
        .map(|tag| tag.as_str())
        .collect();

    tracing::warn!(
        matched = matched.len(),
        "keyword strategy ran: description is a fixed placeholder, not a generated summary"
    );

    RawGeneration {
        interest: matched.join(", "),
        description: PLACEHOLDER_DESCRIPTION.to_string(),
    }
}
