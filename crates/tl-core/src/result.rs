//! Enrichment result — validates raw strategy output against the vocabulary.

use crate::vocab::InterestTag;
use crate::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Minimum number of characters for an accepted description.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Raw output of a generation strategy, before vocabulary validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGeneration {
    pub interest: String,
    pub description: String,
}

/// Validated enrichment, ready for persistence by the caller.
///
/// `interest` only contains exact vocabulary members, joined with `", "`,
/// in the order they appeared in the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    pub interest: String,
    pub description: String,
}

/// Strip the noise LLMs like to wrap around a tag.
///
/// Recognized noise patterns, applied in order: surrounding whitespace, a
/// leading one-character label (`"s : MLOps"`, `"a- NLP"`), trailing
/// `.`/`;`/`:`/spaces. New patterns belong here, not in the validation
/// control flow.
pub fn clean_tag(raw: &str) -> String {
    static LABEL_PREFIX: OnceLock<Regex> = OnceLock::new();
    let prefix = LABEL_PREFIX.get_or_init(|| Regex::new(r"^\w\s*[:\-–]").expect("valid regex"));

    let tag = raw.trim();
    let tag = prefix.replace(tag, "");
    tag.trim().trim_end_matches(['.', ';', ':', ' ']).to_string()
}

impl Enrichment {
    /// Validate a `RawGeneration` into an `Enrichment`.
    ///
    /// Tokens that do not clean up to a vocabulary member are dropped and
    /// logged; if none survive, the whole result is rejected. The
    /// description is accepted verbatim subject to the minimum length.
    pub fn from_raw(raw: RawGeneration) -> Result<Enrichment, ValidationError> {
        let description_chars = raw.description.chars().count();
        if description_chars < MIN_DESCRIPTION_CHARS {
            return Err(ValidationError::DescriptionTooShort {
                len: description_chars,
                min: MIN_DESCRIPTION_CHARS,
            });
        }

        let mut valid: Vec<&'static str> = Vec::new();
        let mut invalid: Vec<String> = Vec::new();
        for token in raw.interest.split(',') {
            let cleaned = clean_tag(token);
            match InterestTag::parse_exact(&cleaned) {
                Some(tag) => valid.push(tag.as_str()),
                None => invalid.push(cleaned),
            }
        }

        if !invalid.is_empty() {
            tracing::info!(ignored = ?invalid, "dropped interest tags not in the vocabulary");
        }
        if valid.is_empty() {
            return Err(ValidationError::NoValidTag(raw.interest));
        }

        Ok(Enrichment {
            interest: valid.join(", "),
            description: raw.description,
        })
    }
}
