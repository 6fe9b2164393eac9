//! tl-generate: ProfileText → raw (interest, description) generation.
//!
//! Two strategies: a deterministic keyword matcher and an LLM-backed
//! generator. Both return a `RawGeneration` whose interest string is not
//! yet validated against the vocabulary — that is the result validator's
//! job, not ours.

pub mod keyword;
pub mod llm;
pub mod prompts;

use thiserror::Error;
use tl_core::result::RawGeneration;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("generation failed: {0}")]
    Provider(String),
}

/// Strategy selector as it appears in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Manual,
    Llm,
}

impl StrategyKind {
    /// Parse the configured selector. Unknown values are rejected here,
    /// at configuration time, never during a pipeline run.
    pub fn parse(s: &str) -> Result<StrategyKind, GenerateError> {
        match s {
            "manual" => Ok(StrategyKind::Manual),
            "llm" => Ok(StrategyKind::Llm),
            other => Err(GenerateError::Configuration(format!(
                "unknown strategy '{other}' (expected 'manual' or 'llm')"
            ))),
        }
    }
}

/// A fully-resolved generation strategy, one variant per selector.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Offline keyword scan with a placeholder description. Degraded mode.
    Manual,
    /// Two LLM completion calls against the configured provider.
    Llm(llm::LlmConfig),
}

impl Strategy {
    /// Generate a raw (interest, description) pair from the profile text.
    pub async fn generate(&self, profile_text: &str) -> Result<RawGeneration, GenerateError> {
        match self {
            Strategy::Manual => Ok(keyword::build(profile_text)),
            Strategy::Llm(config) => llm::generate(profile_text, config).await,
        }
    }
}
