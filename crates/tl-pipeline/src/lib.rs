//! tl-pipeline: the enrichment orchestrator.
//!
//! One entry point, four hard-sequenced stages: validate the raw profile
//! mapping, project it to text, run the selected generation strategy,
//! validate the raw output against the vocabulary. Any stage failure
//! aborts the invocation — there is no partial result and no retry here;
//! per-record resilience belongs to the caller.

use thiserror::Error;
use tl_core::profile::Profile;
use tl_core::result::Enrichment;
use tl_core::{text, ValidationError};
use tl_generate::{GenerateError, Strategy};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("profile validation failed: {0}")]
    Profile(#[source] ValidationError),
    #[error("generation failed: {0}")]
    Generation(#[from] GenerateError),
    #[error("result validation failed: {0}")]
    Result(#[source] ValidationError),
}

/// Enrich one raw profile mapping with the given strategy.
///
/// Each invocation owns its own state; the only shared inputs are the
/// read-only vocabulary and the strategy configuration, so callers are
/// free to run invocations for different records in parallel.
pub async fn process_profile(
    raw_profile: &serde_json::Value,
    strategy: &Strategy,
) -> Result<Enrichment, PipelineError> {
    let profile = Profile::from_value(raw_profile).map_err(PipelineError::Profile)?;
    let profile_text = text::project(&profile);

    tracing::debug!(chars = profile_text.len(), "projected profile text");

    let generated = strategy.generate(&profile_text).await?;
    Enrichment::from_raw(generated).map_err(PipelineError::Result)
}
