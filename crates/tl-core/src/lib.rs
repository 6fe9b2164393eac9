//! tl-core: Shared types for Tagline
//!
//! This crate has zero internal crate dependencies and defines the
//! canonical types used across all other tl-* crates: the interest-tag
//! vocabulary, the validated profile schema, the profile-text projection,
//! and the validated enrichment result.

pub mod profile;
pub mod result;
pub mod text;
pub mod vocab;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid profile: {0}")]
    Profile(String),
    #[error("experience entry {index}: {field} must not be empty")]
    EmptyExperienceField { index: usize, field: &'static str },
    #[error("no valid interest tag found in '{0}'")]
    NoValidTag(String),
    #[error("description too short: {len} characters, minimum is {min}")]
    DescriptionTooShort { len: usize, min: usize },
}

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::profile::{Experience, Profile};
    pub use crate::result::{Enrichment, RawGeneration};
    pub use crate::vocab::InterestTag;
    pub use crate::ValidationError;
}
