//! tl-scrape: profile sources.
//!
//! Every backend answers the same question — "give me the raw profile
//! mapping for this target" — and owns its own notion of what a target
//! looks like: Proxycurl and BrightData want the full profile URL, the
//! session client derives the bare public identifier, the mock echoes
//! whatever it is handed. The core never normalizes identifiers.

pub mod brightdata;
pub mod cache;
pub mod mock;
pub mod proxycurl;
pub mod session;

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid target: {0}")]
    InvalidTarget(String),
    #[error("profile not found: {0}")]
    NotFound(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("http error: {0}")]
    Http(String),
    #[error("snapshot error: {0}")]
    Snapshot(String),
    #[error("timed out after {0:?} waiting for snapshot {1}")]
    Timeout(Duration, String),
    #[error("cache error: {0}")]
    Cache(String),
}

/// Source selector as it appears in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Mock,
    Proxycurl,
    BrightData,
    Session,
}

impl SourceKind {
    /// Parse the configured selector. Unknown values are rejected at
    /// configuration time.
    pub fn parse(s: &str) -> Result<SourceKind, ScrapeError> {
        match s {
            "mock" => Ok(SourceKind::Mock),
            "proxycurl" => Ok(SourceKind::Proxycurl),
            "brightdata" => Ok(SourceKind::BrightData),
            "session" => Ok(SourceKind::Session),
            other => Err(ScrapeError::Configuration(format!(
                "unknown profile source '{other}' (expected 'mock', 'proxycurl', 'brightdata' or 'session')"
            ))),
        }
    }
}

/// A resolved profile source, one variant per backend.
pub enum ProfileSource {
    Mock(mock::MockSource),
    Proxycurl(proxycurl::ProxycurlSource),
    BrightData(brightdata::BrightDataSource),
    Session(session::SessionSource),
}

impl ProfileSource {
    /// Fetch the raw profile mapping (`summary`, `headline`,
    /// `experience[]`) for the given target.
    pub async fn fetch(&self, target: &str) -> Result<serde_json::Value, ScrapeError> {
        match self {
            ProfileSource::Mock(source) => source.fetch(target),
            ProfileSource::Proxycurl(source) => source.fetch(target).await,
            ProfileSource::BrightData(source) => source.fetch(target).await,
            ProfileSource::Session(source) => source.fetch(target).await,
        }
    }
}
