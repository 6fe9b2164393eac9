//! Application configuration — read from the environment once at startup.
//!
//! Every selector is parsed eagerly so a typo in `TAGLINE_SOURCE` or
//! `TAGLINE_STRATEGY` fails before the first row is touched, never in the
//! middle of a batch. Core crates never read the environment themselves;
//! they get this struct's products by reference.

use anyhow::Context;
use std::path::PathBuf;
use std::time::Duration;
use tl_generate::llm::{LlmConfig, LlmProvider};
use tl_generate::{Strategy, StrategyKind};
use tl_scrape::brightdata::{BrightDataConfig, BrightDataSource};
use tl_scrape::mock::MockSource;
use tl_scrape::proxycurl::ProxycurlSource;
use tl_scrape::session::SessionSource;
use tl_scrape::{ProfileSource, SourceKind};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source_kind: SourceKind,
    pub strategy_kind: StrategyKind,
    pub provider_name: String,
    pub language: String,
    pub http_timeout: Duration,
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub proxycurl_api_key: Option<String>,
    pub brightdata_api_key: Option<String>,
    pub brightdata_dataset_id: Option<String>,
    pub brightdata_poll_interval: Duration,
    pub brightdata_deadline: Duration,
    pub cache_dir: PathBuf,
    pub li_at: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<AppConfig> {
        Ok(AppConfig {
            source_kind: SourceKind::parse(&env_or("TAGLINE_SOURCE", "mock"))?,
            strategy_kind: StrategyKind::parse(&env_or("TAGLINE_STRATEGY", "manual"))?,
            provider_name: env_or("TAGLINE_PROVIDER", "openai"),
            language: env_or("TAGLINE_LANGUAGE", "fr"),
            http_timeout: env_secs("TAGLINE_HTTP_TIMEOUT", 60)?,
            openai_api_key: env_opt("OPENAI_API_KEY"),
            gemini_api_key: env_opt("GEMINI_API_KEY"),
            proxycurl_api_key: env_opt("PROXYCURL_API_KEY"),
            brightdata_api_key: env_opt("BRIGHTDATA_API_KEY"),
            brightdata_dataset_id: env_opt("BRIGHTDATA_DATASET_ID"),
            brightdata_poll_interval: env_secs("BRIGHTDATA_POLL_INTERVAL", 3)?,
            brightdata_deadline: env_secs("BRIGHTDATA_TIMEOUT", 120)?,
            cache_dir: PathBuf::from(env_or("TAGLINE_CACHE_DIR", "data/fetched_json")),
            li_at: env_opt("LINKEDIN_LI_AT"),
        })
    }

    /// Resolve the generation strategy, with an optional CLI override of
    /// the configured selector.
    pub fn strategy(&self, override_kind: Option<&str>) -> anyhow::Result<Strategy> {
        let kind = match override_kind {
            Some(s) => StrategyKind::parse(s)?,
            None => self.strategy_kind,
        };
        match kind {
            StrategyKind::Manual => Ok(Strategy::Manual),
            StrategyKind::Llm => {
                let provider = LlmProvider::parse(
                    &self.provider_name,
                    self.openai_api_key.clone(),
                    self.gemini_api_key.clone(),
                )?;
                let mut config = LlmConfig::new(provider);
                config.language = self.language.clone();
                config.timeout = self.http_timeout;
                Ok(Strategy::Llm(config))
            }
        }
    }

    /// Resolve the profile source backend.
    pub fn source(&self) -> anyhow::Result<ProfileSource> {
        let source = match self.source_kind {
            SourceKind::Mock => ProfileSource::Mock(MockSource),
            SourceKind::Proxycurl => ProfileSource::Proxycurl(ProxycurlSource::new(
                self.proxycurl_api_key.clone().unwrap_or_default(),
                self.http_timeout,
            )?),
            SourceKind::BrightData => ProfileSource::BrightData(BrightDataSource::new(
                BrightDataConfig {
                    api_key: self.brightdata_api_key.clone().unwrap_or_default(),
                    dataset_id: self.brightdata_dataset_id.clone().unwrap_or_default(),
                    poll_interval: self.brightdata_poll_interval,
                    deadline: self.brightdata_deadline,
                    cache_dir: self.cache_dir.clone(),
                    http_timeout: self.http_timeout,
                },
            )?),
            SourceKind::Session => ProfileSource::Session(SessionSource::new(
                self.li_at.clone().unwrap_or_default(),
                self.http_timeout,
            )?),
        };
        Ok(source)
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(name: &str, default: &str) -> String {
    env_opt(name).unwrap_or_else(|| default.to_string())
}

fn env_secs(name: &str, default: u64) -> anyhow::Result<Duration> {
    let secs = match env_opt(name) {
        Some(value) => value
            .parse::<u64>()
            .with_context(|| format!("{name} must be a number of seconds, got '{value}'"))?,
        None => default,
    };
    Ok(Duration::from_secs(secs))
}
