//! BrightData backend — dataset trigger, progress polling, snapshot fetch.
//!
//! BrightData runs a collection job per profile: trigger a snapshot, poll
//! its progress until `ready`, then download the snapshot JSON. Fetched
//! snapshots land in the file cache so a re-run never re-triggers a job
//! for the same URL.

use crate::cache::SnapshotCache;
use crate::ScrapeError;
use serde_json::json;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const TRIGGER_ENDPOINT: &str = "https://api.brightdata.com/datasets/v3/trigger";
const SCRAPER_NAME: &str = "brightdata";

fn progress_endpoint(snapshot_id: &str) -> String {
    format!("https://api.brightdata.com/datasets/v3/progress/{snapshot_id}")
}

fn snapshot_endpoint(snapshot_id: &str) -> String {
    format!("https://api.brightdata.com/datasets/v3/snapshot/{snapshot_id}?format=json")
}

#[derive(Debug, Clone)]
pub struct BrightDataConfig {
    pub api_key: String,
    pub dataset_id: String,
    /// Delay between progress polls.
    pub poll_interval: Duration,
    /// Overall deadline for a snapshot to become ready.
    pub deadline: Duration,
    /// Directory for the snapshot file cache.
    pub cache_dir: PathBuf,
    /// Bound on each individual HTTP call.
    pub http_timeout: Duration,
}

#[derive(Debug)]
pub struct BrightDataSource {
    config: BrightDataConfig,
    client: reqwest::Client,
    cache: SnapshotCache,
}

impl BrightDataSource {
    pub fn new(config: BrightDataConfig) -> Result<BrightDataSource, ScrapeError> {
        if config.api_key.is_empty() || config.dataset_id.is_empty() {
            return Err(ScrapeError::Configuration(
                "BRIGHTDATA_API_KEY or BRIGHTDATA_DATASET_ID is not set".into(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| ScrapeError::Configuration(format!("http client: {e}")))?;
        let cache = SnapshotCache::new(&config.cache_dir)?;
        Ok(BrightDataSource {
            config,
            client,
            cache,
        })
    }

    /// Fetch a profile by full URL. Anything that is not a
    /// `…linkedin.com/in/…` URL is rejected before any network traffic.
    pub async fn fetch(&self, url: &str) -> Result<serde_json::Value, ScrapeError> {
        if url.is_empty() || !url.contains("linkedin.com/in/") {
            return Err(ScrapeError::InvalidTarget(format!(
                "'{url}' is not a profile URL"
            )));
        }

        if let Some(cached) = self.cache.lookup(SCRAPER_NAME, url)? {
            return Ok(extract_profile(&cached));
        }

        let snapshot_id = self.trigger_snapshot(url).await?;
        self.wait_until_ready(&snapshot_id).await?;
        let profile = self.fetch_snapshot_data(&snapshot_id).await?;
        self.cache.store(SCRAPER_NAME, url, &profile)?;

        Ok(extract_profile(&profile))
    }

    async fn trigger_snapshot(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .post(TRIGGER_ENDPOINT)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .query(&[
                ("dataset_id", self.config.dataset_id.as_str()),
                ("include_errors", "true"),
            ])
            .json(&json!([{"url": url}]))
            .send()
            .await
            .map_err(|e| ScrapeError::Http(format!("trigger request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ScrapeError::Http(format!(
                "trigger error (HTTP {status}): {error_body}"
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ScrapeError::Http(format!("trigger parse failed: {e}")))?;

        match body["snapshot_id"].as_str() {
            Some(id) if !id.is_empty() => {
                tracing::info!(snapshot_id = id, url, "snapshot triggered");
                Ok(id.to_string())
            }
            _ => Err(ScrapeError::Snapshot(format!(
                "no snapshot_id returned: {body}"
            ))),
        }
    }

    async fn wait_until_ready(&self, snapshot_id: &str) -> Result<(), ScrapeError> {
        let endpoint = progress_endpoint(snapshot_id);
        let start = Instant::now();

        loop {
            if start.elapsed() > self.config.deadline {
                return Err(ScrapeError::Timeout(
                    self.config.deadline,
                    snapshot_id.to_string(),
                ));
            }

            let response = self
                .client
                .get(&endpoint)
                .header("Authorization", format!("Bearer {}", self.config.api_key))
                .send()
                .await
                .map_err(|e| ScrapeError::Http(format!("progress request failed: {e}")))?;

            match response.status() {
                reqwest::StatusCode::OK => {
                    let body: serde_json::Value = response
                        .json()
                        .await
                        .map_err(|e| ScrapeError::Http(format!("progress parse failed: {e}")))?;
                    let state = body["status"].as_str().unwrap_or("unknown");
                    tracing::info!(
                        snapshot_id,
                        state,
                        elapsed_secs = start.elapsed().as_secs(),
                        "snapshot progress"
                    );
                    if state == "ready" {
                        return Ok(());
                    }
                }
                reqwest::StatusCode::ACCEPTED => {
                    tracing::debug!(snapshot_id, "snapshot still collecting");
                }
                status => {
                    tracing::warn!(snapshot_id, %status, "unexpected polling response");
                }
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    async fn fetch_snapshot_data(&self, snapshot_id: &str) -> Result<serde_json::Value, ScrapeError> {
        let response = self
            .client
            .get(snapshot_endpoint(snapshot_id))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
            .map_err(|e| ScrapeError::Http(format!("snapshot request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ScrapeError::Http(format!(
                "snapshot error (HTTP {status}): {error_body}"
            )));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ScrapeError::Http(format!("snapshot parse failed: {e}")))?;

        // A snapshot is an array of collected records; one URL means one record.
        match data.as_array().and_then(|records| records.first()) {
            Some(record) if record.is_object() => Ok(record.clone()),
            _ => Err(ScrapeError::Snapshot(format!(
                "unexpected snapshot format for {snapshot_id}"
            ))),
        }
    }
}

/// Map a BrightData record onto the raw profile mapping. The dataset has
/// no clean headline or experience list: `about` (or the first
/// recommendation) stands in for the summary, `current_company` for the
/// headline, and experience stays empty.
fn extract_profile(record: &serde_json::Value) -> serde_json::Value {
    let summary = record["about"]
        .as_str()
        .filter(|s| !s.is_empty())
        .or_else(|| record["recommendations"][0].as_str())
        .unwrap_or("");

    let title = record["current_company"]["title"].as_str().unwrap_or("");
    let company = record["current_company"]["name"].as_str().unwrap_or("");
    let headline = if title.is_empty() && company.is_empty() {
        String::new()
    } else {
        format!("{title} at {company}").trim().to_string()
    };

    json!({
        "summary": summary,
        "headline": headline,
        "experience": []
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &std::path::Path) -> BrightDataConfig {
        BrightDataConfig {
            api_key: "key".into(),
            dataset_id: "gd_test".into(),
            poll_interval: Duration::from_secs(3),
            deadline: Duration::from_secs(120),
            cache_dir: dir.to_path_buf(),
            http_timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn non_profile_url_rejected_offline() {
        let dir = tempfile::tempdir().unwrap();
        let source = BrightDataSource::new(config(dir.path())).unwrap();
        let err = source.fetch("https://example.com/jane").await.unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidTarget(_)));
    }

    #[tokio::test]
    async fn cached_snapshot_skips_the_network() {
        let dir = tempfile::tempdir().unwrap();
        let source = BrightDataSource::new(config(dir.path())).unwrap();
        let url = "https://www.linkedin.com/in/jane-doe/";

        source
            .cache
            .store(
                SCRAPER_NAME,
                url,
                &json!({
                    "about": "Data platform lead.",
                    "current_company": {"title": "CDO", "name": "Acme"}
                }),
            )
            .unwrap();

        // No HTTP server is running; this only succeeds via the cache.
        let profile = source.fetch(url).await.unwrap();
        assert_eq!(profile["summary"], "Data platform lead.");
        assert_eq!(profile["headline"], "CDO at Acme");
    }

    #[test]
    fn missing_credentials_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(dir.path());
        cfg.api_key = String::new();
        assert!(matches!(
            BrightDataSource::new(cfg).unwrap_err(),
            ScrapeError::Configuration(_)
        ));
    }

    #[test]
    fn extraction_falls_back_to_first_recommendation() {
        let profile = extract_profile(&json!({
            "about": "",
            "recommendations": ["Great colleague, deep MLOps knowledge."],
            "current_company": {}
        }));
        assert_eq!(profile["summary"], "Great colleague, deep MLOps knowledge.");
        assert_eq!(profile["headline"], "");
        assert!(profile["experience"].as_array().unwrap().is_empty());
    }
}
