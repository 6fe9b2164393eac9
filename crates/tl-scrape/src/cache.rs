//! Snapshot cache — one JSON file per fetched profile, addressed by the
//! SHA-256 of the target URL.

use crate::ScrapeError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

/// Envelope written around a cached profile payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct CachedSnapshot {
    pub scraper: String,
    pub fetched_at: String,
    pub url: String,
    pub data: serde_json::Value,
}

/// File-per-entry cache rooted at a directory.
#[derive(Debug)]
pub struct SnapshotCache {
    dir: PathBuf,
}

impl SnapshotCache {
    pub fn new(dir: impl Into<PathBuf>) -> Result<SnapshotCache, ScrapeError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| ScrapeError::Cache(format!("create {}: {e}", dir.display())))?;
        Ok(SnapshotCache { dir })
    }

    /// Deterministic cache path for a target: `<scraper>_<sha256-hex>.json`.
    pub fn entry_path(&self, scraper: &str, target: &str) -> PathBuf {
        self.dir.join(format!("{scraper}_{}.json", cache_key(target)))
    }

    /// Return the cached payload for a target, if present.
    pub fn lookup(
        &self,
        scraper: &str,
        target: &str,
    ) -> Result<Option<serde_json::Value>, ScrapeError> {
        let path = self.entry_path(scraper, target);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .map_err(|e| ScrapeError::Cache(format!("read {}: {e}", path.display())))?;
        let snapshot: CachedSnapshot = serde_json::from_str(&contents)
            .map_err(|e| ScrapeError::Cache(format!("invalid cached JSON in {}: {e}", path.display())))?;
        tracing::info!(url = target, path = %path.display(), "using cached snapshot");
        Ok(Some(snapshot.data))
    }

    /// Store a payload for a target.
    pub fn store(
        &self,
        scraper: &str,
        target: &str,
        data: &serde_json::Value,
    ) -> Result<PathBuf, ScrapeError> {
        let path = self.entry_path(scraper, target);
        let snapshot = CachedSnapshot {
            scraper: scraper.to_string(),
            fetched_at: chrono::Utc::now().to_rfc3339(),
            url: target.to_string(),
            data: data.clone(),
        };
        let contents = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ScrapeError::Cache(format!("serialize snapshot: {e}")))?;
        fs::write(&path, contents)
            .map_err(|e| ScrapeError::Cache(format!("write {}: {e}", path.display())))?;
        tracing::info!(url = target, path = %path.display(), "cached snapshot");
        Ok(path)
    }
}

/// Hex SHA-256 of the target, the content address of a snapshot.
pub fn cache_key(target: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(target.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cache_key_deterministic() {
        let url = "https://www.linkedin.com/in/jane-doe/";
        assert_eq!(cache_key(url), cache_key(url));
    }

    #[test]
    fn cache_key_differs_per_target() {
        assert_ne!(
            cache_key("https://www.linkedin.com/in/jane-doe/"),
            cache_key("https://www.linkedin.com/in/john-doe/")
        );
    }

    #[test]
    fn lookup_miss_then_hit_after_store() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SnapshotCache::new(dir.path()).unwrap();
        let target = "https://www.linkedin.com/in/jane-doe/";

        assert!(cache.lookup("brightdata", target).unwrap().is_none());

        let data = json!({"about": "Data person", "current_company": {"title": "CDO", "name": "Acme"}});
        cache.store("brightdata", target, &data).unwrap();

        let hit = cache.lookup("brightdata", target).unwrap().unwrap();
        assert_eq!(hit, data);
    }

    #[test]
    fn stored_envelope_carries_provenance() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SnapshotCache::new(dir.path()).unwrap();
        let target = "https://www.linkedin.com/in/jane-doe/";
        let path = cache.store("brightdata", target, &json!({})).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let snapshot: CachedSnapshot = serde_json::from_str(&contents).unwrap();
        assert_eq!(snapshot.scraper, "brightdata");
        assert_eq!(snapshot.url, target);
        assert!(!snapshot.fetched_at.is_empty());
    }
}
