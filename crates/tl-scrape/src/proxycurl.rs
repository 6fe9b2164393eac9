//! Proxycurl backend — person-profile lookup by full LinkedIn URL.

use crate::ScrapeError;
use serde_json::json;
use std::time::Duration;

const PROFILE_ENDPOINT: &str = "https://nubela.co/proxycurl/api/v2/linkedin";

/// Vendor API client. Takes the full profile URL as its target; Proxycurl
/// does its own identifier resolution server-side.
#[derive(Debug)]
pub struct ProxycurlSource {
    api_key: String,
    client: reqwest::Client,
}

impl ProxycurlSource {
    pub fn new(api_key: String, timeout: Duration) -> Result<ProxycurlSource, ScrapeError> {
        if api_key.is_empty() {
            return Err(ScrapeError::Configuration(
                "PROXYCURL_API_KEY is not set".into(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScrapeError::Configuration(format!("http client: {e}")))?;
        Ok(ProxycurlSource { api_key, client })
    }

    pub async fn fetch(&self, url: &str) -> Result<serde_json::Value, ScrapeError> {
        let response = self
            .client
            .get(PROFILE_ENDPOINT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .query(&[
                ("url", url),
                ("extra", "include"),
                ("skills", "include"),
                ("use_cache", "if-present"),
                ("fallback_to_cache", "on-error"),
            ])
            .send()
            .await
            .map_err(|e| ScrapeError::Http(format!("Proxycurl request failed: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScrapeError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ScrapeError::Http(format!(
                "Proxycurl API error (HTTP {status}): {error_body}"
            )));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ScrapeError::Http(format!("Response parse failed: {e}")))?;

        Ok(extract_profile(&raw))
    }
}

/// Map Proxycurl's response shape onto the raw profile mapping: the
/// `occupation` field is the closest thing to a headline, experience
/// company names are nested one level down.
fn extract_profile(raw: &serde_json::Value) -> serde_json::Value {
    let summary = raw["summary"].as_str().unwrap_or("");
    let headline = raw["occupation"].as_str().unwrap_or("");

    let mut experience = Vec::new();
    if let Some(entries) = raw["experience"].as_array() {
        for exp in entries {
            let title = exp["title"].as_str();
            let company = exp["company"]["name"].as_str();
            if let (Some(title), Some(company)) = (title, company) {
                experience.push(json!({"title": title, "company": company}));
            }
        }
    }

    json!({
        "summary": summary,
        "headline": headline,
        "experience": experience
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_maps_occupation_to_headline() {
        let raw = json!({
            "summary": "Builds data platforms.",
            "occupation": "Head of Data at Acme",
            "experience": [
                {"title": "Data Engineer", "company": {"name": "Acme"}},
                {"title": "Analyst"}
            ]
        });
        let profile = extract_profile(&raw);
        assert_eq!(profile["headline"], "Head of Data at Acme");
        // The entry without a company is dropped.
        assert_eq!(profile["experience"].as_array().unwrap().len(), 1);
        assert_eq!(profile["experience"][0]["company"], "Acme");
    }

    #[test]
    fn extraction_tolerates_missing_fields() {
        let profile = extract_profile(&json!({}));
        assert_eq!(profile["summary"], "");
        assert_eq!(profile["headline"], "");
        assert!(profile["experience"].as_array().unwrap().is_empty());
    }

    #[test]
    fn empty_api_key_rejected() {
        let err = ProxycurlSource::new(String::new(), Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, ScrapeError::Configuration(_)));
    }
}
