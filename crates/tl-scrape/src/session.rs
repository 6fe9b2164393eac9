//! Session-cookie backend — authenticated member API using an `li_at` cookie.
//!
//! Unlike the vendor backends this one wants the bare public identifier,
//! so it strips a full profile URL down to its last path segment before
//! calling out.

use crate::ScrapeError;
use serde_json::json;
use std::time::Duration;

fn profile_endpoint(public_id: &str) -> String {
    format!("https://www.linkedin.com/voyager/api/identity/profiles/{public_id}/profileView")
}

/// Derive the public identifier a member-API call expects from whatever
/// the caller handed us: a full profile URL or an already-bare id.
pub fn public_identifier(target: &str) -> &str {
    target
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(target)
}

#[derive(Debug)]
pub struct SessionSource {
    li_at: String,
    client: reqwest::Client,
}

impl SessionSource {
    pub fn new(li_at: String, timeout: Duration) -> Result<SessionSource, ScrapeError> {
        if li_at.is_empty() {
            return Err(ScrapeError::Configuration(
                "LINKEDIN_LI_AT session cookie is not set".into(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScrapeError::Configuration(format!("http client: {e}")))?;
        Ok(SessionSource { li_at, client })
    }

    pub async fn fetch(&self, target: &str) -> Result<serde_json::Value, ScrapeError> {
        let public_id = public_identifier(target);
        if public_id.is_empty() {
            return Err(ScrapeError::InvalidTarget(format!(
                "no public identifier in '{target}'"
            )));
        }

        let response = self
            .client
            .get(profile_endpoint(public_id))
            .header("Cookie", format!("li_at={}", self.li_at))
            .header("csrf-token", "ajax:0000000000000000000")
            .header("x-restli-protocol-version", "2.0.0")
            .send()
            .await
            .map_err(|e| ScrapeError::Http(format!("session request failed: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScrapeError::NotFound(public_id.to_string()));
        }
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ScrapeError::Http(format!(
                "session API error for '{public_id}' (HTTP {status}): {error_body}"
            )));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ScrapeError::Http(format!("Response parse failed: {e}")))?;

        Ok(extract_profile(&raw))
    }
}

/// Map a member-API profile view onto the raw profile mapping. Experience
/// entries missing a title or company name are dropped rather than
/// failing the whole profile.
fn extract_profile(raw: &serde_json::Value) -> serde_json::Value {
    let summary = raw["summary"].as_str().unwrap_or("");
    let headline = raw["headline"].as_str().unwrap_or("");

    let mut experience = Vec::new();
    if let Some(entries) = raw["experience"].as_array() {
        for exp in entries {
            let title = exp["title"].as_str().filter(|t| !t.is_empty());
            let company = exp["companyName"].as_str().filter(|c| !c.is_empty());
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
    fn url_stripped_to_public_identifier() {
        assert_eq!(
            public_identifier("https://www.linkedin.com/in/jane-doe/"),
            "jane-doe"
        );
        assert_eq!(
            public_identifier("https://www.linkedin.com/in/jane-doe"),
            "jane-doe"
        );
    }

    #[test]
    fn bare_identifier_passes_through() {
        assert_eq!(public_identifier("jane-doe"), "jane-doe");
    }

    #[test]
    fn extraction_drops_incomplete_experience() {
        let profile = extract_profile(&json!({
            "summary": "Data platform lead.",
            "headline": "CDO",
            "experience": [
                {"title": "CDO", "companyName": "Acme"},
                {"title": "", "companyName": "Ghost Corp"},
                {"title": "Advisor"}
            ]
        }));
        assert_eq!(profile["experience"].as_array().unwrap().len(), 1);
        assert_eq!(profile["experience"][0]["title"], "CDO");
    }

    #[test]
    fn missing_cookie_rejected() {
        let err = SessionSource::new(String::new(), Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, ScrapeError::Configuration(_)));
    }
}
