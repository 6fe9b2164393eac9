//! Mock source — fixed profile data for tests and offline runs.

use crate::ScrapeError;
use serde_json::json;

/// Offline source returning a canned profile. The target only shows up in
/// the summary so callers can see what was asked for.
#[derive(Debug, Default)]
pub struct MockSource;

impl MockSource {
    pub fn fetch(&self, target: &str) -> Result<serde_json::Value, ScrapeError> {
        Ok(json!({
            "summary": format!("Mock summary for {target}"),
            "headline": "Senior Software Engineer",
            "experience": [
                {"title": "Software Engineer", "company": "MockCorp"},
                {"title": "Tech Lead", "company": "Example Inc."}
            ]
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_profile_has_expected_shape() {
        let profile = MockSource.fetch("jane-doe").unwrap();
        assert_eq!(
            profile["summary"].as_str().unwrap(),
            "Mock summary for jane-doe"
        );
        assert_eq!(profile["experience"].as_array().unwrap().len(), 2);
        assert!(profile["experience"][0]["title"].is_string());
        assert!(profile["experience"][0]["company"].is_string());
    }
}
