//! Profile schema — validated form of the raw mapping a profile source returns.

use crate::ValidationError;
use serde::{Deserialize, Serialize};

/// One position held by the person. Both fields are required and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
}

/// A validated professional profile.
///
/// All fields are optional in the incoming mapping and coerced to their
/// defaults; unknown keys are ignored. A malformed `experience` entry
/// fails validation of the whole profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl Profile {
    /// Validate an arbitrary JSON mapping into a `Profile`.
    ///
    /// Missing `title`/`company` on an experience entry, or a field with
    /// the wrong primitive type, is a `ValidationError`. Extra keys pass
    /// through silently.
    pub fn from_value(raw: &serde_json::Value) -> Result<Profile, ValidationError> {
        let profile: Profile = serde_json::from_value(raw.clone())
            .map_err(|e| ValidationError::Profile(e.to_string()))?;

        for (index, exp) in profile.experience.iter().enumerate() {
            if exp.title.is_empty() {
                return Err(ValidationError::EmptyExperienceField {
                    index,
                    field: "title",
                });
            }
            if exp.company.is_empty() {
                return Err(ValidationError::EmptyExperienceField {
                    index,
                    field: "company",
                });
            }
        }

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_applied_for_absent_fields() {
        let profile = Profile::from_value(&json!({})).unwrap();
        assert_eq!(profile.summary, "");
        assert_eq!(profile.headline, "");
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn full_profile_accepted() {
        let profile = Profile::from_value(&json!({
            "summary": "Expert en Data Engineering.",
            "headline": "Lead Data Scientist",
            "experience": [
                {"title": "Data Engineer", "company": "BigDataCorp"},
                {"title": "ML Engineer", "company": "AIStartup"}
            ]
        }))
        .unwrap();
        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].title, "Data Engineer");
    }

    #[test]
    fn unknown_keys_ignored() {
        let profile = Profile::from_value(&json!({
            "headline": "CTO",
            "follower_count": 1234,
            "skills": ["Rust"]
        }))
        .unwrap();
        assert_eq!(profile.headline, "CTO");
    }

    #[test]
    fn experience_missing_company_rejected() {
        let err = Profile::from_value(&json!({
            "experience": [{"title": "X"}]
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::Profile(_)));
    }

    #[test]
    fn experience_empty_title_rejected() {
        let err = Profile::from_value(&json!({
            "experience": [{"title": "", "company": "Acme"}]
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::EmptyExperienceField {
                index: 0,
                field: "title"
            }
        ));
    }

    #[test]
    fn wrong_primitive_type_rejected() {
        let err = Profile::from_value(&json!({"summary": 42})).unwrap_err();
        assert!(matches!(err, ValidationError::Profile(_)));
    }
}
