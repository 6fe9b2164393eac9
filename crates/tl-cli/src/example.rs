//! Built-in demo profile for `tagline profile` without a file argument.

use serde_json::json;

pub fn example_profile() -> serde_json::Value {
    json!({
        "summary": "Expert en Data Engineering et Machine Learning. Passionné par le MLOps.",
        "headline": "Lead Data Scientist",
        "experience": [
            {"title": "Data Engineer", "company": "BigDataCorp"},
            {"title": "ML Engineer", "company": "AIStartup"}
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tl_core::profile::Profile;

    #[test]
    fn example_profile_validates() {
        let profile = Profile::from_value(&example_profile()).unwrap();
        assert_eq!(profile.experience.len(), 2);
    }
}
