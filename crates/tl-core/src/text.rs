//! Profile-text projection — flattens a validated profile into one string.

use crate::profile::Profile;

/// Concatenate the relevant profile fields into a single text blob.
///
/// Field order is fixed: summary, headline, then each experience in
/// sequence as `"title company"`. Both downstream strategies (keyword
/// scan, prompt construction) depend on this exact order, so it must not
/// change. The result is trimmed at the ends only; interior runs of
/// whitespace are kept as-is.
pub fn project(profile: &Profile) -> String {
    let mut text = format!("{} {}", profile.summary, profile.headline);
    for exp in &profile.experience {
        text.push_str(&format!(" {} {}", exp.title, exp.company));
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Experience;

    fn sample() -> Profile {
        Profile {
            summary: "Expert en Data Engineering.".into(),
            headline: "Lead Data Scientist".into(),
            experience: vec![
                Experience {
                    title: "Data Engineer".into(),
                    company: "BigDataCorp".into(),
                },
                Experience {
                    title: "ML Engineer".into(),
                    company: "AIStartup".into(),
                },
            ],
        }
    }

    #[test]
    fn field_order_is_fixed() {
        assert_eq!(
            project(&sample()),
            "Expert en Data Engineering. Lead Data Scientist Data Engineer BigDataCorp ML Engineer AIStartup"
        );
    }

    #[test]
    fn projection_is_deterministic() {
        let profile = sample();
        assert_eq!(project(&profile), project(&profile));
    }

    #[test]
    fn empty_profile_projects_to_empty_string() {
        assert_eq!(project(&Profile::default()), "");
    }

    #[test]
    fn ends_trimmed_interior_spaces_kept() {
        let profile = Profile {
            summary: String::new(),
            headline: "Head  of  Data".into(),
            experience: vec![],
        };
        // Leading space from the empty summary is trimmed, the doubled
        // interior spaces survive.
        assert_eq!(project(&profile), "Head  of  Data");
    }
}
