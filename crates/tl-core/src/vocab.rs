//! Interest-tag vocabulary — the closed set of values a profile may be tagged with.

/// Allowed interest tags, in canonical order.
///
/// Membership is exact-string and case-sensitive: `parse_exact` only accepts
/// the spelling returned by `as_str`. Cleaning of noisy model output happens
/// upstream, in `result::clean_tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterestTag {
    DataEngineering,
    DataGouvernance,
    DataAnalytics,
    DataInfrastructure,
    MlOps,
    DevOps,
    Web,
    MachineLearning,
    TimeSeries,
    Nlp,
    ComputerVision,
    FrugalAi,
    EthicalGreenAi,
    Explicability,
    PrivacySafety,
    GenAiImage,
    GenAiText,
}

impl InterestTag {
    /// Every tag, in canonical iteration order. Keyword matching and
    /// prompt construction both rely on this order being stable.
    pub const ALL: [InterestTag; 17] = [
        InterestTag::DataEngineering,
        InterestTag::DataGouvernance,
        InterestTag::DataAnalytics,
        InterestTag::DataInfrastructure,
        InterestTag::MlOps,
        InterestTag::DevOps,
        InterestTag::Web,
        InterestTag::MachineLearning,
        InterestTag::TimeSeries,
        InterestTag::Nlp,
        InterestTag::ComputerVision,
        InterestTag::FrugalAi,
        InterestTag::EthicalGreenAi,
        InterestTag::Explicability,
        InterestTag::PrivacySafety,
        InterestTag::GenAiImage,
        InterestTag::GenAiText,
    ];

    /// Canonical spelling of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestTag::DataEngineering => "Data Engineering",
            InterestTag::DataGouvernance => "Data Gouvernance",
            InterestTag::DataAnalytics => "Data Analytics",
            InterestTag::DataInfrastructure => "Data Infrastructure",
            InterestTag::MlOps => "MLOps",
            InterestTag::DevOps => "DevOps",
            InterestTag::Web => "Web",
            InterestTag::MachineLearning => "Machine Learning",
            InterestTag::TimeSeries => "Time Series",
            InterestTag::Nlp => "NLP",
            InterestTag::ComputerVision => "Computer Vision",
            InterestTag::FrugalAi => "Frugal AI",
            InterestTag::EthicalGreenAi => "Ethical/Green AI",
            InterestTag::Explicability => "Explicability",
            InterestTag::PrivacySafety => "Privacy/Safety",
            InterestTag::GenAiImage => "Generative AI (images)",
            InterestTag::GenAiText => "Generative AI (text)",
        }
    }

    /// Exact, case-sensitive lookup. Returns `None` for anything that is
    /// not a canonical spelling.
    pub fn parse_exact(s: &str) -> Option<InterestTag> {
        InterestTag::ALL.iter().copied().find(|tag| tag.as_str() == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_tags() {
        for tag in InterestTag::ALL {
            assert_eq!(InterestTag::parse_exact(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert_eq!(InterestTag::parse_exact("MLOps"), Some(InterestTag::MlOps));
        assert_eq!(InterestTag::parse_exact("mlops"), None);
        assert_eq!(InterestTag::parse_exact("MLOPS"), None);
    }

    #[test]
    fn unknown_tag_rejected() {
        assert_eq!(InterestTag::parse_exact("Blockchain"), None);
        assert_eq!(InterestTag::parse_exact(""), None);
    }
}
