//! Prompt construction for the LLM strategy.
//!
//! Two independent prompts: one constrains the model to the tag
//! vocabulary and a comma-separated answer, one asks for an impersonal
//! factual summary in the configured language. Both end with the profile
//! text after a blank line.

use tl_core::vocab::InterestTag;

const TAGS_INSTRUCTION: &str = "Les informations suivantes sont issues d'un profil LinkedIn d'un professionnel de la data.\nAttribue à ce profil les labels les plus pertinents parmi :\n";

const TAGS_ANSWER_FORMAT: &str = "\nRéponds uniquement par une chaîne de texte contenant les tags séparés par des virgules, par exemple : 'Data Engineering, MLOps'";

const DESCRIPTION_INSTRUCTION: &str = "A partir des informations suivantes issues d'un profil LinkedIn, je souhaite faire un résumé impersonnel en 150 mots du profil de la personne. \
Ce résumé doit mettre l'accent sur l'expérience de la personne et ses capacités/savoir-faires techniques. \
Ce résumé doit rapidement permettre de savoir ce que sait faire la personne, en quoi elle est experte. \
Ce résumé doit être précis, et ne pas utiliser de termes vagues comme 'des compétences variées' ou 'une expérience solide'. Il ne doit contenir que de l'information factuelle. \
Ce résumé ne doit pas décrire les activités des entreprises, mais doit vraiment se concentrer sur les expériences et compétences de la personne.";

/// Prompt asking the model to pick tags from the vocabulary.
pub fn tags_prompt(profile_text: &str) -> String {
    let tag_list = InterestTag::ALL
        .iter()
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{TAGS_INSTRUCTION}{tag_list}{TAGS_ANSWER_FORMAT}\n\n{profile_text}")
}

/// Prompt asking the model for the ~150-word factual summary.
pub fn description_prompt(language: &str, profile_text: &str) -> String {
    format!(
        "{DESCRIPTION_INSTRUCTION} Ce résumé doit être en {}.\n\n{profile_text}",
        language_name(language)
    )
}

/// Map a language code to the name used inside the prompt. Unrecognized
/// codes are passed through as-is so the model still gets a hint.
fn language_name(code: &str) -> &str {
    match code {
        "fr" => "français",
        "en" => "anglais",
        "de" => "allemand",
        "es" => "espagnol",
        "it" => "italien",
        other => other,
    }
}
