//! LLM generator — two completion calls against a pluggable provider.

use crate::prompts;
use crate::GenerateError;
use std::time::Duration;
use tl_core::result::RawGeneration;

/// Output bound for the tag-selection completion.
pub const TAGS_MAX_TOKENS: u32 = 100;
/// Output bound for the description completion.
pub const DESCRIPTION_MAX_TOKENS: u32 = 500;

const OPENAI_COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Text-generation backends. Adding a provider means adding a variant and
/// a call function here; the validator and the orchestrator never change.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    OpenAi { api_key: String },
    Gemini { api_key: String },
}

impl LlmProvider {
    /// Resolve the configured provider name and its credential. Unknown
    /// names fail here, at configuration time.
    pub fn parse(
        name: &str,
        openai_api_key: Option<String>,
        gemini_api_key: Option<String>,
    ) -> Result<LlmProvider, GenerateError> {
        match name {
            "openai" => {
                let api_key = openai_api_key.ok_or_else(|| {
                    GenerateError::Configuration("OPENAI_API_KEY is not set".into())
                })?;
                Ok(LlmProvider::OpenAi { api_key })
            }
            "gemini" => {
                let api_key = gemini_api_key.ok_or_else(|| {
                    GenerateError::Configuration("GEMINI_API_KEY is not set".into())
                })?;
                Ok(LlmProvider::Gemini { api_key })
            }
            other => Err(GenerateError::Configuration(format!(
                "unknown provider '{other}' (expected 'openai' or 'gemini')"
            ))),
        }
    }
}

/// Configuration for LLM-based generation.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub model: String,
    /// Language code for the description prompt ("fr", "en", ...).
    pub language: String,
    /// Bound on each outbound HTTP call.
    pub timeout: Duration,
}

impl LlmConfig {
    pub fn new(provider: LlmProvider) -> Self {
        Self {
            provider,
            model: DEFAULT_OPENAI_MODEL.into(),
            language: "fr".into(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Issue the two completion requests and assemble the raw result.
///
/// The two calls are independent: tags first, description second, no
/// shared state beyond the HTTP client. Either failure aborts the pair.
pub async fn generate(
    profile_text: &str,
    config: &LlmConfig,
) -> Result<RawGeneration, GenerateError> {
    match &config.provider {
        LlmProvider::OpenAi { api_key } => {
            let client = reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(|e| GenerateError::Configuration(format!("http client: {e}")))?;

            let tags_output = call_openai(
                &client,
                api_key,
                &config.model,
                &prompts::tags_prompt(profile_text),
                TAGS_MAX_TOKENS,
            )
            .await?;
            let interest = normalize_tags_output(&tags_output);

            let description = call_openai(
                &client,
                api_key,
                &config.model,
                &prompts::description_prompt(&config.language, profile_text),
                DESCRIPTION_MAX_TOKENS,
            )
            .await?;

            Ok(RawGeneration {
                interest,
                description,
            })
        }
        LlmProvider::Gemini { .. } => Err(GenerateError::ProviderUnavailable(
            "gemini backend is not implemented yet".into(),
        )),
    }
}

async fn call_openai(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    prompt: &str,
    max_tokens: u32,
) -> Result<String, GenerateError> {
    let body = serde_json::json!({
        "model": model,
        "prompt": prompt,
        "max_tokens": max_tokens,
    });

    let response = client
        .post(OPENAI_COMPLETIONS_URL)
        .header("Authorization", format!("Bearer {api_key}"))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() || e.is_connect() {
                GenerateError::ProviderUnavailable(format!("OpenAI unreachable: {e}"))
            } else {
                GenerateError::Provider(format!("OpenAI request failed: {e}"))
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        let error_body = response.text().await.unwrap_or_default();
        return Err(GenerateError::Provider(format!(
            "OpenAI API error (HTTP {status}): {error_body}"
        )));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| GenerateError::Provider(format!("Response parse failed: {e}")))?;

    let raw = result.to_string();
    tracing::debug!(model, "completion response: {}", &raw[..raw.len().min(500)]);

    completion_text(&result)
}

/// Extract the completion text from a completions-API response body.
fn completion_text(body: &serde_json::Value) -> Result<String, GenerateError> {
    let text = body["choices"][0]["text"].as_str().unwrap_or("").trim();
    if text.is_empty() {
        return Err(GenerateError::Provider(
            "provider returned an empty completion".into(),
        ));
    }
    Ok(text.to_string())
}

/// Re-join the model's tag answer as a tidy comma-and-space list, dropping
/// empty fragments. Vocabulary validation happens later.
fn normalize_tags_output(output: &str) -> String {
    output
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
