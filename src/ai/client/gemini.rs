//! Gemini API Client
//!
//! LLM client using Google's Generative Language REST API.
//! Returns the raw reply text with token usage metrics; transient
//! failures are retried with exponential backoff driven by error
//! classification.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use super::{ClientConfig, LlmClient, LlmReply, ReplyMetadata, ReplyTiming, TokenUsage};
use crate::constants::retry;
use crate::types::{ErrorCategory, ErrorClassifier, LlmError, Result, SageError};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-pro";
const PROVIDER: &str = "gemini";

/// Gemini API client with secure API key handling
pub struct GeminiClient {
    /// API key stored securely - never exposed in logs or debug output
    api_key: SecretString,
    api_base: String,
    model: String,
    temperature: f32,
    max_tokens: usize,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_key_str = config
            .api_key
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                SageError::Config(
                    "Gemini API key not found. Set GEMINI_API_KEY env var or provide in config"
                        .to_string(),
                )
            })?;

        let api_base = config
            .api_base
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Url::parse(&api_base)
            .map_err(|e| SageError::Config(format!("Invalid Gemini API base '{}': {}", api_base, e)))?;

        let model = config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SageError::LlmApi(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: SecretString::from(api_key_str),
            api_base,
            model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client,
        })
    }

    /// One request/response round trip, classified on failure
    async fn attempt(&self, prompt: &str) -> std::result::Result<LlmReply, LlmError> {
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);
        let request = GenerateContentRequest::new(prompt, self.temperature, self.max_tokens);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ErrorClassifier::classify(&e.to_string(), PROVIDER))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ErrorClassifier::classify_http_status(status, &body, PROVIDER));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            LlmError::with_provider(
                ErrorCategory::Unknown,
                format!("Failed to parse Gemini response: {}", e),
                PROVIDER,
            )
        })?;

        let usage = body
            .usage_metadata
            .as_ref()
            .map(|u| TokenUsage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        let text = body.reply_text();
        if text.is_empty() {
            return Err(LlmError::with_provider(
                ErrorCategory::Unknown,
                "No content in Gemini response",
                PROVIDER,
            ));
        }

        Ok(LlmReply {
            text,
            usage,
            timing: ReplyTiming::default(),
            metadata: ReplyMetadata {
                model: self.model.clone(),
                provider: PROVIDER.to_string(),
            },
        })
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<LlmReply> {
        info!(
            "Generating with Gemini (model: {}, temperature: {})",
            self.model, self.temperature
        );

        let start_time = Instant::now();
        let mut delay = Duration::from_millis(retry::BASE_DELAY_MS);
        let max_delay = Duration::from_secs(retry::MAX_DELAY_SECS);
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(attempt, max_attempts = retry::MAX_ATTEMPTS, "Gemini attempt");

            match self.attempt(prompt).await {
                Ok(mut reply) => {
                    reply.timing = ReplyTiming::from_duration(start_time.elapsed());
                    debug!(
                        total_ms = reply.timing.total_ms,
                        tokens = reply.usage.total(),
                        "Gemini reply received"
                    );
                    return Ok(reply);
                }
                Err(err) => {
                    if attempt >= retry::MAX_ATTEMPTS || !err.is_retryable() {
                        return Err(err.into());
                    }
                    let wait = err.retry_after.unwrap_or(delay).min(max_delay);
                    warn!(
                        attempt,
                        wait_ms = wait.as_millis() as u64,
                        "Gemini attempt failed: {}",
                        err
                    );
                    sleep(wait).await;
                    delay = delay.mul_f32(retry::BACKOFF_FACTOR).min(max_delay);
                }
            }
        }
    }

    fn name(&self) -> &str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/models/{}", self.api_base, self.model);

        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                info!("Gemini API is available");
                Ok(true)
            }
            Ok(resp) => {
                warn!("Gemini API check failed: {}", resp.status());
                Ok(false)
            }
            Err(e) => {
                warn!("Gemini API check failed: {}", e);
                Ok(false)
            }
        }
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn new(prompt: &str, temperature: f32, max_tokens: usize) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens: max_tokens,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenate the text parts of the first candidate
    fn reply_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_gemini_wire_shape() {
        let request = GenerateContentRequest::new("hello", 0.7, 1024);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let body = r#"{
            "candidates": [{"content": {"parts": [{"text": "Over"}, {"text": "view: ok"}]}}],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.reply_text(), "Overview: ok");
        assert_eq!(response.usage_metadata.unwrap().prompt_token_count, 10);
    }

    #[test]
    fn test_empty_candidates_yield_empty_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.reply_text(), "");
    }

    #[test]
    fn test_new_rejects_bad_api_base() {
        let config = ClientConfig {
            api_key: Some("key".to_string()),
            api_base: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(GeminiClient::new(config).is_err());
    }

    #[test]
    fn test_new_applies_defaults() {
        let config = ClientConfig {
            api_key: Some("key".to_string()),
            ..Default::default()
        };
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.api_base, DEFAULT_API_BASE);
    }
}
