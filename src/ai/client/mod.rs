//! LLM Client Abstraction
//!
//! Defines the LlmClient trait for free-text generation. Clients return
//! the model's raw text reply plus token usage metrics; turning that text
//! into a typed result is the normalizer's job, downstream of this
//! boundary. The client is always passed into callers as an explicitly
//! constructed dependency, never an ambient singleton, so the advisor can
//! be tested with a canned text source and no network access.

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::types::{Result, SageError};

// =============================================================================
// LLM Reply with Usage Metrics
// =============================================================================

/// Complete model reply including raw text and usage metrics
#[derive(Debug, Clone)]
pub struct LlmReply {
    /// Raw reply text, exactly as the provider returned it
    pub text: String,
    /// Token usage metrics
    pub usage: TokenUsage,
    /// Response timing
    pub timing: ReplyTiming,
    /// Provider and model info
    pub metadata: ReplyMetadata,
}

impl LlmReply {
    /// Create a reply with text only (usage unknown)
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: TokenUsage::default(),
            timing: ReplyTiming::default(),
            metadata: ReplyMetadata::default(),
        }
    }
}

/// Token usage metrics for cost tracking
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Input tokens (prompt)
    pub input_tokens: u32,
    /// Output tokens (reply)
    pub output_tokens: u32,
}

impl TokenUsage {
    /// Total tokens used (input + output)
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// Reply timing metrics
#[derive(Debug, Clone, Default)]
pub struct ReplyTiming {
    /// Total response time in milliseconds (wall clock)
    pub total_ms: u64,
}

impl ReplyTiming {
    pub fn from_duration(duration: std::time::Duration) -> Self {
        Self {
            total_ms: duration.as_millis() as u64,
        }
    }
}

/// Reply metadata
#[derive(Debug, Clone, Default)]
pub struct ReplyMetadata {
    /// Model used
    pub model: String,
    /// Provider name
    pub provider: String,
}

/// Shared client handle passed into the advisor
pub type SharedClient = Arc<dyn LlmClient + Send + Sync>;

// =============================================================================
// Client Configuration
// =============================================================================

/// Configuration for LLM clients
///
/// Note: API keys are handled securely - they are never serialized to
/// output and are redacted in debug output. The client converts the key
/// to SecretString internally for runtime protection.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Provider type (currently "gemini")
    pub provider: String,
    /// Model name (provider-specific)
    pub model: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Temperature for generation (0.0 = deterministic, 1.0 = creative)
    pub temperature: f32,
    /// API key; never serialized to output for security
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL (for custom endpoints)
    #[serde(default)]
    pub api_base: Option<String>,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

fn default_max_tokens() -> usize {
    2048
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: None,
            timeout_secs: 60,
            temperature: 0.7,
            api_key: None,
            api_base: None,
            max_tokens: 2048,
        }
    }
}

// =============================================================================
// LLM Client Trait
// =============================================================================

/// LLM client trait for raw text generation with usage metrics
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a raw text reply for a prompt
    async fn generate(&self, prompt: &str) -> Result<LlmReply>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;

    /// Check if the provider is reachable
    async fn health_check(&self) -> Result<bool>;
}

/// Create a shared client from configuration
pub fn create_client(config: &ClientConfig) -> Result<SharedClient> {
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiClient::new(config.clone())?)),
        _ => Err(SageError::Config(format!(
            "Unknown provider: {}. Supported: gemini",
            config.provider
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_usage_total() {
        let usage = TokenUsage {
            input_tokens: 100,
            output_tokens: 50,
        };
        assert_eq!(usage.total(), 150);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig {
            api_key: Some("super-secret".to_string()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_create_client_rejects_unknown_provider() {
        let config = ClientConfig {
            provider: "carrier-pigeon".to_string(),
            ..Default::default()
        };
        assert!(create_client(&config).is_err());
    }

    #[test]
    fn test_text_only_reply() {
        let reply = LlmReply::text_only("hello");
        assert_eq!(reply.text, "hello");
        assert_eq!(reply.usage.total(), 0);
    }
}
