//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/routesage/) and project (.routesage/)
//! level configuration.

use serde::{Deserialize, Serialize};

use crate::ai::client::ClientConfig;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// LLM provider settings
    pub llm: LlmConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            llm: LlmConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `SageError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(crate::types::SageError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(crate::types::SageError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.llm.max_tokens == 0 {
            return Err(crate::types::SageError::Config(
                "LLM max_tokens must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "gemini")
    pub provider: String,

    /// Model override (provider default when absent)
    pub model: Option<String>,

    /// API key; prefer the GEMINI_API_KEY env var over the config file.
    /// Never serialized back out.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// API base URL override
    pub api_base: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Generation temperature
    pub temperature: f32,

    /// Maximum tokens to generate per reply
    pub max_tokens: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        let base = ClientConfig::default();
        Self {
            provider: base.provider,
            model: base.model,
            api_key: base.api_key,
            api_base: base.api_base,
            timeout_secs: base.timeout_secs,
            temperature: base.temperature,
            max_tokens: base.max_tokens,
        }
    }
}

impl From<&LlmConfig> for ClientConfig {
    fn from(config: &LlmConfig) -> Self {
        Self {
            provider: config.provider.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            timeout_secs: config.timeout_secs,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_temperature_out_of_range_rejected() {
        let mut config = Config::default();
        config.llm.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.llm.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_never_serialized() {
        let mut config = Config::default();
        config.llm.api_key = Some("secret-key".to_string());
        let rendered = toml::to_string(&config).unwrap();
        assert!(!rendered.contains("secret-key"));
    }

    #[test]
    fn test_client_config_conversion() {
        let mut llm = LlmConfig::default();
        llm.model = Some("gemini-1.5-pro".to_string());
        let client: ClientConfig = (&llm).into();
        assert_eq!(client.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(client.provider, "gemini");
    }
}
