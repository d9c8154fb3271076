//! AI provider configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which provider answers council requests
    #[serde(default)]
    pub provider: AiProvider,

    /// Gemini API key
    pub gemini_api_key: Option<SecretString>,

    /// Generative Language API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for the council debate
    #[serde(default = "default_debate_model")]
    pub debate_model: String,

    /// Model used for every follow-up tool and the assistant
    #[serde(default = "default_tool_model")]
    pub tool_model: String,

    /// Sampling temperature for the debate
    #[serde(default = "default_debate_temperature")]
    pub debate_temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failure
    #[serde(default)]
    pub max_retries: u32,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    /// Canned replies, no network.
    Mock,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a Gemini key is configured
    pub fn has_gemini_key(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.provider == AiProvider::Gemini && !self.has_gemini_key() {
            return Err(ValidationError::MissingRequired("GEMINI_API_KEY"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.debate_model.trim().is_empty() {
            return Err(ValidationError::EmptyModel("debate_model"));
        }
        if self.tool_model.trim().is_empty() {
            return Err(ValidationError::EmptyModel("tool_model"));
        }
        if !(0.0..=2.0).contains(&self.debate_temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            gemini_api_key: None,
            base_url: default_base_url(),
            debate_model: default_debate_model(),
            tool_model: default_tool_model(),
            debate_temperature: default_debate_temperature(),
            timeout_secs: default_timeout(),
            max_retries: 0,
        }
    }
}

fn default_base_url() -> String {
    crate::adapters::ai::DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_debate_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_tool_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_debate_temperature() -> f32 {
    0.7
}

fn default_timeout() -> u64 {
    120
}
