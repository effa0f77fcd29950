#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";
pub const DEFAULT_MAX_TOKENS: u32 = 100;
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, PartialEq)]
pub struct CategorizerConfig {
    /// `None` disables remote classification.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub api_version: String,
    pub max_tokens: u32,
    pub timeout_seconds: Option<u64>,
}

impl Default for CategorizerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_seconds: None,
        }
    }
}

impl CategorizerConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: non_blank(env::var("ANTHROPIC_API_KEY").ok()),
            api_url: env::var("ANTHROPIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            model: env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_version: env::var("ANTHROPIC_VERSION")
                .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string()),
            max_tokens: env::var("CATEGORIZER_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKENS),
            timeout_seconds: env::var("CATEGORIZER_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = non_blank(Some(api_key.into()));
        self
    }

    pub fn without_api_key(mut self) -> Self {
        self.api_key = None;
        self
    }

    pub fn remote_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

// 空白的金鑰視同未設定
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn port_from_env() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

impl std::fmt::Debug for CategorizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategorizerConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_version", &self.api_version)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Validate for CategorizerConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_url)?;
        validate_non_empty_string("model", &self.model)?;
        validate_non_empty_string("api_version", &self.api_version)?;
        validate_range("max_tokens", self.max_tokens, 1, 4096)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 300)?;
        }

        tracing::debug!("✅ Categorizer configuration validation passed");
        Ok(())
    }
}
