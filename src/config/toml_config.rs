use crate::config::{non_blank, CategorizerConfig};
use crate::utils::error::{CategorizeError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file-based overrides, applied on top of the environment.
///
/// ```toml
/// [classifier]
/// api_key = "${ANTHROPIC_API_KEY}"
/// model = "claude-3-haiku-20240307"
/// max_tokens = 100
///
/// [server]
/// port = 8080
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub classifier: ClassifierSection,
    #[serde(default)]
    pub server: Option<ServerSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierSection {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub model: Option<String>,
    pub api_version: Option<String>,
    pub max_tokens: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub port: u16,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CategorizeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CategorizeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ANTHROPIC_API_KEY})；未設定的變數替換為空字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            CategorizeError::ConfigError {
                message: format!("Invalid substitution pattern: {}", e),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        Ok(result.into_owned())
    }

    /// Values present in the file win over `base`.
    pub fn apply_to(&self, base: CategorizerConfig) -> CategorizerConfig {
        let section = &self.classifier;
        CategorizerConfig {
            api_key: match &section.api_key {
                Some(key) => non_blank(Some(key.clone())),
                None => base.api_key,
            },
            api_url: section.api_url.clone().unwrap_or(base.api_url),
            model: section.model.clone().unwrap_or(base.model),
            api_version: section.api_version.clone().unwrap_or(base.api_version),
            max_tokens: section.max_tokens.unwrap_or(base.max_tokens),
            timeout_seconds: section.timeout_seconds.or(base.timeout_seconds),
        }
    }

    pub fn port(&self) -> Option<u16> {
        self.server.as_ref().map(|s| s.port)
    }
}
