use thiserror::Error;

#[derive(Error, Debug)]
pub enum CategorizeError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Classifier unavailable: no API credential configured")]
    ClassifierUnavailable,

    #[error("Classifier failure: {message}")]
    ClassifierFailure { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CategorizeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn classifier(message: impl Into<String>) -> Self {
        Self::ClassifierFailure {
            message: message.into(),
        }
    }

    /// 遠端分類失敗（會觸發 fallback，不會回傳給呼叫端）
    pub fn is_classifier_failure(&self) -> bool {
        matches!(
            self,
            Self::ClassifierUnavailable
                | Self::ClassifierFailure { .. }
                | Self::ApiError(_)
                | Self::SerializationError(_)
        )
    }

    /// HTTP status surfaced to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError { .. } => 400,
            Self::ClassifierUnavailable
            | Self::ClassifierFailure { .. }
            | Self::ApiError(_)
            | Self::SerializationError(_) => 502,
            Self::IoError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                500
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { message } => message.clone(),
            Self::ClassifierUnavailable | Self::ClassifierFailure { .. } => {
                "The categorization service is temporarily unavailable".to_string()
            }
            Self::ApiError(_) => "Could not reach the categorization service".to_string(),
            Self::SerializationError(_) => "Received an unreadable response".to_string(),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ValidationError { .. } => "Provide a non-empty item_name",
            Self::ClassifierUnavailable => "Set ANTHROPIC_API_KEY to enable remote classification",
            Self::ClassifierFailure { .. } | Self::SerializationError(_) => {
                "Check the configured model and API version"
            }
            Self::ApiError(_) => "Check network connectivity and ANTHROPIC_API_URL",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or environment variables"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CategorizeError>;
