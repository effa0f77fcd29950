use crate::config::CategorizerConfig;
use crate::core::prompt::build_prompt;
use crate::domain::model::{ListType, RawClassification};
use crate::domain::ports::Classifier;
use crate::utils::error::{CategorizeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

/// Anthropic Messages API classifier. One request per call, no retries.
#[derive(Clone)]
pub struct AnthropicClassifier {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    api_version: String,
    max_tokens: u32,
}

impl AnthropicClassifier {
    /// `None` when the config carries no API key.
    pub fn from_config(config: &CategorizerConfig) -> Result<Option<Self>> {
        let Some(api_key) = config.api_key.clone() else {
            return Ok(None);
        };

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Some(Self {
            client: builder.build()?,
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            api_version: config.api_version.clone(),
            max_tokens: config.max_tokens,
        }))
    }
}

#[async_trait]
impl Classifier for AnthropicClassifier {
    async fn classify(
        &self,
        item_name: &str,
        list_type: ListType,
        categories: &[&str],
    ) -> Result<RawClassification> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: build_prompt(item_name, list_type, categories),
            }],
        };

        tracing::debug!("Making API request to: {} (model {})", self.api_url, self.model);
        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(CategorizeError::classifier(format!(
                "Claude API error: {}",
                status.as_u16()
            )));
        }

        let data: MessagesResponse = response.json().await?;
        parse_completion(&data)
    }
}

fn parse_completion(data: &MessagesResponse) -> Result<RawClassification> {
    let text = data
        .content
        .iter()
        .find(|block| block.block_type == "text")
        .and_then(|block| block.text.as_deref())
        .ok_or_else(|| CategorizeError::classifier("response contained no text content"))?;

    Ok(serde_json::from_str(text.trim())?)
}
