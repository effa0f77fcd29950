use crate::adapters::anthropic::AnthropicClassifier;
use crate::config::CategorizerConfig;
use crate::core::fallback::fallback_categorize;
use crate::domain::categories::{is_member, OTHER};
use crate::domain::model::{
    CategorizationRequest, CategorizationResult, ListType, RawClassification,
};
use crate::domain::ports::Classifier;
use crate::utils::error::{CategorizeError, Result};
use crate::utils::validation::{validate_required_text, Validate};
use std::sync::Arc;

/// Confidence when no credential is configured.
pub const UNCONFIGURED_CONFIDENCE: f64 = 0.5;
/// Confidence after the remote classifier actually failed.
pub const FAILURE_CONFIDENCE: f64 = 0.3;
/// Confidence forced onto a remote answer outside the vocabulary.
pub const NORMALIZED_CONFIDENCE: f64 = 0.5;

impl Validate for CategorizationRequest {
    fn validate(&self) -> Result<()> {
        validate_required_text("item_name", self.item_name.as_deref()).map(|_| ())
    }
}

#[derive(Clone, Default)]
pub struct Categorizer {
    classifier: Option<Arc<dyn Classifier>>,
}

impl Categorizer {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier: Some(classifier),
        }
    }

    /// Remote classification when the config carries an API key, keyword matching otherwise.
    pub fn from_config(config: &CategorizerConfig) -> Result<Self> {
        match AnthropicClassifier::from_config(config)? {
            Some(classifier) => {
                tracing::info!("Remote classification enabled (model {})", config.model);
                Ok(Self::new(Arc::new(classifier)))
            }
            None => {
                let reason = CategorizeError::ClassifierUnavailable;
                tracing::info!(
                    "{}, using keyword matching only. {}",
                    reason,
                    reason.recovery_suggestion()
                );
                Ok(Self::offline())
            }
        }
    }

    /// Keyword matching only.
    pub fn offline() -> Self {
        Self { classifier: None }
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    /// Only fails on an invalid request. Every classifier problem resolves to a
    /// fallback category.
    pub async fn categorize(&self, request: &CategorizationRequest) -> Result<CategorizationResult> {
        let item_name = validate_required_text("item_name", request.item_name.as_deref())?;
        let list_type = request.list_type;

        let Some(categories) = list_type.categories() else {
            tracing::debug!("Skipping categorization for {} list", list_type);
            return Ok(CategorizationResult::skipped());
        };

        let Some(classifier) = &self.classifier else {
            let category = fallback_categorize(item_name, list_type);
            tracing::debug!(
                "No classifier configured, '{}' -> {} (keyword match)",
                item_name,
                category
            );
            return Ok(CategorizationResult::fallback(category, UNCONFIGURED_CONFIDENCE));
        };

        match classifier.classify(item_name, list_type, categories).await {
            Ok(raw) => Ok(normalize(raw, categories)),
            Err(e) => {
                let category = fallback_categorize(item_name, list_type);
                tracing::warn!(
                    "⚠️ Remote classification failed for '{}': {}. Falling back to {}",
                    item_name,
                    e,
                    category
                );
                Ok(CategorizationResult::fallback(category, FAILURE_CONFIDENCE))
            }
        }
    }

    pub async fn categorize_item(
        &self,
        item_name: &str,
        list_type: ListType,
    ) -> Result<CategorizationResult> {
        self.categorize(&CategorizationRequest::new(item_name, list_type))
            .await
    }
}

impl std::fmt::Debug for Categorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Categorizer")
            .field("remote", &self.has_classifier())
            .finish()
    }
}

fn normalize(raw: RawClassification, categories: &[&str]) -> CategorizationResult {
    if !is_member(categories, &raw.category) {
        tracing::info!(
            "Model returned '{}' outside the vocabulary, using {}",
            raw.category,
            OTHER
        );
        return CategorizationResult::remote(OTHER, NORMALIZED_CONFIDENCE);
    }

    CategorizationResult::remote(&raw.category, raw.confidence.clamp(0.0, 1.0))
}
