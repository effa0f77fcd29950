use crate::domain::categories::{GROCERY_CATEGORIES, SHOPPING_CATEGORIES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    Grocery,
    Shopping,
    Project,
}

impl ListType {
    /// Lenient tag parsing: anything that is not `shopping` or `project` is a grocery list.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("shopping") => Self::Shopping,
            Some("project") => Self::Project,
            _ => Self::Grocery,
        }
    }

    /// `None` for project lists, which are never categorized.
    pub fn categories(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Grocery => Some(&GROCERY_CATEGORIES),
            Self::Shopping => Some(&SHOPPING_CATEGORIES),
            Self::Project => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grocery => "grocery",
            Self::Shopping => "shopping",
            Self::Project => "project",
        }
    }
}

impl<'de> Deserialize<'de> for ListType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // 非字串（數字、布林、物件）同樣視為 grocery
        let tag = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_tag(tag.as_str()))
    }
}

impl std::fmt::Display for ListType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorizationRequest {
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub list_type: ListType,
}

impl CategorizationRequest {
    pub fn new(item_name: impl Into<String>, list_type: ListType) -> Self {
        Self {
            item_name: Some(item_name.into()),
            list_type,
        }
    }
}

/// Where a result came from. Not part of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultSource {
    Remote,
    #[default]
    Fallback,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizationResult {
    pub category: Option<String>,
    pub confidence: f64,
    #[serde(skip)]
    pub source: ResultSource,
}

impl CategorizationResult {
    pub fn skipped() -> Self {
        Self {
            category: None,
            confidence: 0.0,
            source: ResultSource::Skipped,
        }
    }

    pub fn fallback(category: &str, confidence: f64) -> Self {
        Self {
            category: Some(category.to_string()),
            confidence,
            source: ResultSource::Fallback,
        }
    }

    pub fn remote(category: &str, confidence: f64) -> Self {
        Self {
            category: Some(category.to_string()),
            confidence,
            source: ResultSource::Remote,
        }
    }
}

/// What the remote model answered, before vocabulary normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawClassification {
    pub category: String,
    pub confidence: f64,
}
