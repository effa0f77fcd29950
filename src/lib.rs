pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::anthropic::AnthropicClassifier;
pub use config::CategorizerConfig;
pub use crate::core::categorizer::Categorizer;
pub use domain::model::{CategorizationRequest, CategorizationResult, ListType, ResultSource};
pub use utils::error::{CategorizeError, Result};
