pub mod categorizer;
pub mod fallback;
pub mod prompt;

pub use crate::domain::model::{CategorizationRequest, CategorizationResult, ListType};
pub use crate::domain::ports::Classifier;
pub use crate::utils::error::Result;
