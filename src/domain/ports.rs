use crate::domain::model::{ListType, RawClassification};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote classification seam. Implementations make exactly one attempt;
/// any `Err` sends the categorizer down the fallback path.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(
        &self,
        item_name: &str,
        list_type: ListType,
        categories: &[&str],
    ) -> Result<RawClassification>;
}
