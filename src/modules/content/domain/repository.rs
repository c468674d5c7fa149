use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entities::ContentItem;
use crate::modules::translation::domain::ContentId;
use crate::shared::errors::AppResult;

/// Port to the CMS content store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Items for the given ids; unknown ids are left out
    async fn get_by_ids(&self, ids: &[ContentId]) -> AppResult<Vec<ContentItem>>;
}
