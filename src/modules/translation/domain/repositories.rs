/// Ports to the translation manager services
///
/// Sets, nodes and jobs are persisted and mutated only through these
/// services; the automatic pipeline never holds them beyond one run.
use async_trait::async_trait;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use super::entities::{
    ApprovalOptions, NewTranslationJob, NodeCreationOptions, SubmitResult, TargetSite,
    TranslationJob, TranslationNode, TranslationSet,
};
use super::value_objects::{JobId, ProviderKey, UserId};
use crate::modules::content::ContentItem;
use crate::shared::errors::AppResult;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SetRepository: Send + Sync {
    /// All sets whose scope contains the given content path
    async fn find_sets_by_path(&self, path: &str) -> AppResult<Vec<TranslationSet>>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait NodeService: Send + Sync {
    /// Create nodes for one content item against the given target sites
    async fn create_nodes(
        &self,
        set: &TranslationSet,
        item: &ContentItem,
        options: NodeCreationOptions,
        sites: &[TargetSite],
    ) -> AppResult<Vec<TranslationNode>>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait JobService: Send + Sync {
    /// Returns `None` when the service declines to create the job
    async fn create_job(
        &self,
        job: NewTranslationJob,
        provider: Arc<dyn TranslationProvider>,
    ) -> AppResult<Option<TranslationJob>>;

    /// Fully populate the job's nodes, `None` if they cannot be loaded
    async fn load_job_nodes(&self, job: &TranslationJob) -> AppResult<Option<TranslationJob>>;

    async fn submit_job(&self, job: &TranslationJob) -> AppResult<SubmitResult>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApprovalService: Send + Sync {
    /// Returns false when the job could not be approved
    async fn approve(&self, job_id: JobId, options: ApprovalOptions) -> AppResult<bool>;
}

/// A translation capability selected by key
pub trait TranslationProvider: Send + Sync {
    fn key(&self) -> ProviderKey;

    fn name(&self) -> &str;
}

#[cfg_attr(test, automock)]
pub trait ProviderRegistry: Send + Sync {
    fn resolve(&self, key: &ProviderKey) -> Option<Arc<dyn TranslationProvider>>;
}

#[cfg_attr(test, automock)]
pub trait SecurityContext: Send + Sync {
    /// The authenticated back office user, if any
    fn current_user(&self) -> Option<UserId>;
}
