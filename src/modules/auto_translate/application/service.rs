/// AutomaticTranslationService - content change to translation jobs
///
/// One run turns "these items changed in these cultures" into submitted
/// jobs:
/// 1. Scope - sets containing the items, filtered by culture and exclusions
/// 2. Nodes - per target site nodes for each set
/// 3. Jobs - one auto-approved job per target culture
/// 4. Submit - load nodes and hand each job to the provider
///
/// The provider is resolved once per run so a run never mixes providers.
/// Nothing is deduplicated across runs: two runs for the same content create
/// two batches of jobs.
use super::culture_extractor::CultureFilter;
use super::job_approver::JobApprover;
use super::job_grouper::JobGrouper;
use super::job_submitter::JobSubmitter;
use super::node_materializer::NodeMaterializer;
use super::scope_resolver::ScopeResolver;
use crate::modules::auto_translate::config::AutoTranslateSettings;
use crate::modules::content::{ContentItem, ContentRepository};
use crate::modules::translation::domain::{
    ApprovalService, ContentId, JobService, NodeService, ProviderKey, ProviderRegistry,
    SecurityContext, SetRepository, TranslationJob,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;
use crate::{log_debug, log_info};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// The external services a run talks to
#[derive(Clone)]
pub struct TranslationCollaborators {
    pub sets: Arc<dyn SetRepository>,
    pub nodes: Arc<dyn NodeService>,
    pub jobs: Arc<dyn JobService>,
    pub providers: Arc<dyn ProviderRegistry>,
    pub security: Arc<dyn SecurityContext>,
    pub approvals: Arc<dyn ApprovalService>,
    pub content: Arc<dyn ContentRepository>,
}

/// Input of one run
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Shared by every job the run creates
    pub group_id: Uuid,
    pub items: Vec<ContentItem>,
    pub cultures: CultureFilter,
}

impl TranslationRequest {
    pub fn new(items: Vec<ContentItem>, cultures: CultureFilter) -> Self {
        Self {
            group_id: Uuid::new_v4(),
            items,
            cultures,
        }
    }

    pub fn content_ids(&self) -> Vec<ContentId> {
        self.items.iter().map(|item| item.id).collect()
    }
}

/// Result of one run
#[derive(Debug, Clone, Serialize)]
pub struct TranslationRunReport {
    pub group_id: Uuid,
    pub sets_resolved: usize,
    /// Sets that produced at least one node
    pub sets_processed: usize,
    pub jobs_created: usize,
    pub submitted_jobs: Vec<TranslationJob>,
}

impl TranslationRunReport {
    fn empty(group_id: Uuid) -> Self {
        Self {
            group_id,
            sets_resolved: 0,
            sets_processed: 0,
            jobs_created: 0,
            submitted_jobs: Vec::new(),
        }
    }
}

pub struct AutomaticTranslationService {
    scope_resolver: ScopeResolver,
    node_materializer: NodeMaterializer,
    job_grouper: JobGrouper,
    job_submitter: JobSubmitter,
    job_approver: JobApprover,
    providers: Arc<dyn ProviderRegistry>,
    security: Arc<dyn SecurityContext>,
    content: Arc<dyn ContentRepository>,
    provider_key: ProviderKey,
}

impl AutomaticTranslationService {
    pub fn new(collaborators: TranslationCollaborators, settings: &AutoTranslateSettings) -> Self {
        Self {
            scope_resolver: ScopeResolver::new(collaborators.sets, settings.exclude_sets.clone()),
            node_materializer: NodeMaterializer::new(
                collaborators.nodes,
                settings.exclude_cultures.clone(),
            ),
            job_grouper: JobGrouper::new(collaborators.jobs.clone()),
            job_submitter: JobSubmitter::new(collaborators.jobs),
            job_approver: JobApprover::new(collaborators.approvals),
            providers: collaborators.providers,
            security: collaborators.security,
            content: collaborators.content,
            provider_key: settings.provider,
        }
    }

    /// Run the pipeline for one request
    ///
    /// Content outside every set, sets without nodes and sets without jobs
    /// are skipped silently. A missing provider or a failed submission ends
    /// the run with an error; work already submitted stays submitted.
    pub async fn translate(&self, request: TranslationRequest) -> AppResult<TranslationRunReport> {
        let timer = TimedOperation::new("Automatic translation run");
        let mut report = TranslationRunReport::empty(request.group_id);

        let sets = self
            .scope_resolver
            .resolve(&request.items, &request.cultures)
            .await?;
        report.sets_resolved = sets.len();

        // not an error: the content may belong to a target site
        if sets.is_empty() {
            log_debug!("No translation sets for run {}", request.group_id);
            return Ok(report);
        }

        let provider = self
            .providers
            .resolve(&self.provider_key)
            .ok_or_else(|| AppError::ProviderNotFound(self.provider_key.to_string()))?;
        let initiator = self.security.current_user();

        // translations can't be mixed within a set, so each set is its own batch
        for set in &sets {
            let nodes = self
                .node_materializer
                .create_nodes(set, &request.items)
                .await?;
            if nodes.is_empty() {
                continue;
            }
            report.sets_processed += 1;

            let jobs = self
                .job_grouper
                .create_jobs(&nodes, &provider, initiator, request.group_id)
                .await?;
            if jobs.is_empty() {
                continue;
            }
            log_info!("Auto created {} jobs.", jobs.len());
            report.jobs_created += jobs.len();

            let submitted = self.job_submitter.submit_jobs(jobs).await?;
            if submitted.is_empty() {
                continue;
            }
            log_info!("Auto submitted {} jobs.", submitted.len());
            report.submitted_jobs.extend(submitted);
        }

        timer.finish_with_info(&format!(
            "{} sets, {} jobs submitted via {}",
            report.sets_processed,
            report.submitted_jobs.len(),
            provider.name()
        ));

        Ok(report)
    }

    /// Run the pipeline for content looked up by id
    pub async fn translate_by_ids(
        &self,
        ids: &[ContentId],
        cultures: CultureFilter,
    ) -> AppResult<TranslationRunReport> {
        let items = self.content.get_by_ids(ids).await?;
        self.translate(TranslationRequest::new(items, cultures)).await
    }

    /// Approve jobs straight away as the current user
    ///
    /// Runs never call this; their jobs are auto-approved downstream.
    pub async fn approve_jobs(&self, jobs: Vec<TranslationJob>) -> AppResult<Vec<TranslationJob>> {
        let user = self.security.current_user();
        self.job_approver.approve_jobs(jobs, user).await
    }
}
