//! Test helper functions and service builders
//!
//! In-memory stand-ins for the translation manager services. They record
//! every call so tests can assert on what a run did and did not touch.

use async_trait::async_trait;
use auto_translate::modules::auto_translate::{
    AutoTranslateModule, AutoTranslateSettings, TranslationCollaborators, DEFAULT_PROVIDER_KEY,
};
use auto_translate::modules::content::{ContentItem, ContentRepository};
use auto_translate::modules::jobs::TokioTaskQueue;
use auto_translate::modules::translation::{
    ApprovalOptions, ApprovalService, ContentId, InMemoryProviderRegistry, JobId, JobService,
    JobStatus, NewTranslationJob, NodeCreationOptions, NodeId, NodeService, NodeStatus,
    ProviderKey, SecurityContext, SetRepository, SubmitResult, TargetSite, TranslationJob,
    TranslationNode, TranslationProvider, TranslationSet, UserId,
};
use auto_translate::AppResult;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct InMemorySetRepository {
    sets: Vec<TranslationSet>,
    calls: AtomicUsize,
}

impl InMemorySetRepository {
    pub fn new(sets: Vec<TranslationSet>) -> Self {
        Self {
            sets,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SetRepository for InMemorySetRepository {
    async fn find_sets_by_path(&self, path: &str) -> AppResult<Vec<TranslationSet>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .sets
            .iter()
            .filter(|set| set.contains_path(path))
            .cloned()
            .collect())
    }
}

/// One open node per item and target site
#[derive(Default)]
pub struct FakeNodeService {
    next_id: AtomicI32,
    calls: Mutex<Vec<(i32, Vec<String>)>>,
    panicking: AtomicBool,
}

impl FakeNodeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later `create_nodes` call panic
    pub fn start_panicking(&self) {
        self.panicking.store(true, Ordering::SeqCst);
    }

    pub fn stop_panicking(&self) {
        self.panicking.store(false, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Target culture names requested per call, tagged with the set id
    pub fn requested_sites(&self) -> Vec<(i32, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NodeService for FakeNodeService {
    async fn create_nodes(
        &self,
        set: &TranslationSet,
        item: &ContentItem,
        _options: NodeCreationOptions,
        sites: &[TargetSite],
    ) -> AppResult<Vec<TranslationNode>> {
        self.calls.lock().unwrap().push((
            set.id.0,
            sites.iter().map(|site| site.culture.name.clone()).collect(),
        ));
        if self.panicking.load(Ordering::SeqCst) {
            panic!("node service unavailable for set {}", set.id);
        }

        Ok(sites
            .iter()
            .map(|site| TranslationNode {
                id: NodeId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
                set_id: set.id,
                content_id: item.id,
                master_node_name: item.name.clone(),
                culture: site.culture.clone(),
                status: NodeStatus::Open,
            })
            .collect())
    }
}

/// Job service that keeps every job it was asked for
#[derive(Default)]
pub struct RecordingJobService {
    next_id: AtomicI32,
    created: Mutex<Vec<NewTranslationJob>>,
    loaded: Mutex<Vec<JobId>>,
    submitted: Mutex<Vec<JobId>>,
    submit_attempts: AtomicUsize,
    /// 1-based submission attempt that reports failure
    fail_submit_at: Option<usize>,
    declined_cultures: Vec<String>,
    unloadable: Vec<JobId>,
}

impl RecordingJobService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_submission(mut self, attempt: usize) -> Self {
        self.fail_submit_at = Some(attempt);
        self
    }

    pub fn declining(mut self, culture: &str) -> Self {
        self.declined_cultures.push(culture.to_string());
        self
    }

    pub fn unable_to_load(mut self, id: JobId) -> Self {
        self.unloadable.push(id);
        self
    }

    pub fn created(&self) -> Vec<NewTranslationJob> {
        self.created.lock().unwrap().clone()
    }

    pub fn loaded(&self) -> Vec<JobId> {
        self.loaded.lock().unwrap().clone()
    }

    pub fn submitted(&self) -> Vec<JobId> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn submit_attempts(&self) -> usize {
        self.submit_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobService for RecordingJobService {
    async fn create_job(
        &self,
        job: NewTranslationJob,
        provider: Arc<dyn TranslationProvider>,
    ) -> AppResult<Option<TranslationJob>> {
        let Some(culture) = job.nodes.first().map(|node| node.culture.clone()) else {
            return Ok(None);
        };
        self.created.lock().unwrap().push(job.clone());

        if self.declined_cultures.contains(&culture.name) {
            return Ok(None);
        }

        Ok(Some(TranslationJob {
            id: JobId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            name: job.name,
            culture,
            provider_key: provider.key(),
            group_id: job.group_id,
            initiator: job.initiator,
            options: job.options,
            // populated by load_job_nodes
            nodes: Vec::new(),
            status: JobStatus::Created,
            created_at: Utc::now(),
        }))
    }

    async fn load_job_nodes(&self, job: &TranslationJob) -> AppResult<Option<TranslationJob>> {
        self.loaded.lock().unwrap().push(job.id);
        if self.unloadable.contains(&job.id) {
            return Ok(None);
        }

        let created = self.created.lock().unwrap();
        let nodes = created
            .iter()
            .find(|new_job| new_job.name == job.name && new_job.group_id == job.group_id)
            .map(|new_job| new_job.nodes.clone())
            .unwrap_or_default();

        let mut loaded = job.clone();
        loaded.nodes = nodes;
        Ok(Some(loaded))
    }

    async fn submit_job(&self, job: &TranslationJob) -> AppResult<SubmitResult> {
        let attempt = self.submit_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_submit_at == Some(attempt) {
            return Ok(SubmitResult::failed("Provider unavailable"));
        }

        self.submitted.lock().unwrap().push(job.id);
        Ok(SubmitResult::succeeded())
    }
}

pub struct StaticProvider {
    key: ProviderKey,
    name: String,
}

impl StaticProvider {
    pub fn new(key: ProviderKey, name: &str) -> Self {
        Self {
            key,
            name: name.to_string(),
        }
    }
}

impl TranslationProvider for StaticProvider {
    fn key(&self) -> ProviderKey {
        self.key
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub struct FixedSecurityContext(pub Option<UserId>);

impl SecurityContext for FixedSecurityContext {
    fn current_user(&self) -> Option<UserId> {
        self.0
    }
}

#[derive(Default)]
pub struct AlwaysApprove {
    approved: Mutex<Vec<(JobId, ApprovalOptions)>>,
}

impl AlwaysApprove {
    pub fn approved(&self) -> Vec<(JobId, ApprovalOptions)> {
        self.approved.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApprovalService for AlwaysApprove {
    async fn approve(&self, job_id: JobId, options: ApprovalOptions) -> AppResult<bool> {
        self.approved.lock().unwrap().push((job_id, options));
        Ok(true)
    }
}

#[derive(Default)]
pub struct InMemoryContentRepository {
    items: Vec<ContentItem>,
}

impl InMemoryContentRepository {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn get_by_ids(&self, ids: &[ContentId]) -> AppResult<Vec<ContentItem>> {
        Ok(self
            .items
            .iter()
            .filter(|item| ids.contains(&item.id))
            .cloned()
            .collect())
    }
}

pub const TEST_USER: UserId = UserId(7);

pub struct TestServices {
    pub module: AutoTranslateModule,
    pub queue: Arc<TokioTaskQueue>,
    pub sets: Arc<InMemorySetRepository>,
    pub nodes: Arc<FakeNodeService>,
    pub jobs: Arc<RecordingJobService>,
    pub approvals: Arc<AlwaysApprove>,
}

/// Build the module over in-memory services
///
/// Only the default provider key is registered. Must be called from within a
/// tokio runtime so the queue can bind to it.
pub fn build_test_services(
    settings: AutoTranslateSettings,
    sets: Vec<TranslationSet>,
) -> TestServices {
    build_test_services_with(settings, sets, Vec::new(), RecordingJobService::new())
}

pub fn build_test_services_with(
    settings: AutoTranslateSettings,
    sets: Vec<TranslationSet>,
    content: Vec<ContentItem>,
    jobs: RecordingJobService,
) -> TestServices {
    let sets = Arc::new(InMemorySetRepository::new(sets));
    let nodes = Arc::new(FakeNodeService::new());
    let jobs = Arc::new(jobs);
    let approvals = Arc::new(AlwaysApprove::default());
    let queue = Arc::new(TokioTaskQueue::new());

    let providers = InMemoryProviderRegistry::new().with_provider(Arc::new(StaticProvider::new(
        DEFAULT_PROVIDER_KEY,
        "Machine translation",
    )));

    let collaborators = TranslationCollaborators {
        sets: sets.clone(),
        nodes: nodes.clone(),
        jobs: jobs.clone(),
        providers: Arc::new(providers),
        security: Arc::new(FixedSecurityContext(Some(TEST_USER))),
        approvals: approvals.clone(),
        content: Arc::new(InMemoryContentRepository::new(content)),
    };

    let module = AutoTranslateModule::compose(settings, collaborators, queue.clone());

    TestServices {
        module,
        queue,
        sets,
        nodes,
        jobs,
        approvals,
    }
}

pub fn enabled_settings() -> AutoTranslateSettings {
    AutoTranslateSettings {
        on_save: true,
        on_publish: true,
        ..AutoTranslateSettings::default()
    }
}
