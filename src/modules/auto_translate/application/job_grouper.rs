use crate::log_debug;
use crate::modules::translation::domain::{
    Culture, JobOptions, JobService, NewTranslationJob, TranslationJob, TranslationNode,
    TranslationProvider, UserId,
};
use crate::shared::errors::AppResult;
use std::sync::Arc;
use uuid::Uuid;

/// Nodes sharing one target culture
#[derive(Debug, Clone, PartialEq)]
pub struct CultureGroup {
    pub culture: Culture,
    pub nodes: Vec<TranslationNode>,
}

/// Group nodes by target culture, groups in order of first appearance
///
/// Every node lands in exactly one group and nodes keep their relative order.
pub fn group_by_culture(nodes: &[TranslationNode]) -> Vec<CultureGroup> {
    let mut groups: Vec<CultureGroup> = Vec::new();

    for node in nodes {
        match groups
            .iter_mut()
            .find(|group| group.culture.name == node.culture.name)
        {
            Some(group) => group.nodes.push(node.clone()),
            None => groups.push(CultureGroup {
                culture: node.culture.clone(),
                nodes: vec![node.clone()],
            }),
        }
    }

    groups
}

/// e.g. "Home (3) automatic translation to Spanish (Spain)"
pub fn job_name(group: &CultureGroup) -> Option<String> {
    let first = group.nodes.first()?;
    Some(format!(
        "{} ({}) automatic translation to {}",
        first.master_node_name,
        group.nodes.len(),
        group.culture.display_name
    ))
}

/// Creates one auto-approved job per target culture
pub struct JobGrouper {
    job_service: Arc<dyn JobService>,
}

impl JobGrouper {
    pub fn new(job_service: Arc<dyn JobService>) -> Self {
        Self { job_service }
    }

    /// Jobs the service agreed to create; declined jobs are skipped
    pub async fn create_jobs(
        &self,
        nodes: &[TranslationNode],
        provider: &Arc<dyn TranslationProvider>,
        initiator: Option<UserId>,
        group_id: Uuid,
    ) -> AppResult<Vec<TranslationJob>> {
        let mut jobs = Vec::new();

        for group in group_by_culture(nodes) {
            let Some(name) = job_name(&group) else {
                continue;
            };

            let request = NewTranslationJob {
                name,
                nodes: group.nodes,
                payload: serde_json::json!({}),
                initiator,
                options: JobOptions::auto_approved(),
                group_id,
            };

            match self.job_service.create_job(request, provider.clone()).await? {
                Some(job) => jobs.push(job),
                None => log_debug!(
                    "Job service declined job for {}, skipping",
                    group.culture.display_name
                ),
            }
        }

        Ok(jobs)
    }
}
