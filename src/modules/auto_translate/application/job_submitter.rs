use crate::modules::translation::domain::{JobService, TranslationJob};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_info, log_warn};
use std::sync::Arc;

/// Loads each job's nodes and submits it to its provider
///
/// Jobs move Created -> NodesLoaded -> Submitted. A job whose nodes cannot be
/// loaded is abandoned; a job that fails to submit aborts the whole run.
pub struct JobSubmitter {
    job_service: Arc<dyn JobService>,
}

impl JobSubmitter {
    pub fn new(job_service: Arc<dyn JobService>) -> Self {
        Self { job_service }
    }

    /// Submit jobs in order, returning the ones that were submitted
    ///
    /// The first failed submission is returned as `AppError::SubmissionFailed`
    /// and no later job is attempted.
    pub async fn submit_jobs(&self, jobs: Vec<TranslationJob>) -> AppResult<Vec<TranslationJob>> {
        let mut submitted = Vec::with_capacity(jobs.len());

        for created in jobs {
            // never submit a partially loaded job
            let Some(mut job) = self.job_service.load_job_nodes(&created).await? else {
                log_warn!("Could not load nodes for job '{}', skipping", created.name);
                continue;
            };
            job.mark_nodes_loaded();

            let result = self.job_service.submit_job(&job).await?;
            if !result.success {
                return Err(AppError::SubmissionFailed {
                    job: job.name,
                    reason: result
                        .error
                        .unwrap_or_else(|| "Failed to submit job".to_string()),
                });
            }

            job.mark_submitted();
            log_info!("Submitted job {} '{}'", job.id, job.name);
            submitted.push(job);
        }

        Ok(submitted)
    }
}
