use crate::log_info;
use crate::modules::translation::domain::{
    ApprovalOptions, ApprovalService, TranslationJob, UserId,
};
use crate::shared::errors::{AppError, AppResult};
use std::sync::Arc;

/// Manual approval of submitted jobs
///
/// Automatic runs create auto-approved jobs and leave approval to the
/// translation manager once results come back; this is the alternative path
/// for hosts that want to approve straight away.
pub struct JobApprover {
    approval_service: Arc<dyn ApprovalService>,
}

impl JobApprover {
    pub fn new(approval_service: Arc<dyn ApprovalService>) -> Self {
        Self { approval_service }
    }

    /// Approve (check and publish) every node of each job, in order
    pub async fn approve_jobs(
        &self,
        jobs: Vec<TranslationJob>,
        user: Option<UserId>,
    ) -> AppResult<Vec<TranslationJob>> {
        let mut approved = Vec::with_capacity(jobs.len());

        for job in jobs {
            let options = ApprovalOptions::approve_all(user);
            if !self.approval_service.approve(job.id, options).await? {
                return Err(AppError::ApprovalFailed(job.name));
            }
            approved.push(job);
        }

        log_info!("Approved {} jobs", approved.len());
        Ok(approved)
    }
}
