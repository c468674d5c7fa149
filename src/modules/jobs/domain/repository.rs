/// Port for queueing background work
///
/// Implementations run the work item off the caller's path; errors raised
/// inside the work item are the work item's own business.
use crate::modules::jobs::domain::entities::{QueueError, WorkItem};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait BackgroundTaskQueue: Send + Sync {
    /// Queue a work item without waiting for it
    fn queue_background_work_item(&self, work: WorkItem) -> Result<(), QueueError>;
}
