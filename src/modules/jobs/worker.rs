/// Tokio backed background task queue
///
/// Work items are spawned straight onto a tokio runtime and tracked so the
/// host can drain them on shutdown. Nothing cancels a work item once queued.
use crate::modules::jobs::domain::entities::{QueueError, QueueStatistics, WorkItem};
use crate::modules::jobs::domain::repository::BackgroundTaskQueue;
use crate::{log_debug, log_info};
use tokio::runtime::Handle;
use tokio_util::task::TaskTracker;

pub struct TokioTaskQueue {
    tracker: TaskTracker,
    handle: Option<Handle>,
}

impl TokioTaskQueue {
    /// Create a queue bound to the current runtime, if there is one
    ///
    /// Without a current runtime the queue resolves one when work is queued.
    pub fn new() -> Self {
        Self {
            tracker: TaskTracker::new(),
            handle: Handle::try_current().ok(),
        }
    }

    /// Create a queue that spawns onto the given runtime
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            tracker: TaskTracker::new(),
            handle: Some(handle),
        }
    }

    /// Stop accepting work; already queued items keep running
    pub fn close(&self) {
        if self.tracker.close() {
            log_info!("Background task queue closed");
        }
    }

    /// Wait until the queue is closed and every queued item finished
    pub async fn wait(&self) {
        self.tracker.wait().await;
    }

    /// Close the queue and drain it
    pub async fn shutdown(&self) {
        self.close();
        self.wait().await;
    }

    /// Number of work items still running
    pub fn len(&self) -> usize {
        self.tracker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracker.is_empty()
    }

    pub fn get_statistics(&self) -> QueueStatistics {
        QueueStatistics {
            is_closed: self.tracker.is_closed(),
            in_flight: self.tracker.len(),
        }
    }
}

impl Default for TokioTaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundTaskQueue for TokioTaskQueue {
    fn queue_background_work_item(&self, work: WorkItem) -> Result<(), QueueError> {
        if self.tracker.is_closed() {
            return Err(QueueError::Closed);
        }

        let handle = match &self.handle {
            Some(handle) => handle.clone(),
            None => Handle::try_current().map_err(|_| QueueError::NoRuntime)?,
        };

        // Detached: the join handle is dropped on purpose
        self.tracker.spawn_on(work, &handle);
        log_debug!("Queued background work item ({} in flight)", self.tracker.len());

        Ok(())
    }
}
