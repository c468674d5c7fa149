/// Domain types for the background task queue
///
/// Work items are detached futures; the caller that queues one never waits
/// for it.
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A unit of fire-and-forget work
pub type WorkItem = BoxFuture<'static, ()>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueError {
    #[error("Background task queue is closed")]
    Closed,

    #[error("No async runtime available to run background work")]
    NoRuntime,
}

/// Queue statistics for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStatistics {
    pub is_closed: bool,
    pub in_flight: usize,
}
