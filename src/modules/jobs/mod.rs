/// Background task queue module
///
/// Provides fire-and-forget execution for work that must not delay the
/// caller, such as automatic translation runs triggered by content events.
///
/// Architecture:
/// - Domain: Work item types and the queue port
/// - Worker: Tokio backed queue that spawns and tracks work items
pub mod domain;
pub mod worker;

// Re-exports for easy access
pub use domain::{
    entities::{QueueError, QueueStatistics, WorkItem},
    repository::BackgroundTaskQueue,
};
pub use worker::TokioTaskQueue;
