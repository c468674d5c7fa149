pub mod entities;
pub mod repository;

pub use entities::{QueueError, QueueStatistics, WorkItem};
pub use repository::BackgroundTaskQueue;
