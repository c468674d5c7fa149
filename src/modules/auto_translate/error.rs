use crate::modules::jobs::QueueError;
use crate::modules::translation::domain::ContentId;
use serde::Serialize;
use thiserror::Error;

/// Failure while preparing the hand-off to the background queue
///
/// Raised synchronously on the triggering call path and always contained
/// there.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum PrepError {
    #[error("Content item {content_id} has changed cultures but none with an identifier")]
    MalformedCulture { content_id: ContentId },

    #[error("Failed to queue automatic translation: {0}")]
    Enqueue(#[from] QueueError),
}
