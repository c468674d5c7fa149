/// Content event handler for automatic translation
///
/// Errors travel on two channels:
/// - preparing the hand-off (culture extraction, queueing) returns a
///   `PrepError` synchronously; `handle` logs and swallows it so the save or
///   publish that raised the event is never affected
/// - the run itself executes detached on the background queue; its failure,
///   a panic included, is logged as a structured event and broadcast as a
///   `RunFault` to anyone subscribed, never to the triggering caller
use super::application::culture_extractor::extract_cultures;
use super::application::service::{AutomaticTranslationService, TranslationRequest};
use super::config::AutoTranslateSettings;
use super::error::PrepError;
use crate::modules::content::ContentEvent;
use crate::modules::jobs::BackgroundTaskQueue;
use crate::modules::translation::domain::ContentId;
use crate::shared::errors::AppError;
use crate::{log_debug, log_error};
use chrono::{DateTime, Utc};
use futures::FutureExt;
use serde::Serialize;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

const FAULT_CHANNEL_CAPACITY: usize = 64;

/// What happened to an event on the synchronous path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The trigger for this kind of event is switched off
    Disabled,
    NothingToTranslate,
    /// A run was queued; its jobs will carry this group id
    Dispatched { group_id: Uuid },
}

/// Failure of a detached run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunFault {
    pub group_id: Uuid,
    pub content_ids: Vec<ContentId>,
    pub error: AppError,
    pub occurred_at: DateTime<Utc>,
}

pub struct AutoTranslateHandler {
    settings: Arc<AutoTranslateSettings>,
    service: Arc<AutomaticTranslationService>,
    queue: Arc<dyn BackgroundTaskQueue>,
    faults: broadcast::Sender<RunFault>,
}

impl AutoTranslateHandler {
    pub fn new(
        settings: Arc<AutoTranslateSettings>,
        service: Arc<AutomaticTranslationService>,
        queue: Arc<dyn BackgroundTaskQueue>,
    ) -> Self {
        let (faults, _) = broadcast::channel(FAULT_CHANNEL_CAPACITY);
        Self {
            settings,
            service,
            queue,
            faults,
        }
    }

    /// Receive faults of runs dispatched after this call
    pub fn subscribe_faults(&self) -> broadcast::Receiver<RunFault> {
        self.faults.subscribe()
    }

    /// Handle a saved/published event; never fails and never waits for the run
    pub fn handle(&self, event: &ContentEvent) {
        if let Err(e) = self.try_dispatch(event) {
            log_error!("Error translating content: {}", e);
        }
    }

    /// Queue a run for the event's content
    pub fn try_dispatch(&self, event: &ContentEvent) -> Result<DispatchOutcome, PrepError> {
        if !self.settings.is_enabled_for(event.kind) {
            return Ok(DispatchOutcome::Disabled);
        }
        if event.items.is_empty() {
            return Ok(DispatchOutcome::NothingToTranslate);
        }

        // which cultures were just saved/published; the run only picks sets
        // whose source culture is among them
        let cultures = extract_cultures(&event.items)?;
        let request = TranslationRequest::new(event.items.clone(), cultures);
        let group_id = request.group_id;

        let work = run_detached(self.service.clone(), request, self.faults.clone());
        self.queue.queue_background_work_item(Box::pin(work))?;

        log_debug!(
            "Queued automatic translation {} for {} {} items",
            group_id,
            event.items.len(),
            event.kind
        );

        Ok(DispatchOutcome::Dispatched { group_id })
    }
}

async fn run_detached(
    service: Arc<AutomaticTranslationService>,
    request: TranslationRequest,
    faults: broadcast::Sender<RunFault>,
) {
    let group_id = request.group_id;
    let content_ids = request.content_ids();

    let outcome = AssertUnwindSafe(service.translate(request))
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| Err(AppError::InternalError(panic_message(panic.as_ref()))));

    match outcome {
        Ok(report) => {
            tracing::info!(
                group_id = %group_id,
                sets = report.sets_processed,
                submitted = report.submitted_jobs.len(),
                "automatic translation run finished"
            );
        }
        Err(error) => {
            tracing::error!(
                group_id = %group_id,
                content = ?content_ids,
                error = %error,
                "automatic translation run failed"
            );
            // no subscribers is fine, the log above is the record
            let _ = faults.send(RunFault {
                group_id,
                content_ids,
                error,
                occurred_at: Utc::now(),
            });
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|message| message.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".to_string());
    format!("Automatic translation run panicked: {}", detail)
}
