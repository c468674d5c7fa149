use super::application::service::{AutomaticTranslationService, TranslationCollaborators};
use super::config::AutoTranslateSettings;
use super::handler::AutoTranslateHandler;
use crate::log_info;
use crate::modules::jobs::BackgroundTaskQueue;
use std::sync::Arc;

/// Wires the automatic translation service and its event handler
pub struct AutoTranslateModule {
    pub settings: Arc<AutoTranslateSettings>,
    pub service: Arc<AutomaticTranslationService>,
    pub handler: Arc<AutoTranslateHandler>,
}

impl AutoTranslateModule {
    /// Build the module from the host's services
    ///
    /// The handler should be registered for both saved and published events;
    /// the settings decide which of them actually trigger a run.
    pub fn compose(
        settings: AutoTranslateSettings,
        collaborators: TranslationCollaborators,
        queue: Arc<dyn BackgroundTaskQueue>,
    ) -> Self {
        let settings = Arc::new(settings);
        let service = Arc::new(AutomaticTranslationService::new(collaborators, &settings));
        let handler = Arc::new(AutoTranslateHandler::new(
            settings.clone(),
            service.clone(),
            queue,
        ));

        log_info!(
            "Automatic translation composed (on save: {}, on publish: {}, provider: {})",
            settings.on_save,
            settings.on_publish,
            settings.provider
        );

        Self {
            settings,
            service,
            handler,
        }
    }
}
