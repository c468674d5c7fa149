/// Automatic translation module
///
/// Turns content save/publish events into translation jobs without blocking
/// the operation that raised the event.
///
/// Architecture:
/// - Config: the `Translation:Auto` settings
/// - Application: the pipeline stages and the orchestration service
/// - Handler: dispatch onto the background queue and failure containment
/// - Composer: wiring from the host's services
pub mod application;
pub mod composer;
pub mod config;
pub mod error;
pub mod handler;

// Re-exports for easy access
pub use application::{
    AutomaticTranslationService, CultureFilter, TranslationCollaborators, TranslationRequest,
    TranslationRunReport,
};
pub use composer::AutoTranslateModule;
pub use config::{AutoTranslateSettings, DEFAULT_PROVIDER_KEY};
pub use error::PrepError;
pub use handler::{AutoTranslateHandler, DispatchOutcome, RunFault};
