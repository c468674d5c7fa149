//! Automatic translation of changed content.
//!
//! Content events are turned into translation jobs on a background queue;
//! see [`modules::auto_translate`].

pub mod modules;
pub mod shared;

pub use modules::auto_translate::{
    AutoTranslateHandler, AutoTranslateModule, AutoTranslateSettings, AutomaticTranslationService,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::init_logger;
