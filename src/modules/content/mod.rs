/// Content reported by the CMS event source
pub mod domain;

pub use domain::{ContentEvent, ContentItem, ContentRepository, EventKind, PublishCultureInfo};
