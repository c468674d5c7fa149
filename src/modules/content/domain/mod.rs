pub mod entities;
pub mod repository;

pub use entities::{ContentEvent, ContentItem, EventKind, PublishCultureInfo};
pub use repository::ContentRepository;
