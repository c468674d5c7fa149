/// Content items and the save/publish events that report them
use serde::{Deserialize, Serialize};

use crate::modules::translation::domain::ContentId;

/// Per-culture publish metadata of a content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishCultureInfo {
    pub culture: String,
    /// Changed by the operation that raised the event
    pub dirty: bool,
}

impl PublishCultureInfo {
    pub fn dirty(culture: impl Into<String>) -> Self {
        Self {
            culture: culture.into(),
            dirty: true,
        }
    }

    pub fn clean(culture: impl Into<String>) -> Self {
        Self {
            culture: culture.into(),
            dirty: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    pub name: String,
    /// Comma separated ancestor ids ending with the item's own id
    pub path: String,
    /// Empty for invariant content
    pub culture_infos: Vec<PublishCultureInfo>,
}

impl ContentItem {
    pub fn dirty_cultures(&self) -> impl Iterator<Item = &PublishCultureInfo> {
        self.culture_infos.iter().filter(|info| info.dirty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Saved,
    Published,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Saved => write!(f, "saved"),
            EventKind::Published => write!(f, "published"),
        }
    }
}

/// Notification raised after content was saved or published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEvent {
    pub kind: EventKind,
    pub items: Vec<ContentItem>,
}

impl ContentEvent {
    pub fn saved(items: Vec<ContentItem>) -> Self {
        Self {
            kind: EventKind::Saved,
            items,
        }
    }

    pub fn published(items: Vec<ContentItem>) -> Self {
        Self {
            kind: EventKind::Published,
            items,
        }
    }
}
