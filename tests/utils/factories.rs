//! Test data factories using builder pattern
//!
//! Provides convenient methods to create test data with sensible defaults

use auto_translate::modules::content::{ContentItem, PublishCultureInfo};
use auto_translate::modules::translation::{ContentId, Culture, SetId, TargetSite, TranslationSet};

pub fn culture(name: &str) -> Culture {
    let display_name = match name {
        "en-GB" => "English (United Kingdom)",
        "fr-FR" => "French (France)",
        "de-DE" => "German (Germany)",
        "es-ES" => "Spanish (Spain)",
        "nl-NL" => "Dutch (Netherlands)",
        "it-IT" => "Italian (Italy)",
        other => other,
    };
    Culture::new(name, display_name)
}

pub struct ContentFactory {
    id: i32,
    name: String,
    parent_path: String,
    culture_infos: Vec<PublishCultureInfo>,
}

impl Default for ContentFactory {
    fn default() -> Self {
        Self {
            id: 1001,
            name: "Home".to_string(),
            parent_path: "-1,1000".to_string(),
            culture_infos: Vec::new(),
        }
    }
}

impl ContentFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invariant content: no per-culture metadata
    pub fn invariant() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn under(mut self, parent_path: &str) -> Self {
        self.parent_path = parent_path.to_string();
        self
    }

    pub fn with_dirty_culture(mut self, culture: &str) -> Self {
        self.culture_infos.push(PublishCultureInfo::dirty(culture));
        self
    }

    pub fn with_clean_culture(mut self, culture: &str) -> Self {
        self.culture_infos.push(PublishCultureInfo::clean(culture));
        self
    }

    pub fn build(self) -> ContentItem {
        ContentItem {
            id: ContentId(self.id),
            name: self.name,
            path: format!("{},{}", self.parent_path, self.id),
            culture_infos: self.culture_infos,
        }
    }
}

pub struct SetFactory {
    id: i32,
    name: String,
    root_path: String,
    culture: Culture,
    sites: Vec<TargetSite>,
}

impl Default for SetFactory {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Website".to_string(),
            root_path: "-1,1000".to_string(),
            culture: culture("en-GB"),
            sites: Vec::new(),
        }
    }
}

impl SetFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self.name = format!("Set {}", id);
        self
    }

    pub fn rooted_at(mut self, root_path: &str) -> Self {
        self.root_path = root_path.to_string();
        self
    }

    pub fn from_culture(mut self, name: &str) -> Self {
        self.culture = culture(name);
        self
    }

    pub fn with_target(mut self, name: &str) -> Self {
        let root = format!("-1,{}", 2000 + self.sites.len() * 1000);
        self.sites.push(TargetSite::new(culture(name), root));
        self
    }

    pub fn build(self) -> TranslationSet {
        TranslationSet {
            id: SetId(self.id),
            name: self.name,
            root_path: self.root_path,
            culture: self.culture,
            sites: self.sites,
        }
    }
}
