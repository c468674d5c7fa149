use crate::log_warn;
use crate::modules::auto_translate::error::PrepError;
use crate::modules::content::ContentItem;
use crate::modules::translation::domain::culture_text_eq;
use serde::{Deserialize, Serialize};

/// Cultures that changed in the triggering event
///
/// An empty filter means "no culture filter", not "no cultures": every set
/// qualifies regardless of its source culture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultureFilter {
    cultures: Vec<String>,
}

impl CultureFilter {
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Filter on the given culture identifiers, dropping case-insensitive duplicates
    pub fn from_cultures<I, S>(cultures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filter = Self::default();
        for culture in cultures {
            let culture = culture.into();
            if !filter.contains(&culture) {
                filter.cultures.push(culture);
            }
        }
        filter
    }

    pub fn is_unrestricted(&self) -> bool {
        self.cultures.is_empty()
    }

    /// Whether a set with this source culture passes the filter
    pub fn allows(&self, culture_name: &str) -> bool {
        self.is_unrestricted() || self.contains(culture_name)
    }

    pub fn cultures(&self) -> &[String] {
        &self.cultures
    }

    fn contains(&self, culture_name: &str) -> bool {
        self.cultures
            .iter()
            .any(|culture| culture_text_eq(culture, culture_name))
    }
}

/// Cultures marked changed on the first item of the event
///
/// Only the first item is inspected: the items of one event share the
/// operation's culture set. Entries without an identifier are skipped; if
/// every changed entry is blank the event is rejected, since an empty filter
/// would let every set through.
pub fn extract_cultures(items: &[ContentItem]) -> Result<CultureFilter, PrepError> {
    let Some(first) = items.first() else {
        return Ok(CultureFilter::unrestricted());
    };

    let mut dirty = 0;
    let mut cultures = Vec::new();
    for info in first.dirty_cultures() {
        dirty += 1;
        let culture = info.culture.trim();
        if culture.is_empty() {
            log_warn!(
                "Content item {} has a changed culture without an identifier, skipping it",
                first.id
            );
            continue;
        }
        cultures.push(culture.to_string());
    }

    if dirty > 0 && cultures.is_empty() {
        return Err(PrepError::MalformedCulture {
            content_id: first.id,
        });
    }

    Ok(CultureFilter::from_cultures(cultures))
}
