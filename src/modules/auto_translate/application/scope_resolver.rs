use super::culture_extractor::CultureFilter;
use crate::log_debug;
use crate::modules::content::ContentItem;
use crate::modules::translation::domain::{SetId, SetRepository, TranslationSet};
use crate::shared::errors::AppResult;
use std::collections::HashSet;
use std::sync::Arc;

/// Maps changed content to the translation sets it belongs to
pub struct ScopeResolver {
    set_repository: Arc<dyn SetRepository>,
    excluded_sets: Vec<SetId>,
}

impl ScopeResolver {
    pub fn new(set_repository: Arc<dyn SetRepository>, excluded_sets: Vec<SetId>) -> Self {
        Self {
            set_repository,
            excluded_sets,
        }
    }

    /// Sets containing any of the items, first occurrence wins
    ///
    /// A non-empty culture filter keeps only sets whose source culture
    /// changed; configured exclusions are always dropped. An empty result is
    /// not an error, the content may live under a target site.
    pub async fn resolve(
        &self,
        items: &[ContentItem],
        cultures: &CultureFilter,
    ) -> AppResult<Vec<TranslationSet>> {
        let mut seen = HashSet::new();
        let mut sets = Vec::new();

        for item in items {
            for set in self.set_repository.find_sets_by_path(&item.path).await? {
                if seen.insert(set.id) {
                    sets.push(set);
                }
            }
        }

        let found = sets.len();
        sets.retain(|set| cultures.allows(&set.culture.name));
        sets.retain(|set| !self.excluded_sets.contains(&set.id));

        log_debug!(
            "Resolved {} translation sets for {} items ({} before filtering)",
            sets.len(),
            items.len(),
            found
        );

        Ok(sets)
    }
}
