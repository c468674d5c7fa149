use crate::modules::translation::domain::{ProviderKey, ProviderRegistry, TranslationProvider};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of the providers installed in the host, keyed by provider key
#[derive(Default, Clone)]
pub struct InMemoryProviderRegistry {
    providers: HashMap<ProviderKey, Arc<dyn TranslationProvider>>,
}

impl InMemoryProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider, replacing any previous one with the same key
    pub fn register(&mut self, provider: Arc<dyn TranslationProvider>) -> &mut Self {
        self.providers.insert(provider.key(), provider);
        self
    }

    pub fn with_provider(mut self, provider: Arc<dyn TranslationProvider>) -> Self {
        self.register(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl ProviderRegistry for InMemoryProviderRegistry {
    fn resolve(&self, key: &ProviderKey) -> Option<Arc<dyn TranslationProvider>> {
        self.providers.get(key).cloned()
    }
}
