use std::collections::HashMap;
use std::sync::Arc;

use super::DataProvider;

/// Registry of named data providers, owned by its caller
#[derive(Debug, Default)]
pub struct DataManager {
    providers: HashMap<String, Arc<DataProvider>>,
}

impl DataManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its tag, replacing any previous one
    pub fn add_provider(&mut self, provider: DataProvider) -> Arc<DataProvider> {
        let provider = Arc::new(provider);
        if self
            .providers
            .insert(provider.tag().to_string(), provider.clone())
            .is_some()
        {
            tracing::warn!(provider = %provider.tag(), "replaced existing data provider");
        }
        provider
    }

    /// Register a provider (builder style)
    pub fn with_provider(mut self, provider: DataProvider) -> Self {
        self.add_provider(provider);
        self
    }

    pub fn get_data_provider(&self, tag: &str) -> Option<Arc<DataProvider>> {
        self.providers.get(tag).cloned()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }
}
