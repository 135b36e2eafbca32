//! In-Memory Configuration Provider
//!
//! Useful for testing and code-defined configuration.

use std::collections::HashMap;

use super::ConfigResult;
use super::provider::ConfigProvider;

/// In-memory configuration provider
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigProvider {
    data: HashMap<String, String>,
}

impl MemoryConfigProvider {
    /// Create a new empty memory provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory provider with initial data
    pub fn from_data(data: HashMap<String, String>) -> Self {
        Self { data }
    }

    /// Add a value (builder pattern)
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[async_trait::async_trait]
impl ConfigProvider for MemoryConfigProvider {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.data.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_provider() {
        let mut provider = MemoryConfigProvider::new().value("TENANT", "acme");
        provider.insert("API_KEY", "k");

        assert_eq!(provider.len(), 2);
        assert_eq!(
            provider.get_raw("TENANT").await.unwrap(),
            Some("acme".to_string())
        );
        assert_eq!(provider.get_raw("SERVER").await.unwrap(), None);
    }
}
