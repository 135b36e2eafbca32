//! Configuration Provider Trait

use super::ConfigResult;

/// Read-only source of raw configuration values.
#[async_trait::async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Get a raw configuration value, `None` if the key is not set
    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>>;
}
