//! Dotenv File Configuration Provider
//!
//! Parses `KEY=value` files without touching the process environment.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::provider::ConfigProvider;
use super::{ConfigError, ConfigResult};

/// Configuration read once from a `.env` file.
#[derive(Debug, Clone)]
pub struct DotenvConfigProvider {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl DotenvConfigProvider {
    /// Parse the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let mut values = HashMap::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            values.insert(key, value);
        }

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[async_trait::async_trait]
impl ConfigProvider for DotenvConfigProvider {
    fn name(&self) -> &str {
        "dotenv"
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_parse_dotenv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# credentials").unwrap();
        writeln!(file, "API_KEY=abc123").unwrap();
        writeln!(file, "TENANT=\"acme\"").unwrap();
        writeln!(file, "WEBHOOK_URL=https://example.com/hook").unwrap();

        let provider = DotenvConfigProvider::open(file.path()).unwrap();
        assert_eq!(provider.len(), 3);
        assert_eq!(
            provider.get_raw("API_KEY").await.unwrap(),
            Some("abc123".to_string())
        );
        assert_eq!(
            provider.get_raw("TENANT").await.unwrap(),
            Some("acme".to_string())
        );
        assert_eq!(provider.get_raw("SERVER").await.unwrap(), None);
    }

    #[test]
    fn test_open_missing_file() {
        let err = DotenvConfigProvider::open("/nonexistent/.env").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }
}
