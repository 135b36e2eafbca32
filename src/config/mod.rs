//! Client configuration and the pluggable providers it is loaded from.
//!
//! ```rust,no_run
//! use credo_webhooks::ClientConfig;
//!
//! # async fn example() -> Result<(), credo_webhooks::Error> {
//! let config = ClientConfig::load(".env").await?;
//! println!("{}", config);
//! # Ok(())
//! # }
//! ```

pub mod composite;
pub mod dotenv;
pub mod env;
pub mod memory;
pub mod provider;

pub use composite::CompositeConfigProvider;
pub use dotenv::DotenvConfigProvider;
pub use env::EnvConfigProvider;
pub use memory::MemoryConfigProvider;
pub use provider::ConfigProvider;

use std::fmt;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Production Credo AI host.
pub const DEFAULT_SERVER: &str = "https://api.credo.ai";
/// Default location of the dotenv file.
pub const DEFAULT_CONFIG_PATH: &str = ".env";

pub const KEY_API_KEY: &str = "API_KEY";
pub const KEY_TENANT: &str = "TENANT";
pub const KEY_WEBHOOK_URL: &str = "WEBHOOK_URL";
pub const KEY_SERVER: &str = "SERVER";

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration source does not exist
    #[error("Config file not found: {}", path.display())]
    NotFound {
        /// The path that was looked up
        path: PathBuf,
    },

    /// Required key missing or blank
    #[error("Missing required setting: {key}")]
    MissingKey {
        /// The key that was not found
        key: String,
    },

    /// Invalid configuration value
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The key with invalid value
        key: String,
        /// Error message
        message: String,
    },

    /// Malformed dotenv file
    #[error("Dotenv error: {0}")]
    Dotenv(#[from] dotenvy::Error),

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Immutable settings a [`Client`](crate::Client) is built from.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: SecretString,
    tenant: String,
    webhook_url: String,
    server: String,
}

impl ClientConfig {
    /// Create a configuration without validation.
    pub fn new(
        api_key: impl Into<String>,
        tenant: impl Into<String>,
        webhook_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            tenant: tenant.into(),
            webhook_url: webhook_url.into(),
            server: DEFAULT_SERVER.to_string(),
        }
    }

    /// Override the server base URL.
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    /// Load from a dotenv file, letting process environment variables win.
    ///
    /// Fails with [`ConfigError::NotFound`] if `path` is not a file.
    pub async fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::load_with_env(path, EnvConfigProvider::new()).await
    }

    /// Like [`load`](Self::load), reading overrides through `env`.
    ///
    /// Blank environment values fall through to the file.
    pub async fn load_with_env(
        path: impl AsRef<Path>,
        env: EnvConfigProvider,
    ) -> ConfigResult<Self> {
        let provider = CompositeConfigProvider::new()
            .provider(Box::new(env))
            .provider(Box::new(DotenvConfigProvider::open(path)?));

        Self::from_provider(&provider).await
    }

    /// Load from [`DEFAULT_CONFIG_PATH`].
    pub async fn load_default() -> ConfigResult<Self> {
        Self::load(DEFAULT_CONFIG_PATH).await
    }

    /// Resolve all settings from a provider.
    pub async fn from_provider(provider: &dyn ConfigProvider) -> ConfigResult<Self> {
        let api_key = required(provider, KEY_API_KEY).await?;
        let tenant = required(provider, KEY_TENANT).await?;
        let webhook_url = required(provider, KEY_WEBHOOK_URL).await?;

        let server = match provider.get_raw(KEY_SERVER).await? {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => DEFAULT_SERVER.to_string(),
        };
        validate_server(&server)?;

        tracing::debug!(
            provider = provider.name(),
            tenant = %tenant,
            server = %server,
            "Resolved client configuration"
        );

        Ok(Self {
            api_key: SecretString::from(api_key),
            tenant,
            webhook_url,
            server,
        })
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    /// Default delivery target for created webhooks.
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    pub fn server(&self) -> &str {
        &self.server
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("tenant", &self.tenant)
            .field("webhook_url", &self.webhook_url)
            .field("server", &self.server)
            .finish()
    }
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tenant='{}', server='{}'", self.tenant, self.server)
    }
}

async fn required(provider: &dyn ConfigProvider, key: &str) -> ConfigResult<String> {
    match provider.get_raw(key).await? {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::MissingKey {
            key: key.to_string(),
        }),
    }
}

fn validate_server(server: &str) -> ConfigResult<()> {
    let parsed = url::Url::parse(server).map_err(|e| ConfigError::InvalidValue {
        key: KEY_SERVER.to_string(),
        message: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidValue {
            key: KEY_SERVER.to_string(),
            message: format!("unsupported scheme '{}'", other),
        }),
    }
}
