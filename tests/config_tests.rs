//! Configuration Loading Tests
//!
//! Run: cargo nextest run --test config_tests

use std::io::Write;

use credo_webhooks::config::{
    CompositeConfigProvider, ConfigProvider, DEFAULT_SERVER, DotenvConfigProvider,
    EnvConfigProvider, MemoryConfigProvider,
};
use credo_webhooks::{Client, ClientConfig, ConfigError, Error};
use tempfile::NamedTempFile;

fn dotenv_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

#[tokio::test]
async fn test_config_from_dotenv_file() {
    let file = dotenv_file(&[
        "API_KEY=abc123",
        "TENANT=acme",
        "WEBHOOK_URL=https://example.com/hook",
        "SERVER=https://staging.credo.ai/",
    ]);
    let provider = DotenvConfigProvider::open(file.path()).unwrap();

    let config = ClientConfig::from_provider(&provider).await.unwrap();
    assert_eq!(config.api_key(), "abc123");
    assert_eq!(config.tenant(), "acme");
    assert_eq!(config.webhook_url(), "https://example.com/hook");

    let client = Client::new(config).unwrap();
    assert_eq!(client.base_url(), "https://staging.credo.ai/api/v2/acme");
}

#[tokio::test]
async fn test_server_defaults_to_production_host() {
    let file = dotenv_file(&[
        "API_KEY=abc123",
        "TENANT=acme",
        "WEBHOOK_URL=https://example.com/hook",
    ]);
    let provider = DotenvConfigProvider::open(file.path()).unwrap();

    let config = ClientConfig::from_provider(&provider).await.unwrap();
    assert_eq!(config.server(), DEFAULT_SERVER);
}

#[tokio::test]
async fn test_missing_required_setting_is_an_error() {
    let file = dotenv_file(&["API_KEY=abc123", "TENANT=acme"]);
    let provider = DotenvConfigProvider::open(file.path()).unwrap();

    let err = ClientConfig::from_provider(&provider).await.unwrap_err();
    assert!(matches!(err, ConfigError::MissingKey { ref key } if key == "WEBHOOK_URL"));
    assert!(Error::from(err).is_configuration_error());
}

#[tokio::test]
async fn test_earlier_provider_overrides_file() {
    let file = dotenv_file(&[
        "API_KEY=file-key",
        "TENANT=file-tenant",
        "WEBHOOK_URL=https://example.com/hook",
    ]);
    let provider = CompositeConfigProvider::new()
        .provider(Box::new(MemoryConfigProvider::new().value("TENANT", "override")))
        .provider(Box::new(DotenvConfigProvider::open(file.path()).unwrap()));

    assert_eq!(provider.name(), "composite");
    let config = ClientConfig::from_provider(&provider).await.unwrap();
    assert_eq!(config.tenant(), "override");
    assert_eq!(config.api_key(), "file-key");
}

#[tokio::test]
async fn test_load_env_value_wins_over_file() {
    let file = dotenv_file(&[
        "API_KEY=abc123",
        "TENANT=acme",
        "WEBHOOK_URL=https://example.com/from-file",
    ]);
    let env = EnvConfigProvider::prefixed("CREDO_CFG_WINS_");

    // SAFETY: Test-only environment setup
    unsafe { std::env::set_var("CREDO_CFG_WINS_WEBHOOK_URL", "https://example.com/from-env") };
    let config = ClientConfig::load_with_env(file.path(), env).await;
    unsafe { std::env::remove_var("CREDO_CFG_WINS_WEBHOOK_URL") };

    let config = config.unwrap();
    assert_eq!(config.webhook_url(), "https://example.com/from-env");
    assert_eq!(config.tenant(), "acme");
}

#[tokio::test]
async fn test_load_blank_env_value_falls_through_to_file() {
    let file = dotenv_file(&[
        "API_KEY=abc123",
        "TENANT=acme",
        "WEBHOOK_URL=https://example.com/hook",
        "SERVER=https://staging.credo.ai",
    ]);
    let env = EnvConfigProvider::prefixed("CREDO_CFG_BLANK_");

    // SAFETY: Test-only environment setup
    unsafe { std::env::set_var("CREDO_CFG_BLANK_SERVER", "") };
    unsafe { std::env::set_var("CREDO_CFG_BLANK_TENANT", "   ") };
    let config = ClientConfig::load_with_env(file.path(), env).await;
    unsafe { std::env::remove_var("CREDO_CFG_BLANK_SERVER") };
    unsafe { std::env::remove_var("CREDO_CFG_BLANK_TENANT") };

    let config = config.unwrap();
    assert_eq!(config.server(), "https://staging.credo.ai");
    assert_eq!(config.tenant(), "acme");
}

#[tokio::test]
async fn test_load_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join(".env");

    let err = ClientConfig::load(&missing).await.unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { ref path } if *path == missing));
}
