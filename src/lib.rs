//! # credo-webhooks
//!
//! Rust client for managing webhooks on the Credo AI governance platform.
//!
//! Authenticate once with an API key, then create, read, update and delete
//! webhook subscriptions through the tenant-scoped JSON:API endpoints.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use credo_webhooks::{Client, ClientConfig, WebhookAttributes, created_webhook_id};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), credo_webhooks::Error> {
//!     let config = ClientConfig::load(".env").await?;
//!     let mut client = Client::new(config)?;
//!     client.try_authenticate().await?;
//!
//!     let payload = WebhookAttributes::builder()
//!         .description("Test webhook")
//!         .event_type("use_case_governance_status_updated")
//!         .url(client.webhook_url())
//!         .build()
//!         .into_create_payload()?;
//!
//!     let created = client.create_webhook(&payload).await.into_result()?;
//!     if let Some(id) = created_webhook_id(&created) {
//!         client.delete_webhook(id).await;
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod client;
pub mod config;
pub mod types;

pub use auth::AccessToken;
pub use client::{
    AuthEvent, Client, ClientBuilder, FailureKind, NoopObserver, RequestFailure, RequestObserver,
    RequestOutcome, RequestRecord, Session, TracingObserver,
};
pub use config::{ClientConfig, ConfigError};
pub use types::{AuthenticationMethod, Envelope, WebhookAttributes, created_webhook_id};

/// Error type for credo-webhooks operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Token exchange failed or returned no token.
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// Resource operation attempted before a successful `authenticate()`.
    #[error("Not authenticated: call authenticate() first")]
    Unauthenticated,

    /// Resource request failed.
    #[error("Request failed: {0}")]
    Request(RequestFailure),

    /// HTTP client could not be built or a request could not be sent.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing credentials or rejected authentication
    Authorization,
    /// Configuration could not be loaded or is invalid
    Configuration,
    /// Network or server errors that may succeed on retry
    Transient,
    /// The addressed resource does not exist
    NotFound,
    /// Client errors and unexpected responses
    Internal,
}

impl Error {
    pub fn auth(message: impl Into<String>) -> Self {
        Error::Auth {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Auth { .. } | Error::Unauthenticated => ErrorCategory::Authorization,
            Error::Config(_) => ErrorCategory::Configuration,
            Error::Network(_) => ErrorCategory::Transient,
            Error::Request(failure) => match failure.kind {
                FailureKind::Unauthenticated => ErrorCategory::Authorization,
                FailureKind::Client
                    if matches!(failure.status, Some(401 | 403)) =>
                {
                    ErrorCategory::Authorization
                }
                FailureKind::NotFound => ErrorCategory::NotFound,
                FailureKind::Network | FailureKind::Server => ErrorCategory::Transient,
                FailureKind::Client | FailureKind::Decode => ErrorCategory::Internal,
            },
            Error::Json(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_authorization_error(&self) -> bool {
        self.category() == ErrorCategory::Authorization
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Transient
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Request(failure) => failure.status,
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<RequestFailure> for Error {
    fn from(failure: RequestFailure) -> Self {
        match failure.kind {
            FailureKind::Unauthenticated => Error::Unauthenticated,
            _ => Error::Request(failure),
        }
    }
}

/// Result type alias for credo-webhooks operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            Error::auth("bad key").category(),
            ErrorCategory::Authorization
        );
        assert!(Error::Unauthenticated.is_authorization_error());
        assert!(
            Error::from(ConfigError::MissingKey {
                key: "TENANT".into()
            })
            .is_configuration_error()
        );
        assert!(Error::from(RequestFailure::from_status(404, "")).is_not_found());
        assert!(Error::from(RequestFailure::from_status(502, "")).is_retryable());
        assert!(Error::from(RequestFailure::from_status(403, "")).is_authorization_error());
        assert_eq!(
            Error::from(RequestFailure::from_status(422, "")).category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn test_unauthenticated_failure_maps_to_variant() {
        let err = Error::from(RequestFailure::unauthenticated());
        assert!(matches!(err, Error::Unauthenticated));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_error_display() {
        let err = Error::from(RequestFailure::from_status(404, "no such webhook"));
        assert_eq!(err.to_string(), "Request failed: HTTP 404: no such webhook");
        assert_eq!(err.status_code(), Some(404));
    }
}
