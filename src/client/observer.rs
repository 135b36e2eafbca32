//! Injected diagnostics for client activity.
//!
//! The library installs no global subscriber. Each [`Client`](super::Client)
//! carries its own observer; the default forwards to `tracing`.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::Value;

use super::error::RequestFailure;
use super::outcome::RequestOutcome;

/// One completed resource request.
#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub method: Method,
    /// Tenant-relative path, without a leading `/`
    pub path: String,
    pub status: Option<u16>,
    pub duration: Duration,
    pub label: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl RequestRecord {
    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }
}

impl fmt::Display for RequestRecord {
    /// `METHOD path - status (Nms) label`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - ", self.method, self.path)?;
        match self.status {
            Some(status) => write!(f, "{}", status)?,
            None => f.write_str("ERR")?,
        }
        write!(f, " ({}ms)", self.duration_ms())?;
        if let Some(label) = &self.label {
            write!(f, " {}", label)?;
        }
        Ok(())
    }
}

/// Outcome of a token exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    Succeeded { tenant: String },
    /// Exchange returned 2xx but no usable `access_token`
    MissingToken { status: u16 },
    Failed { detail: String },
}

/// Receives client diagnostics. Every method defaults to a no-op.
pub trait RequestObserver: Send + Sync {
    fn request_completed(&self, _record: &RequestRecord, _outcome: &RequestOutcome) {}

    /// A request refused locally, before any I/O.
    fn request_rejected(&self, _method: &Method, _path: &str, _failure: &RequestFailure) {}

    fn authenticated(&self, _event: &AuthEvent) {}

    fn resource_fetched(&self, _id: &str, _body: &Value) {}
}

/// Discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {}

/// Emits structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn request_completed(&self, record: &RequestRecord, outcome: &RequestOutcome) {
        let label = record.label.as_deref().unwrap_or_default();
        match outcome.failure() {
            None => tracing::info!(
                method = %record.method,
                path = %record.path,
                status = record.status,
                duration_ms = record.duration_ms(),
                label,
                "{}",
                record
            ),
            Some(failure) => tracing::error!(
                method = %record.method,
                path = %record.path,
                status = record.status,
                duration_ms = record.duration_ms(),
                label,
                error = %failure,
                "{}",
                record
            ),
        }
    }

    fn request_rejected(&self, method: &Method, path: &str, failure: &RequestFailure) {
        tracing::warn!(method = %method, path, error = %failure, "Request not sent");
    }

    fn authenticated(&self, event: &AuthEvent) {
        match event {
            AuthEvent::Succeeded { tenant } => {
                tracing::info!(tenant = %tenant, "Authenticated with Credo AI")
            }
            AuthEvent::MissingToken { status } => {
                tracing::warn!(status, "Authentication succeeded but no token returned")
            }
            AuthEvent::Failed { detail } => {
                tracing::error!(error = %detail, "Authentication failed")
            }
        }
    }

    fn resource_fetched(&self, id: &str, body: &Value) {
        let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
        tracing::info!(webhook_id = id, "Webhook config:\n{}", pretty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: Option<u16>, label: Option<&str>) -> RequestRecord {
        RequestRecord {
            method: Method::POST,
            path: "webhooks".into(),
            status,
            duration: Duration::from_millis(42),
            label: label.map(String::from),
            started_at: Utc::now(),
        }
    }

    #[test]
    fn test_record_display() {
        assert_eq!(
            record(Some(201), Some("Create webhook")).to_string(),
            "POST webhooks - 201 (42ms) Create webhook"
        );
        assert_eq!(record(None, None).to_string(), "POST webhooks - ERR (42ms)");
    }

    #[test]
    fn test_tracing_observer_does_not_panic() {
        let observer = TracingObserver;
        observer.request_completed(
            &record(Some(200), None),
            &RequestOutcome::Empty { status: 200 },
        );
        observer.authenticated(&AuthEvent::MissingToken { status: 200 });
        observer.resource_fetched("wh_1", &serde_json::json!({"data": {}}));
    }
}
