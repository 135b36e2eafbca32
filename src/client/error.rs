//! Request failure types.

use thiserror::Error;

/// Classification of a failed resource request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Attempted before a successful `authenticate()`; nothing was sent
    Unauthenticated,
    /// HTTP 404
    NotFound,
    /// Any other 4xx
    Client,
    /// 5xx
    Server,
    /// Connection, TLS or timeout failure
    Network,
    /// 2xx with a body that is not valid JSON
    Decode,
}

/// Why a resource request produced no result.
#[derive(Debug, Clone, Error)]
#[error("{}", describe(.kind, .status, .detail))]
pub struct RequestFailure {
    pub kind: FailureKind,
    /// HTTP status, when a response was received
    pub status: Option<u16>,
    pub detail: String,
}

fn describe(kind: &FailureKind, status: &Option<u16>, detail: &str) -> String {
    let head = match (kind, status) {
        (FailureKind::Unauthenticated, _) => "not authenticated".to_string(),
        (FailureKind::Network, _) => "network error".to_string(),
        (FailureKind::Decode, Some(s)) => format!("invalid JSON in HTTP {} response", s),
        (FailureKind::Decode, None) => "invalid JSON response".to_string(),
        (_, Some(s)) => format!("HTTP {}", s),
        (_, None) => "request failed".to_string(),
    };
    if detail.is_empty() {
        head
    } else {
        format!("{}: {}", head, detail)
    }
}

impl RequestFailure {
    pub fn unauthenticated() -> Self {
        Self {
            kind: FailureKind::Unauthenticated,
            status: None,
            detail: "call authenticate() first".into(),
        }
    }

    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        let kind = match status {
            404 => FailureKind::NotFound,
            400..=499 => FailureKind::Client,
            _ => FailureKind::Server,
        };
        Self {
            kind,
            status: Some(status),
            detail: detail.into(),
        }
    }

    pub fn network(err: &reqwest::Error) -> Self {
        Self {
            kind: FailureKind::Network,
            status: err.status().map(|s| s.as_u16()),
            detail: err.to_string(),
        }
    }

    pub fn decode(status: u16, err: &serde_json::Error) -> Self {
        Self {
            kind: FailureKind::Decode,
            status: Some(status),
            detail: err.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == FailureKind::NotFound
    }

    /// Check if this failure is worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind, FailureKind::Network | FailureKind::Server)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            RequestFailure::from_status(404, "").kind,
            FailureKind::NotFound
        );
        assert_eq!(
            RequestFailure::from_status(422, "").kind,
            FailureKind::Client
        );
        assert_eq!(
            RequestFailure::from_status(503, "").kind,
            FailureKind::Server
        );
    }

    #[test]
    fn test_retryable() {
        assert!(RequestFailure::from_status(500, "").is_retryable());
        assert!(!RequestFailure::from_status(404, "").is_retryable());
        assert!(!RequestFailure::unauthenticated().is_retryable());
    }

    #[test]
    fn test_display() {
        let failure = RequestFailure::from_status(404, "webhook not found");
        assert_eq!(failure.to_string(), "HTTP 404: webhook not found");

        let failure = RequestFailure::from_status(500, "");
        assert_eq!(failure.to_string(), "HTTP 500");

        assert_eq!(
            RequestFailure::unauthenticated().to_string(),
            "not authenticated: call authenticate() first"
        );
    }
}
