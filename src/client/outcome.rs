//! Normalized result of a resource request.

use serde_json::{Map, Value};

use super::error::{FailureKind, RequestFailure};
use crate::Result;

/// What a resource request produced.
///
/// Failures are values here, never panics or propagated errors, so a driver
/// can tell "not found" from "server error" from "unreachable".
#[derive(Debug, Clone)]
pub enum RequestOutcome {
    /// 2xx with a JSON body
    Body { status: u16, body: Value },
    /// 204, or 2xx with an empty body
    Empty { status: u16 },
    Failed(RequestFailure),
}

impl RequestOutcome {
    /// HTTP status, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Body { status, .. } | Self::Empty { status } => Some(*status),
            Self::Failed(failure) => failure.status,
        }
    }

    pub fn is_success(&self) -> bool {
        !self.is_failure()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Failed(f) if f.kind == FailureKind::NotFound)
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Body { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&RequestFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Collapse to the optional-body form: an empty success becomes `{}`,
    /// a failure becomes `None`.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Body { body, .. } => Some(body),
            Self::Empty { .. } => Some(Value::Object(Map::new())),
            Self::Failed(_) => None,
        }
    }

    /// Like [`into_value`](Self::into_value), but a failure becomes an error.
    pub fn into_result(self) -> Result<Value> {
        match self {
            Self::Failed(failure) => Err(failure.into()),
            other => Ok(other.into_value().unwrap_or_default()),
        }
    }
}
