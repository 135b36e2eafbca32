//! JSON:API style `{data: {type, id?, attributes}}` envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Resource type tag for webhooks.
pub const WEBHOOK_RESOURCE_TYPE: &str = "webhook";

/// Top-level body wrapper used by every resource endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<A> {
    pub data: ResourceData<A>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceData<A> {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub attributes: A,
}

impl<A> Envelope<A> {
    pub fn new(resource_type: impl Into<String>, attributes: A) -> Self {
        Self {
            data: ResourceData {
                resource_type: resource_type.into(),
                id: None,
                attributes,
            },
        }
    }

    pub fn webhook(attributes: A) -> Self {
        Self::new(WEBHOOK_RESOURCE_TYPE, attributes)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.data.id = Some(id.into());
        self
    }
}

impl<A: Serialize> Envelope<A> {
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Server-assigned id from a create response (`data.id`).
///
/// Returns `None` when the body has no `data.id` or it is empty.
pub fn created_webhook_id(body: &Value) -> Option<&str> {
    body.get("data")?
        .get("id")?
        .as_str()
        .filter(|id| !id.is_empty())
}
