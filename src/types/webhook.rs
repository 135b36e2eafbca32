//! Typed webhook attributes.
//!
//! The client never validates these; they are a convenience for building the
//! bodies passed to [`Client::create_webhook`](crate::Client::create_webhook)
//! and [`Client::update_webhook`](crate::Client::update_webhook).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Envelope;

/// How the platform authenticates against the delivery URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticationMethod {
    #[default]
    #[serde(rename = "none")]
    None,
    /// Requires `authentication_payload`, `authentication_payload_type`
    /// and `authentication_server`.
    #[serde(rename = "o_auth", alias = "oauth")]
    OAuth,
}

/// Attributes of a webhook resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookAttributes {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub event_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub event_type_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub event_type_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub authentication_method: Option<AuthenticationMethod>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub authentication_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub authentication_payload_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub authentication_server: Option<String>,
}

impl WebhookAttributes {
    pub fn builder() -> WebhookAttributesBuilder {
        WebhookAttributesBuilder::default()
    }

    /// Body for `POST webhooks`.
    pub fn into_create_payload(self) -> serde_json::Result<Value> {
        Envelope::webhook(self).to_value()
    }

    /// Body for `PATCH webhooks/{id}`.
    pub fn into_update_payload(self, id: impl Into<String>) -> serde_json::Result<Value> {
        Envelope::webhook(self).with_id(id).to_value()
    }
}

/// Builder for [`WebhookAttributes`].
#[derive(Debug, Clone, Default)]
pub struct WebhookAttributesBuilder {
    attributes: WebhookAttributes,
}

impl WebhookAttributesBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.attributes.description = Some(description.into());
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.attributes.event_types.push(event_type.into());
        self
    }

    pub fn event_types<I, S>(mut self, event_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes
            .event_types
            .extend(event_types.into_iter().map(Into::into));
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.attributes.url = Some(url.into());
        self
    }

    pub fn event_type_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.attributes.event_type_prefix = Some(prefix.into());
        self
    }

    pub fn event_type_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.attributes.event_type_suffix = Some(suffix.into());
        self
    }

    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.attributes.environment = Some(environment.into());
        self
    }

    pub fn authentication_method(mut self, method: AuthenticationMethod) -> Self {
        self.attributes.authentication_method = Some(method);
        self
    }

    /// Set all three OAuth fields and switch the method to [`AuthenticationMethod::OAuth`].
    pub fn oauth(
        mut self,
        payload: Value,
        payload_type: impl Into<String>,
        server: impl Into<String>,
    ) -> Self {
        self.attributes.authentication_method = Some(AuthenticationMethod::OAuth);
        self.attributes.authentication_payload = Some(payload);
        self.attributes.authentication_payload_type = Some(payload_type.into());
        self.attributes.authentication_server = Some(server.into());
        self
    }

    pub fn build(self) -> WebhookAttributes {
        self.attributes
    }
}
