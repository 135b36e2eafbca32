//! Resource types for the Credo AI webhook API.

mod envelope;
mod webhook;

pub use envelope::{Envelope, ResourceData, WEBHOOK_RESOURCE_TYPE, created_webhook_id};
pub use webhook::{AuthenticationMethod, WebhookAttributes, WebhookAttributesBuilder};
