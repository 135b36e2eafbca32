//! Webhook CRUD operations.
//!
//! Thin wrappers over [`Client::request`]. Bodies are passed through untouched;
//! see [`WebhookAttributes`](crate::types::WebhookAttributes) for building them.

use reqwest::Method;
use serde_json::{Map, Value};

use super::Client;
use super::outcome::RequestOutcome;

const WEBHOOKS_PATH: &str = "webhooks";

fn webhook_path(id: &str) -> String {
    format!("{}/{}", WEBHOOKS_PATH, id)
}

impl Client {
    /// `GET webhooks`
    pub async fn list_webhooks(&self) -> RequestOutcome {
        self.request(Method::GET, WEBHOOKS_PATH, None, Some("List webhooks"))
            .await
    }

    /// `GET webhooks/{id}`. A successful body is also handed to the observer.
    pub async fn get_webhook(&self, id: &str) -> RequestOutcome {
        let outcome = self
            .request(Method::GET, &webhook_path(id), None, Some("Get webhook"))
            .await;

        match &outcome {
            RequestOutcome::Body { body, .. } => self.observer.resource_fetched(id, body),
            RequestOutcome::Empty { .. } => self
                .observer
                .resource_fetched(id, &Value::Object(Map::new())),
            RequestOutcome::Failed(_) => {}
        }

        outcome
    }

    /// `POST webhooks`.
    ///
    /// The assigned id is at `data.id` of the body; see
    /// [`created_webhook_id`](crate::types::created_webhook_id).
    pub async fn create_webhook(&self, payload: &Value) -> RequestOutcome {
        self.request(
            Method::POST,
            WEBHOOKS_PATH,
            Some(payload),
            Some("Create webhook"),
        )
        .await
    }

    /// `PATCH webhooks/{id}`
    pub async fn update_webhook(&self, id: &str, payload: &Value) -> RequestOutcome {
        self.request(
            Method::PATCH,
            &webhook_path(id),
            Some(payload),
            Some("Update webhook"),
        )
        .await
    }

    /// `DELETE webhooks/{id}`; `true` on any 2xx, including an empty 204.
    pub async fn delete_webhook(&self, id: &str) -> bool {
        self.delete_webhook_outcome(id).await.is_success()
    }

    /// `DELETE webhooks/{id}`, keeping the failure detail.
    pub async fn delete_webhook_outcome(&self, id: &str) -> RequestOutcome {
        self.request(
            Method::DELETE,
            &webhook_path(id),
            None,
            Some("Delete webhook"),
        )
        .await
    }
}
