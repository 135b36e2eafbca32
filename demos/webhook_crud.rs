//! Webhook CRUD walkthrough - create, fetch, update and delete one webhook.
//!
//! Run with: cargo run --example webhook_crud [path/to/.env]
//!
//! Requires API_KEY, TENANT and WEBHOOK_URL in the dotenv file (SERVER optional).
//! Set RUST_LOG=debug for more detail.

use std::process::ExitCode;

use credo_webhooks::{
    AuthenticationMethod, Client, ClientConfig, WebhookAttributes, created_webhook_id,
};
use tracing_subscriber::EnvFilter;

const EVENT_TYPE: &str = "use_case_governance_status_updated";

fn create_payload(client: &Client) -> serde_json::Result<serde_json::Value> {
    WebhookAttributes::builder()
        .description("Test webhook")
        .event_type(EVENT_TYPE)
        .url(client.webhook_url())
        .event_type_prefix("CredoAI")
        .event_type_suffix("v1")
        .environment("production")
        .authentication_method(AuthenticationMethod::None)
        .build()
        .into_create_payload()
}

fn update_payload(client: &Client, id: &str) -> serde_json::Result<serde_json::Value> {
    let updated_url = format!(
        "{}?source=update-test",
        client.webhook_url().trim_end_matches('/')
    );

    WebhookAttributes::builder()
        .description("Updated test webhook")
        .url(updated_url)
        .event_type(EVENT_TYPE)
        .event_type_prefix("CredoAI")
        .event_type_suffix("v1")
        .environment("production")
        .authentication_method(AuthenticationMethod::None)
        .build()
        .into_update_payload(id)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1).unwrap_or_else(|| ".env".into());
    let config = ClientConfig::load(&path).await?;

    let mut client = Client::new(config)?;
    client.try_authenticate().await?;
    tracing::info!("Using client: {}", client);

    let listed = client.list_webhooks().await;
    if let Some(count) = listed.body().and_then(|b| b["data"].as_array()).map(Vec::len) {
        tracing::info!(count, "Existing webhooks");
    }

    let created = client.create_webhook(&create_payload(&client)?).await.into_result()?;
    let Some(id) = created_webhook_id(&created).map(String::from) else {
        return Err(format!("create response has no data.id: {}", created).into());
    };

    if client.get_webhook(&id).await.is_failure() {
        tracing::warn!(webhook_id = %id, "Could not fetch the new webhook");
    }

    client
        .update_webhook(&id, &update_payload(&client, &id)?)
        .await
        .into_result()?;

    if !client.delete_webhook(&id).await {
        tracing::error!(webhook_id = %id, "Delete failed; remove the webhook manually");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Webhook walkthrough aborted");
            ExitCode::FAILURE
        }
    }
}
