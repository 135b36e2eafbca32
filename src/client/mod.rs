//! Authenticated client for the Credo AI webhook API.

mod error;
mod observer;
mod outcome;
mod request;
mod session;
mod webhooks;

pub use error::{FailureKind, RequestFailure};
pub use observer::{AuthEvent, NoopObserver, RequestObserver, RequestRecord, TracingObserver};
pub use outcome::RequestOutcome;
pub use session::{JSON_API_MEDIA_TYPE, Session};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::{AUTH_EXCHANGE_URL, AccessToken, TokenExchangeRequest, TokenExchangeResponse};
use crate::config::ClientConfig;
use crate::{Error, Result};

/// Path segment between the server and the tenant.
const API_PREFIX: &str = "api/v2";

/// Client bound to one tenant.
///
/// Construction performs no I/O. Call [`authenticate`](Self::authenticate)
/// before any resource operation; until then every request is refused locally.
pub struct Client {
    config: ClientConfig,
    base_url: String,
    auth_url: String,
    http: reqwest::Client,
    session: Session,
    auth_token: Option<AccessToken>,
    observer: Arc<dyn RequestObserver>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        ClientBuilder::new(config).build()
    }

    pub fn builder(config: ClientConfig) -> ClientBuilder {
        ClientBuilder::new(config)
    }

    fn assemble(
        config: ClientConfig,
        http: reqwest::Client,
        auth_url: String,
        observer: Arc<dyn RequestObserver>,
    ) -> Self {
        let server = config.server().trim_end_matches('/');
        let base_url = format!("{}/{}/{}", server, API_PREFIX, config.tenant());

        Self {
            config,
            base_url,
            auth_url,
            http,
            session: Session::new(),
            auth_token: None,
            observer,
        }
    }

    /// Exchange the API key for a bearer token.
    ///
    /// Returns `false` on any failure; details go to the observer. A failed
    /// attempt leaves any previously stored token in place.
    pub async fn authenticate(&mut self) -> bool {
        self.try_authenticate().await.is_ok()
    }

    /// Like [`authenticate`](Self::authenticate), but returns the failure.
    pub async fn try_authenticate(&mut self) -> Result<()> {
        let body = TokenExchangeRequest {
            api_token: self.config.api_key(),
            tenant: self.config.tenant(),
        };
        let request = self.session.apply(self.http.post(&self.auth_url)).json(&body);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.auth_failed(e.to_string())),
        };

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(self.auth_failed(format!("HTTP {}: {}", status.as_u16(), text.trim())));
        }

        let parsed: TokenExchangeResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => return Err(self.auth_failed(e.to_string())),
        };

        let Some(token) = parsed.into_token() else {
            self.observer.authenticated(&AuthEvent::MissingToken {
                status: status.as_u16(),
            });
            return Err(Error::auth("authentication succeeded but no token was returned"));
        };

        if let Err(e) = self.session.set_bearer(&token) {
            self.observer.authenticated(&AuthEvent::Failed {
                detail: e.to_string(),
            });
            return Err(e);
        }
        self.auth_token = Some(token);
        self.observer.authenticated(&AuthEvent::Succeeded {
            tenant: self.config.tenant().to_string(),
        });
        Ok(())
    }

    fn auth_failed(&self, detail: String) -> Error {
        self.observer.authenticated(&AuthEvent::Failed {
            detail: detail.clone(),
        });
        Error::auth(detail)
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{server}/api/v2/{tenant}`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Default delivery target for created webhooks.
    pub fn webhook_url(&self) -> &str {
        self.config.webhook_url()
    }

    /// Diagnostic summary; never includes the API key or token.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Client(tenant='{}', server='{}')",
            self.config.tenant(),
            self.config.server().trim_end_matches('/')
        )
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("base_url", &self.base_url)
            .field("auth_url", &self.auth_url)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    config: ClientConfig,
    auth_url: Option<String>,
    timeout: Option<Duration>,
    observer: Option<Arc<dyn RequestObserver>>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            auth_url: None,
            timeout: None,
            observer: None,
            http: None,
        }
    }

    /// Override the token exchange endpoint.
    pub fn auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = Some(url.into());
        self
    }

    /// Per-request timeout. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn observer(mut self, observer: impl RequestObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn shared_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Disable diagnostics entirely.
    pub fn quiet(self) -> Self {
        self.observer(NoopObserver)
    }

    /// Use a pre-built HTTP client; `timeout` is then ignored.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<Client> {
        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(Error::Network)?
            }
        };

        Ok(Client::assemble(
            self.config,
            http,
            self.auth_url.unwrap_or_else(|| AUTH_EXCHANGE_URL.to_string()),
            self.observer.unwrap_or_else(|| Arc::new(TracingObserver)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new("secret-key", "acme", "https://example.com/hook")
            .with_server("https://api.example.com//")
    }

    #[test]
    fn test_base_url_strips_trailing_separator() {
        let client = Client::new(config()).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com/api/v2/acme");
        assert_eq!(
            client.url_for("/webhooks/wh_1"),
            "https://api.example.com/api/v2/acme/webhooks/wh_1"
        );
    }

    #[test]
    fn test_new_client_is_unauthenticated() {
        let client = Client::new(config()).unwrap();
        assert!(!client.is_authenticated());
        assert!(!client.session().is_authorized());
        assert_eq!(client.auth_url(), AUTH_EXCHANGE_URL);
    }

    #[test]
    fn test_summary_hides_secrets() {
        let client = Client::new(config()).unwrap();
        assert_eq!(
            client.summary(),
            "Client(tenant='acme', server='https://api.example.com')"
        );
        assert!(!format!("{:?}", client).contains("secret-key"));
    }

    #[test]
    fn test_builder_overrides() {
        let client = Client::builder(config())
            .auth_url("http://localhost:9999/auth/exchange")
            .timeout(Duration::from_secs(5))
            .quiet()
            .build()
            .unwrap();
        assert_eq!(client.auth_url(), "http://localhost:9999/auth/exchange");
        assert_eq!(client.webhook_url(), "https://example.com/hook");
    }
}
