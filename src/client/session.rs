//! Persistent per-client request headers.

use reqwest::RequestBuilder;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::auth::AccessToken;
use crate::{Error, Result};

/// JSON:API media type used for both `Content-Type` and `Accept`.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Headers attached to every request a client issues.
///
/// Starts with the content-negotiation headers; gains `Authorization` once a
/// token has been exchanged.
#[derive(Debug, Clone)]
pub struct Session {
    headers: HeaderMap,
}

impl Session {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
        Self { headers }
    }

    /// Replace any previous `Authorization` header with `Bearer <token>`.
    pub fn set_bearer(&mut self, token: &AccessToken) -> Result<()> {
        let mut value = HeaderValue::from_str(&token.bearer())
            .map_err(|_| Error::auth("access token contains invalid header characters"))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    pub fn clear_bearer(&mut self) {
        self.headers.remove(AUTHORIZATION);
    }

    pub fn is_authorized(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Attach the session headers to an outgoing request.
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request.headers(self.headers.clone())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
