//! Wire types for the token exchange.

use serde::{Deserialize, Serialize};

use super::AccessToken;

/// Platform-wide token exchange endpoint.
pub const AUTH_EXCHANGE_URL: &str = "https://api.credo.ai/auth/exchange";

/// Body sent to the exchange endpoint.
#[derive(Serialize)]
pub struct TokenExchangeRequest<'a> {
    pub api_token: &'a str,
    pub tenant: &'a str,
}

/// Body returned by the exchange endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TokenExchangeResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

impl TokenExchangeResponse {
    /// The issued token, if one was returned and it is non-empty.
    pub fn into_token(self) -> Option<AccessToken> {
        self.access_token
            .filter(|t| !t.is_empty())
            .map(AccessToken::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let req = TokenExchangeRequest {
            api_token: "key",
            tenant: "acme",
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({"api_token": "key", "tenant": "acme"}));
    }

    #[test]
    fn test_response_with_token() {
        let resp: TokenExchangeResponse =
            serde_json::from_value(json!({"access_token": "tok", "expires_in": 3600})).unwrap();
        assert_eq!(resp.into_token().unwrap().expose(), "tok");
    }

    #[test]
    fn test_response_without_token() {
        let resp: TokenExchangeResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.into_token().is_none());

        let resp: TokenExchangeResponse =
            serde_json::from_value(json!({"access_token": ""})).unwrap();
        assert!(resp.into_token().is_none());
    }
}
