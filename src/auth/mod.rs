//! Token-exchange authentication for the Credo AI API.
//!
//! The long-lived API key is traded once for a short-lived bearer token at a
//! platform-wide endpoint that sits outside any tenant scope.

mod credential;
mod exchange;

pub use credential::AccessToken;
pub use exchange::{AUTH_EXCHANGE_URL, TokenExchangeRequest, TokenExchangeResponse};
