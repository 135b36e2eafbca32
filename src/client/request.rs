//! The single authenticated request primitive every resource call goes through.

use std::time::Instant;

use chrono::Utc;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use super::Client;
use super::error::RequestFailure;
use super::observer::RequestRecord;
use super::outcome::RequestOutcome;

impl Client {
    /// Issue an authenticated request against `{base_url}/{path}`.
    ///
    /// Never returns an error: transport failures and non-2xx statuses are
    /// reported to the observer and come back as [`RequestOutcome::Failed`].
    /// Without a token nothing is sent.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        label: Option<&str>,
    ) -> RequestOutcome {
        let path = path.trim_start_matches('/');

        if self.auth_token.is_none() {
            let failure = RequestFailure::unauthenticated();
            self.observer.request_rejected(&method, path, &failure);
            return RequestOutcome::Failed(failure);
        }

        let url = self.url_for(path);
        let started_at = Utc::now();
        let start = Instant::now();

        let mut request = self.session.apply(self.http.request(method.clone(), &url));
        if let Some(body) = body {
            request = request.json(body);
        }

        let outcome = match request.send().await {
            Ok(response) => normalize(response).await,
            Err(e) => RequestOutcome::Failed(RequestFailure::network(&e)),
        };

        let record = RequestRecord {
            method,
            path: path.to_string(),
            status: outcome.status(),
            duration: start.elapsed(),
            label: label.map(String::from),
            started_at,
        };
        self.observer.request_completed(&record, &outcome);

        outcome
    }

    pub(crate) fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

async fn normalize(response: reqwest::Response) -> RequestOutcome {
    let status = response.status();
    let code = status.as_u16();

    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return RequestOutcome::Failed(RequestFailure::from_status(code, detail.trim()));
    }

    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => return RequestOutcome::Failed(RequestFailure::network(&e)),
    };

    if status == StatusCode::NO_CONTENT || bytes.iter().all(u8::is_ascii_whitespace) {
        return RequestOutcome::Empty { status: code };
    }

    match serde_json::from_slice(&bytes) {
        Ok(body) => RequestOutcome::Body { status: code, body },
        Err(e) => RequestOutcome::Failed(RequestFailure::decode(code, &e)),
    }
}
