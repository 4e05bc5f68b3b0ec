// Shared transport configuration for building reqwest::Client instances.
//
// The bearer credential is installed as a sensitive default header, so
// every request made through the built client is authenticated.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("fleek-rs/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl TransportConfig {
    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a `reqwest::Client` with additional default headers.
    ///
    /// Used by [`FleekClient`](crate::FleekClient) to inject the
    /// `Authorization: Bearer …` header.
    pub fn build_client_with_headers(&self, headers: HeaderMap) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(Error::Transport)
    }
}

/// Build the `Authorization` header map for a bearer token.
///
/// Empty and whitespace-only tokens are rejected.
pub fn bearer_headers(token: &SecretString) -> Result<HeaderMap, Error> {
    let raw = token.expose_secret().trim();
    if raw.is_empty() {
        return Err(Error::InvalidToken {
            reason: "token must not be empty".into(),
        });
    }

    let mut value =
        HeaderValue::from_str(&format!("Bearer {raw}")).map_err(|e| Error::InvalidToken {
            reason: format!("invalid header value: {e}"),
        })?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}
