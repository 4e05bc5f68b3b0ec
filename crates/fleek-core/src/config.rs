// ── Runtime connection configuration ──
//
// Describes *how* to reach the query API. Carries the credential and
// connection tuning but never touches disk or the environment; the
// embedding application builds a `FleekConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Configuration for one API session.
#[derive(Debug, Clone)]
pub struct FleekConfig {
    /// Bearer token sent with every query.
    pub token: SecretString,
    /// GraphQL endpoint (defaults to [`fleek_api::DEFAULT_ENDPOINT`]).
    pub endpoint: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl FleekConfig {
    /// Config for the production endpoint with a 30s timeout.
    pub fn new(token: SecretString) -> Self {
        Self {
            token,
            endpoint: default_endpoint(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The production endpoint as a parsed URL.
pub fn default_endpoint() -> Url {
    #[allow(clippy::expect_used)]
    Url::parse(fleek_api::DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}
