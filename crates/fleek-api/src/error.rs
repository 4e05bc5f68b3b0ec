use std::time::Duration;

use thiserror::Error;

/// Top-level error type for the `fleek-api` crate.
///
/// Covers every failure mode of a single GraphQL round-trip: credential
/// setup, transport, HTTP status, envelope decoding, and errors reported
/// by the remote query engine. `fleek-core` collapses these into its
/// public error classes.
#[derive(Debug, Error)]
pub enum Error {
    // ── Credentials ─────────────────────────────────────────────────
    /// The bearer token is empty or cannot be sent as a header value.
    #[error("Invalid API token: {reason}")]
    InvalidToken { reason: String },

    /// The endpoint rejected the token (HTTP 401/403).
    #[error("Authentication failed (HTTP {status}): {message}")]
    Authentication { status: u16, message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request ran past the session timeout. `None` when the caller
    /// supplied its own `reqwest::Client`.
    #[error("Request timed out{}", elapsed_suffix(*timeout))]
    Timeout { timeout: Option<Duration> },

    /// Non-success HTTP status other than an auth rejection.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    // ── GraphQL ─────────────────────────────────────────────────────
    /// The response envelope carried one or more GraphQL errors.
    #[error("GraphQL error: {}", messages.join("; "))]
    GraphQl { messages: Vec<String> },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the token was rejected or unusable.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken { .. } | Self::Authentication { .. }
        )
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            Self::Http { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

fn elapsed_suffix(timeout: Option<Duration>) -> String {
    timeout.map_or_else(String::new, |t| format!(" after {t:?}"))
}
