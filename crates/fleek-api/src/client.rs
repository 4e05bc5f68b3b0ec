// GraphQL HTTP client for the Fleek query API.
//
// Endpoint: https://api.fleek.co/graphql
// Auth: `Authorization: Bearer <token>` default header

use std::time::Duration;

use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::graphql::{GraphQlError, Query, Request, Response};
use crate::transport::{TransportConfig, bearer_headers};

/// The fixed production endpoint of the Fleek query API.
pub const DEFAULT_ENDPOINT: &str = "https://api.fleek.co/graphql";

// ── Client ───────────────────────────────────────────────────────────

/// Async session for the Fleek GraphQL API.
///
/// Holds a `reqwest::Client` with the bearer token baked into its default
/// headers, bound to one endpoint. Cloning is cheap and clones share the
/// underlying connection pool, so a single session can serve concurrent
/// queries.
#[derive(Debug, Clone)]
pub struct FleekClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl FleekClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a session against [`DEFAULT_ENDPOINT`].
    pub fn new(token: &SecretString, transport: &TransportConfig) -> Result<Self, Error> {
        Self::with_endpoint(DEFAULT_ENDPOINT, token, transport)
    }

    /// Build a session against an arbitrary GraphQL endpoint.
    ///
    /// Fails with [`Error::InvalidToken`] if the token is empty.
    pub fn with_endpoint(
        endpoint: &str,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let headers = bearer_headers(token)?;
        let endpoint = Url::parse(endpoint)?;
        let http = transport.build_client_with_headers(headers)?;

        Ok(Self {
            http,
            endpoint,
            timeout: Some(transport.timeout),
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(endpoint: &str, http: reqwest::Client) -> Result<Self, Error> {
        let endpoint = Url::parse(endpoint)?;
        Ok(Self {
            http,
            endpoint,
            timeout: None,
        })
    }

    /// The GraphQL endpoint this session is bound to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // ── Execution ────────────────────────────────────────────────────

    /// Run one query and decode its `data` payload into `T`.
    ///
    /// A non-success status, an undecodable envelope, a non-empty `errors`
    /// array, or a missing `data` object all fail the call.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &Query,
        variables: &Value,
    ) -> Result<T, Error> {
        let operation = query.operation_name;
        debug!(operation, "POST {}", self.endpoint);

        let body = Request {
            operation_name: operation,
            query: query.document,
            variables,
        };

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let raw = resp.text().await.map_err(|e| self.transport_error(e))?;
        trace!(operation, status = status.as_u16(), body = %raw, "response received");

        if !status.is_success() {
            return Err(status_error(status, raw));
        }

        let envelope: Response<Value> =
            serde_json::from_str(&raw).map_err(|e| deserialization_error(&e, raw.clone()))?;

        if let Some(errors) = envelope.errors.filter(|errs| !errs.is_empty()) {
            debug!(operation, count = errors.len(), "query returned errors");
            return Err(Error::GraphQl {
                messages: errors.iter().map(GraphQlError::describe).collect(),
            });
        }

        let data = envelope.data.ok_or_else(|| Error::Deserialization {
            message: format!("response to {operation} carried no data"),
            body: raw.clone(),
        })?;

        serde_json::from_value(data).map_err(|e| deserialization_error(&e, raw))
    }

    // ── Error mapping ────────────────────────────────────────────────

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout: self.timeout,
            }
        } else {
            Error::Transport(err)
        }
    }
}

fn status_error(status: reqwest::StatusCode, body: String) -> Error {
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Error::Authentication {
            status: status.as_u16(),
            message: if body.is_empty() {
                status.to_string()
            } else {
                body
            },
        };
    }
    Error::Http {
        status: status.as_u16(),
        body,
    }
}

fn deserialization_error(err: &serde_json::Error, body: String) -> Error {
    let preview: String = body.chars().take(200).collect();
    Error::Deserialization {
        message: format!("{err} (body preview: {preview:?})"),
        body,
    }
}
