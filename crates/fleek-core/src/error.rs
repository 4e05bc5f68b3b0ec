// ── Core error types ──
//
// User-facing errors from fleek-core. Transport, HTTP status, envelope,
// and GraphQL failures all surface as a single `Transport` class; the
// original `fleek_api::Error` stays reachable through `source()`.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    // ── Remote errors ────────────────────────────────────────────────
    #[error("Transport error: {0}")]
    Transport(#[source] fleek_api::Error),

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Malformed site record: {0}")]
    Mapping(#[from] MappingError),

    #[error("Site not found: {slug}")]
    SiteNotFound { slug: String },
}

/// A wire record broke an assumption the domain model relies on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("team id must be a string, got {found}")]
    TeamIdNotString { found: &'static str },

    #[error("{field} must be a string or an integer, got {found}")]
    InvalidIdentifier {
        field: &'static str,
        found: &'static str,
    },
}

impl CoreError {
    /// Returns `true` if the endpoint rejected the credential.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_auth_error())
    }

    /// Returns `true` if the request ran past its timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(fleek_api::Error::Timeout { .. }) => true,
            Self::Transport(fleek_api::Error::Transport(e)) => e.is_timeout(),
            _ => false,
        }
    }

    /// Returns `true` if the endpoint could not be reached at all.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, Self::Transport(fleek_api::Error::Transport(e)) if e.is_connect())
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<fleek_api::Error> for CoreError {
    fn from(err: fleek_api::Error) -> Self {
        match err {
            fleek_api::Error::InvalidToken { reason } => CoreError::Configuration {
                message: format!("invalid API token: {reason}"),
            },
            fleek_api::Error::InvalidUrl(e) => CoreError::Configuration {
                message: format!("invalid endpoint URL: {e}"),
            },
            other => CoreError::Transport(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn invalid_token_is_configuration_error() {
        let err = CoreError::from(fleek_api::Error::InvalidToken {
            reason: "token must not be empty".into(),
        });
        assert!(matches!(err, CoreError::Configuration { .. }));
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn remote_failures_collapse_into_transport() {
        let errors = [
            fleek_api::Error::Http {
                status: 500,
                body: String::new(),
            },
            fleek_api::Error::GraphQl {
                messages: vec!["boom".into()],
            },
            fleek_api::Error::Deserialization {
                message: "eof".into(),
                body: String::new(),
            },
            fleek_api::Error::Timeout {
                timeout: Some(Duration::from_secs(30)),
            },
        ];
        for err in errors {
            assert!(matches!(CoreError::from(err), CoreError::Transport(_)));
        }
    }

    #[test]
    fn auth_and_timeout_predicates() {
        let auth = CoreError::from(fleek_api::Error::Authentication {
            status: 401,
            message: "nope".into(),
        });
        assert!(auth.is_auth_failure());
        assert!(!auth.is_timeout());

        let timeout = CoreError::from(fleek_api::Error::Timeout {
            timeout: Some(Duration::from_secs(5)),
        });
        assert!(timeout.is_timeout());
    }

    #[test]
    fn mapping_error_message() {
        let err = CoreError::from(MappingError::TeamIdNotString { found: "number" });
        assert_eq!(
            err.to_string(),
            "Malformed site record: team id must be a string, got number"
        );
    }
}
