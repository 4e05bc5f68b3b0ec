//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with help text
//! and a stable exit code per failure class.

use miette::Diagnostic;
use thiserror::Error;

use fleek_config::ConfigError;
use fleek_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the Fleek API")]
    #[diagnostic(
        code(fleek::connection_failed),
        help("Check your network connection and the endpoint (--endpoint or profile `endpoint`).")
    )]
    ConnectionFailed {
        #[source]
        source: CoreError,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(fleek::timeout),
        help("Retry, or raise the limit with --timeout <SECONDS>.")
    )]
    Timeout {
        #[source]
        source: CoreError,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(fleek::auth_failed),
        help(
            "Verify your API token.\n\
             Run: fleek config set-token --name {profile}"
        )
    )]
    AuthFailed {
        profile: String,
        #[source]
        source: CoreError,
    },

    #[error("No API token configured for profile '{profile}'")]
    #[diagnostic(
        code(fleek::no_credentials),
        help(
            "Store one with: fleek config set-token\n\
             Or set the FLEEK_API_TOKEN environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("Site '{slug}' not found")]
    #[diagnostic(
        code(fleek::not_found),
        help("Run: fleek sites list --team <TEAM_ID> to see available sites")
    )]
    SiteNotFound { slug: String },

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(fleek::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: fleek config init --name {name}"
        )
    )]
    ProfileNotFound { name: String, available: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API request failed")]
    #[diagnostic(code(fleek::api_error))]
    Api {
        #[source]
        source: CoreError,
    },

    #[error("The API returned a site record that could not be read")]
    #[diagnostic(code(fleek::malformed_record))]
    Malformed {
        #[source]
        source: CoreError,
    },

    // ── Validation & configuration ───────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(fleek::validation))]
    Validation { field: String, reason: String },

    #[error("No team selected")]
    #[diagnostic(
        code(fleek::no_team),
        help("Pass --team <TEAM_ID>, set FLEEK_TEAM, or add `team` to your profile.")
    )]
    NoTeam,

    #[error("Configuration error: {message}")]
    #[diagnostic(code(fleek::config_error))]
    Config { message: String },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::SiteNotFound { .. } | Self::ProfileNotFound { .. } => exit_code::NOT_FOUND,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::NoTeam | Self::Config { .. } => exit_code::USAGE,
            Self::Api { .. } | Self::Malformed { .. } => exit_code::GENERAL,
        }
    }

    /// Attach the active profile name to a core failure.
    pub fn from_core(err: CoreError, profile: &str) -> Self {
        if err.is_auth_failure() {
            return Self::AuthFailed {
                profile: profile.to_owned(),
                source: err,
            };
        }
        if err.is_timeout() {
            return Self::Timeout { source: err };
        }
        if err.is_connection_failure() {
            return Self::ConnectionFailed { source: err };
        }

        match err {
            CoreError::SiteNotFound { slug } => Self::SiteNotFound { slug },
            CoreError::Configuration { message } => Self::Config { message },
            CoreError::Mapping(_) => Self::Malformed { source: err },
            CoreError::Transport(_) => Self::Api { source: err },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}
