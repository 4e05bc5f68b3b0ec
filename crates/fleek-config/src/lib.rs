//! Shared configuration for Fleek tools.
//!
//! TOML profiles, credential resolution (env var + keyring + plaintext),
//! and translation to `fleek_core::FleekConfig`. The library crates never
//! read configuration themselves; embedding applications go through here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use fleek_core::FleekConfig;

/// Service name used for keyring entries.
const KEYRING_SERVICE: &str = "fleek";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no API token configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named API profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named API profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// GraphQL endpoint override (defaults to the production API).
    pub endpoint: Option<String>,

    /// Team used when `sites list` is given no `--team`.
    pub team: Option<String>,

    /// API token (plaintext; prefer keyring or env var).
    pub token: Option<String>,

    /// Environment variable name containing the API token.
    pub token_env: Option<String>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("co", "fleek", "fleek").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("fleek");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Defaults merged with the TOML file. A missing file is not an error;
/// a file that fails to parse is.
fn file_figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
}

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load Config from `path`, with `FLEEK_` environment overrides on top.
///
/// Nested keys use a double underscore, e.g. `FLEEK_DEFAULTS__TIMEOUT=10`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = file_figment(path)
        .merge(Env::prefixed("FLEEK_").split("__"))
        .extract()?;
    Ok(config)
}

/// Load only what is written in the canonical file, for read-modify-write.
pub fn load_config_file() -> Result<Config, ConfigError> {
    load_config_file_from(&config_path())
}

/// Load Config from `path` without environment overrides, so that saving
/// it back never persists a `FLEEK_*` variable.
pub fn load_config_file_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = file_figment(path).extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

fn keyring_entry(profile_name: &str) -> Result<keyring::Entry, keyring::Error> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/token"))
}

/// Resolve the API token from the credential chain (no CLI flag step).
///
/// Order: the env var named by `token_env`, the system keyring, then the
/// plaintext `token` field.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            debug!(profile = profile_name, env = env_name.as_str(), "token from environment");
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring_entry(profile_name) {
        if let Ok(secret) = entry.get_password() {
            debug!(profile = profile_name, "token from keyring");
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a token in the system keyring for `profile_name`.
pub fn store_token(profile_name: &str, token: &SecretString) -> Result<(), ConfigError> {
    keyring_entry(profile_name)?.set_password(token.expose_secret())?;
    Ok(())
}

/// Parse an endpoint string into a URL, with a field-tagged error.
pub fn parse_endpoint(raw: &str) -> Result<url::Url, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Validation {
        field: "endpoint".into(),
        reason: format!("invalid URL: {raw}"),
    })
}

/// Build a `FleekConfig` from a profile, without CLI flag overrides.
pub fn profile_to_fleek_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<FleekConfig, ConfigError> {
    let token = resolve_token(profile, profile_name)?;
    let mut config = FleekConfig::new(token).with_timeout(Duration::from_secs(
        profile.timeout.unwrap_or(defaults.timeout),
    ));

    if let Some(ref endpoint) = profile.endpoint {
        config = config.with_endpoint(parse_endpoint(endpoint)?);
    }

    Ok(config)
}
