//! CLI configuration -- thin wrapper around `fleek_config`.
//!
//! Adds the resolution steps that respect `GlobalOpts` flag overrides
//! (--token, --endpoint, --timeout, --output).

use std::time::Duration;

use clap::ValueEnum;
use secrecy::SecretString;

use fleek_core::FleekConfig;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use fleek_config::{
    Config, Profile, config_path, load_config, load_config_file, parse_endpoint, save_config,
    store_token,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Output format: flag > env > `defaults.output` > table.
pub fn output_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global.output.clone().unwrap_or_else(|| {
        OutputFormat::from_str(&config.defaults.output, true).unwrap_or(OutputFormat::Table)
    })
}

/// Team for `sites list`: flag > env > profile.
pub fn resolve_team(flag: Option<String>, config: &Config, profile_name: &str) -> Option<String> {
    flag.or_else(|| {
        config
            .profiles
            .get(profile_name)
            .and_then(|p| p.team.clone())
    })
    .filter(|t| !t.trim().is_empty())
}

/// Build a `FleekConfig` from the config file, profile, and CLI overrides.
pub fn build_fleek_config(
    global: &GlobalOpts,
    config: &Config,
    profile_name: &str,
) -> Result<FleekConfig, CliError> {
    let profile = config.profiles.get(profile_name);

    // An explicitly requested profile must exist unless a token flag stands in.
    if profile.is_none() && global.profile.is_some() && global.token.is_none() {
        return Err(profile_not_found(profile_name, config));
    }

    // 1. Token (flag > env > profile credential chain)
    let token = match (&global.token, profile) {
        (Some(token), _) => SecretString::from(token.clone()),
        (None, Some(profile)) => fleek_config::resolve_token(profile, profile_name)?,
        (None, None) => {
            return Err(CliError::NoCredentials {
                profile: profile_name.to_owned(),
            });
        }
    };

    // 2. Timeout (flag > env > profile > defaults)
    let timeout_secs = global
        .timeout
        .or_else(|| profile.and_then(|p| p.timeout))
        .unwrap_or(config.defaults.timeout);
    let mut fleek = FleekConfig::new(token).with_timeout(Duration::from_secs(timeout_secs));

    // 3. Endpoint (flag > env > profile > built-in default)
    let endpoint = global
        .endpoint
        .as_deref()
        .or_else(|| profile.and_then(|p| p.endpoint.as_deref()));
    if let Some(endpoint) = endpoint {
        fleek = fleek.with_endpoint(parse_endpoint(endpoint)?);
    }

    Ok(fleek)
}

pub fn profile_not_found(name: &str, config: &Config) -> CliError {
    let mut available: Vec<_> = config.profiles.keys().cloned().collect();
    available.sort();
    CliError::ProfileNotFound {
        name: name.to_owned(),
        available: if available.is_empty() {
            "(none)".into()
        } else {
            available.join(", ")
        },
    }
}
