//! Config subcommand handlers.

use std::fmt::Write;

use secrecy::SecretString;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

const REDACTED: &str = "****";

// ── Helpers ─────────────────────────────────────────────────────────

/// Copy of the config with plaintext tokens masked.
fn redacted(cfg: &Config) -> Config {
    let mut cfg = cfg.clone();
    for profile in cfg.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some(REDACTED.into());
        }
    }
    cfg
}

/// Format config for display, masking sensitive fields.
fn format_config_redacted(cfg: &Config) -> String {
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        let p = &cfg.profiles[name];
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        if let Some(ref endpoint) = p.endpoint {
            let _ = writeln!(out, "endpoint = \"{endpoint}\"");
        }
        if let Some(ref team) = p.team {
            let _ = writeln!(out, "team = \"{team}\"");
        }
        if p.token.is_some() {
            let _ = writeln!(out, "token = \"{REDACTED}\"");
        }
        if let Some(ref env) = p.token_env {
            let _ = writeln!(out, "token_env = \"{env}\"");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
    }

    out.trim_end().to_owned()
}

/// Map an interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: create or update a profile ────────────────────────
        ConfigCommand::Init {
            name,
            team,
            api_endpoint,
            token_env,
        } => {
            if let Some(ref endpoint) = api_endpoint {
                config::parse_endpoint(endpoint)?;
            }

            let mut cfg = config::load_config_file()?;
            let profile = cfg.profiles.entry(name.clone()).or_insert_with(Profile::default);
            if team.is_some() {
                profile.team = team;
            }
            if api_endpoint.is_some() {
                profile.endpoint = api_endpoint;
            }
            if token_env.is_some() {
                profile.token_env = token_env;
            }
            if cfg.default_profile.is_none() || cfg.profiles.len() == 1 {
                cfg.default_profile = Some(name.clone());
            }

            config::save_config(&cfg)?;
            let path = config::config_path();
            if !global.quiet {
                eprintln!("✓ Profile '{name}' written to {}", path.display());
                eprintln!("  Store a token with: fleek config set-token --name {name}");
            }
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let format = config::output_format(global, &cfg);
            let cfg = redacted(&cfg);
            let out = output::render_single(&format, &cfg, format_config_redacted, |_| {
                config::config_path().display().to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            let default = config::active_profile_name(global, &cfg);
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: fleek config init");
            } else {
                let mut names: Vec<_> = cfg.profiles.keys().collect();
                names.sort();
                for name in names {
                    let marker = if *name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ──────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_file()?;
            if !cfg.profiles.contains_key(&name) {
                return Err(config::profile_not_found(&name, &cfg));
            }

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("✓ Default profile set to '{name}'");
            }
            Ok(())
        }

        // ── SetToken: store in keyring ──────────────────────────────
        ConfigCommand::SetToken { name } => {
            let cfg = config::load_config()?;
            let name = name.unwrap_or_else(|| config::active_profile_name(global, &cfg));

            let token = rpassword::prompt_password("API token: ").map_err(prompt_err)?;
            let token = token.trim().to_owned();
            if token.is_empty() {
                return Err(CliError::Validation {
                    field: "token".into(),
                    reason: "API token cannot be empty".into(),
                });
            }

            config::store_token(&name, &SecretString::from(token))?;
            if !global.quiet {
                eprintln!("✓ Token for profile '{name}' stored in system keyring");
            }
            Ok(())
        }
    }
}
