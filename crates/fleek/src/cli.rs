//! Clap derive structures for the `fleek` CLI.
//!
//! Defines the command tree, global flags, and shared types. Kept free of
//! crate-internal imports so `build.rs` can include it for man pages.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fleek -- query Fleek sites from the command line
#[derive(Debug, Parser)]
#[command(
    name = "fleek",
    version,
    about = "Query Fleek hosted sites from the command line",
    long_about = "A read-only CLI for the Fleek GraphQL API.\n\n\
        Lists the sites of a team and shows site details by slug.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "FLEEK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API token (overrides profile)
    #[arg(long, env = "FLEEK_API_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// GraphQL endpoint (overrides profile)
    #[arg(long, env = "FLEEK_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Output format (defaults to the config file's `defaults.output`, then table)
    #[arg(long, short = 'o', env = "FLEEK_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "FLEEK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect hosted sites
    #[command(alias = "s")]
    Sites(SitesArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Sites ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SitesArgs {
    #[command(subcommand)]
    pub command: SitesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SitesCommand {
    /// List the sites of a team (first 100)
    #[command(alias = "ls")]
    List {
        /// Team ID (defaults to the profile's team)
        #[arg(long, short = 't', env = "FLEEK_TEAM")]
        team: Option<String>,
    },

    /// Show one site by slug
    Get {
        /// Site slug
        slug: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or update a profile
    Init {
        /// Profile name
        #[arg(long, default_value = "default")]
        name: String,

        /// Default team ID for `sites list`
        #[arg(long)]
        team: Option<String>,

        /// GraphQL endpoint override
        #[arg(long = "api-endpoint")]
        api_endpoint: Option<String>,

        /// Environment variable holding the API token
        #[arg(long)]
        token_env: Option<String>,
    },

    /// Display current configuration (secrets masked)
    Show,

    /// Print the config file path
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store an API token in the system keyring
    SetToken {
        /// Profile the token belongs to (defaults to the active profile)
        #[arg(long)]
        name: Option<String>,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
