//! Command dispatch: bridges CLI args -> core calls -> output formatting.

pub mod config_cmd;
pub mod sites;

use fleek_core::Fleek;

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::config::Config;
use crate::error::CliError;

/// Per-invocation settings resolved once from flags and the config file.
pub struct Ctx<'a> {
    pub global: &'a GlobalOpts,
    pub config: Config,
    pub profile: String,
    pub format: OutputFormat,
    pub color: bool,
}

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, fleek: &Fleek, ctx: &Ctx<'_>) -> Result<(), CliError> {
    match cmd {
        Command::Sites(args) => sites::handle(fleek, args, ctx).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
