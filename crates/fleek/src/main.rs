mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fleek_core::Fleek;

use crate::cli::{Cli, Command};
use crate::commands::Ctx;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose, cli.global.quiet);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8, quiet: bool) {
    let filter = match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need an API client
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "fleek", &mut std::io::stdout());
            Ok(())
        }

        // All other commands talk to the API
        cmd => {
            let cfg = config::load_config()?;
            let format = config::output_format(&cli.global, &cfg);
            let profile = config::active_profile_name(&cli.global, &cfg);
            let fleek_config = config::build_fleek_config(&cli.global, &cfg, &profile)?;
            let fleek = Fleek::new(&fleek_config).map_err(|e| CliError::from_core(e, &profile))?;

            tracing::debug!(
                command = ?cmd,
                profile = %profile,
                endpoint = %fleek_config.endpoint,
                "dispatching command"
            );
            let ctx = Ctx {
                global: &cli.global,
                config: cfg,
                profile,
                format,
                color: output::should_color(&cli.global.color),
            };
            commands::dispatch(cmd, &fleek, &ctx).await
        }
    }
}
