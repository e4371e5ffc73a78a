mod cli;
mod client;
mod commands;
mod config;
mod constants;
mod directory;
mod error;
mod form;
mod notify;
mod output;
mod registration;
mod render;
mod responses;
mod types;

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use client::DirectoryClient;
use config::Config;
use directory::DirectoryQuery;
use error::Result;
use render::DateFormat;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");

            // Show error chain if verbose flag was passed
            if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
                let mut source = e.source();
                while let Some(cause) = source {
                    eprintln!("Caused by: {cause}");
                    source = cause.source();
                }
            }

            ExitCode::FAILURE
        }
    }
}

/// Diagnostic logs go to stderr; quiet unless `--verbose` or `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "userdir=debug" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<bool> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Set global output format
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "userdir", &mut io::stdout());
            Ok(true)
        }
        Commands::Init => {
            commands::init::run().await?;
            Ok(true)
        }
        Commands::Regions => {
            commands::regions::list();
            Ok(true)
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;
            let client = DirectoryClient::new(config.base_url()?);
            tracing::debug!(base_url = %client.base_url(), "using API");

            match command {
                Commands::Register(args) => Ok(commands::register::run(&client, args).await),
                Commands::Search(args) => {
                    let dates = DateFormat::new(config.locale()?, config.utc);
                    let query = DirectoryQuery::new(&client, dates);
                    Ok(commands::search::run(&query, args).await)
                }
                Commands::Completions { .. } | Commands::Init | Commands::Regions => {
                    // Already handled above
                    Ok(true)
                }
            }
        }
    }
}
