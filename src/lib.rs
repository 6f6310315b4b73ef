//! rCareLog library root.
//! Exposes the CLI parser, the high-level run() function and the ingestion,
//! aggregation and export modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::open_dataset;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Load => cli::commands::load::handle(cli),
        cmd => {
            // every other command works on a freshly loaded, read-only dataset
            let (ds, _) = open_dataset(cli)?;
            match cmd {
                Commands::Counts { .. } => cli::commands::counts::handle(cmd, cfg, &ds),
                Commands::Averages { .. } => cli::commands::averages::handle(cmd, cfg, &ds),
                Commands::Heatmap { .. } => cli::commands::heatmap::handle(cmd, cfg, &ds),
                Commands::Pairs { .. } => cli::commands::pairs::handle(cmd, cfg, &ds),
                Commands::Export { .. } => cli::commands::export::handle(cmd, cfg, &ds),
                Commands::Init | Commands::Config { .. } | Commands::Load => Ok(()),
            }
        }
    }
}

/// Diagnostic logs on stderr, only when `--debug` is given.
fn init_tracing(debug: bool) {
    if debug {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let cfg = Config::load()?;
    tracing::debug!(?cfg, "configuration loaded");

    dispatch(&cli, &cfg)
}
