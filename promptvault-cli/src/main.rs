//! pvault - command-line front end for a PromptVault prompt library
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error
//! - 2: Warning (unknown folder or prompt)
//! - 3: No vault configured; run `pvault vault choose` or `pvault vault set`

use std::process;

mod cli;
mod commands;
mod context;
mod display;
mod error;
mod exit_codes;
mod logging;
mod picker;

use clap::Parser;
use cli::Cli;
use context::CliContext;
use error::handle_cli_result;
use promptvault_config::AppConfig;

/// Load configuration for CLI usage with graceful error handling
///
/// An unreadable config file should not make the CLI unusable, so errors
/// fall back to the defaults with a warning.
fn load_cli_configuration() -> AppConfig {
    match promptvault_config::load_configuration() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Configuration loading failed: {}", e);
            eprintln!("Continuing with default configuration...");
            AppConfig::default()
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = load_cli_configuration();

    logging::configure_logging(cli.verbose, cli.debug, cli.quiet, &config.log.level);
    tracing::debug!("Loaded configuration: {}", promptvault_common::Pretty(&config));

    let exit_code = match CliContext::new(&cli, config) {
        Ok(context) => handle_cli_result(commands::run(cli.command, &context).await),
        Err(e) => handle_cli_result::<()>(Err(e)),
    };
    process::exit(exit_code);
}
