//! CLI Context
//!
//! Shared context holding the vault service and the global flags, built once
//! in `main` and passed to every command.

use crate::cli::{Cli, OutputFormat};
use crate::error::CliResult;
use promptvault_config::AppConfig;
use promptvault_prompts::PromptVault;
use promptvault_store::JsonFileStore;
use std::sync::Arc;

/// Shared CLI context
pub struct CliContext {
    /// The vault service over the configured store file
    pub vault: PromptVault,

    /// Loaded configuration
    pub config: AppConfig,

    /// Output format
    pub format: OutputFormat,

    /// Suppress output except errors
    pub quiet: bool,
}

impl CliContext {
    /// Open the store named by `config` and build the vault service
    pub fn new(cli: &Cli, config: AppConfig) -> CliResult<Self> {
        let store_path = config.store_path()?;
        tracing::debug!("Using store file {}", store_path.display());

        let vault = PromptVault::new(Arc::new(JsonFileStore::new(store_path)))
            .with_failure_policy(config.index.on_failure);

        Ok(Self {
            vault,
            format: cli.format.unwrap_or_default(),
            quiet: cli.quiet,
            config,
        })
    }

    /// Print a status line unless `--quiet` was given
    pub fn status(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", message.as_ref());
        }
    }
}
