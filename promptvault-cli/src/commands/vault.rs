//! `pvault vault` - choose, set and show the vault directory

use crate::cli::{OutputFormat, VaultSubcommand};
use crate::context::CliContext;
use crate::display::to_structured;
use crate::error::{CliError, CliResult};
use crate::exit_codes::EXIT_SETUP_REQUIRED;
use crate::picker::TerminalFolderPicker;
use promptvault_prompts::VaultError;
use promptvault_store::IndexedFolder;
use serde_json::json;
use std::path::Path;

pub async fn run(subcommand: VaultSubcommand, context: &CliContext) -> CliResult<()> {
    match subcommand {
        VaultSubcommand::Choose => {
            let chosen = context
                .vault
                .choose_vault_path(&TerminalFolderPicker)
                .await
                .ok_or_else(|| {
                    CliError::new("No vault directory was selected", EXIT_SETUP_REQUIRED)
                })?;
            set(&chosen, context).await
        }
        VaultSubcommand::Set { path } => set(&path, context).await,
        VaultSubcommand::Show => show(context).await,
    }
}

async fn set(path: &Path, context: &CliContext) -> CliResult<()> {
    let folders = context.vault.set_vault_path(path).await?;
    let vault = context.vault.vault_path().await?.unwrap_or_default();
    report_index(&vault, &folders, context)
}

async fn show(context: &CliContext) -> CliResult<()> {
    let vault = context
        .vault
        .vault_path()
        .await?
        .ok_or(VaultError::SetupRequired)?;

    match context.format {
        OutputFormat::Table => println!("{}", vault.display()),
        format => {
            let value = json!({ "vaultDirectory": vault.display().to_string() });
            println!("{}", to_structured(&value, format)?);
        }
    }
    Ok(())
}

/// Summarize an index run
pub fn report_index(vault: &Path, folders: &[IndexedFolder], context: &CliContext) -> CliResult<()> {
    let prompts: usize = folders.iter().map(|f| f.prompts.len()).sum();
    match context.format {
        OutputFormat::Table => context.status(format!(
            "Indexed {} folders and {} prompts in {}",
            folders.len(),
            prompts,
            vault.display()
        )),
        format => println!(
            "{}",
            to_structured(
                &json!({
                    "vaultDirectory": vault.display().to_string(),
                    "folders": folders.len(),
                    "prompts": prompts,
                }),
                format
            )?
        ),
    }
    Ok(())
}
