//! `pvault index`, `pvault folders` and `pvault prompts`

use crate::commands::vault::report_index;
use crate::context::CliContext;
use crate::display::{print_rows, FolderRow, PromptRow};
use crate::error::CliResult;
use promptvault_prompts::VaultError;
use std::path::PathBuf;

/// Fails with the setup-required error when no vault is configured
async fn require_vault(context: &CliContext) -> CliResult<PathBuf> {
    Ok(context
        .vault
        .vault_path()
        .await?
        .ok_or(VaultError::SetupRequired)?)
}

pub async fn run_index(context: &CliContext) -> CliResult<()> {
    let vault = require_vault(context).await?;
    let folders = context.vault.reindex().await?;
    report_index(&vault, &folders, context)
}

pub async fn run_folders(context: &CliContext) -> CliResult<()> {
    require_vault(context).await?;
    let folders = context.vault.indexed_folders().await?;
    let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();

    print_rows(
        &rows,
        context.format,
        "No folders indexed",
        vec!["Slug", "Name", "Prompts", "Path"],
        |row| {
            vec![
                row.slug.clone(),
                row.name.clone(),
                row.prompts.to_string(),
                row.path.clone(),
            ]
        },
    )
}

pub async fn run_prompts(folder: &str, context: &CliContext) -> CliResult<()> {
    require_vault(context).await?;
    let prompts = context
        .vault
        .prompts_for_folder(folder)
        .await?
        .ok_or_else(|| VaultError::FolderNotFound(folder.to_string()))?;
    let rows: Vec<PromptRow> = prompts.iter().map(PromptRow::from).collect();

    print_rows(
        &rows,
        context.format,
        "No prompts in this folder",
        vec!["Slug", "Title", "File", "Status"],
        |row| {
            let status = match &row.frontmatter_error {
                Some(_) => "invalid frontmatter",
                None => "ok",
            };
            vec![
                row.slug.clone(),
                row.title.clone(),
                row.file.clone(),
                status.to_string(),
            ]
        },
    )
}
