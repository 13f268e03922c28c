//! Interactive vault directory prompt

use async_trait::async_trait;
use dialoguer::{theme::ColorfulTheme, Input};
use promptvault_prompts::FolderPicker;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Asks for the vault directory on the terminal
#[derive(Debug, Default)]
pub struct TerminalFolderPicker;

#[async_trait]
impl FolderPicker for TerminalFolderPicker {
    async fn pick_folder(&self) -> Option<PathBuf> {
        let answer = tokio::task::spawn_blocking(ask_for_folder).await;
        match answer {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Folder prompt did not complete: {}", e);
                None
            }
        }
    }
}

fn ask_for_folder() -> Option<PathBuf> {
    if !io::stdin().is_terminal() {
        tracing::warn!("Cannot prompt for a vault directory without a terminal; use `pvault vault set <path>`");
        return None;
    }

    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt("Select vault directory")
        .allow_empty(true)
        .validate_with(|text: &String| -> Result<(), String> {
            let text = text.trim();
            if text.is_empty() || expand_home(text).is_dir() {
                Ok(())
            } else {
                Err(format!("{text} is not a directory"))
            }
        });
    if let Some(home) = dirs::home_dir() {
        input = input.default(home.display().to_string());
    }

    match input.interact_text() {
        Ok(text) if !text.trim().is_empty() => Some(expand_home(text.trim())),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Folder prompt failed: {}", e);
            None
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(text: &str) -> PathBuf {
    match (text.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(text),
    }
}
