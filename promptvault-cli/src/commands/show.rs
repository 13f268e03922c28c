//! `pvault show` - render one prompt

use crate::cli::{render_markup, MarkupArg, OutputFormat};
use crate::context::CliContext;
use crate::display::to_structured;
use crate::error::CliResult;
use colored::Colorize;
use promptvault_prompts::VaultError;
use promptvault_config::MarkupStyle;
use promptvault_templating::references;
use serde_json::json;

pub async fn run(
    folder: &str,
    prompt: &str,
    markup: Option<MarkupArg>,
    refs: bool,
    context: &CliContext,
) -> CliResult<()> {
    if context.vault.vault_path().await?.is_none() {
        return Err(VaultError::SetupRequired.into());
    }

    let style = markup
        .map(MarkupStyle::from)
        .unwrap_or(context.config.render.markup);
    let markup = render_markup(style);
    let rendered = context.vault.render_prompt(folder, prompt, markup).await?;

    let file = context
        .vault
        .prompt(folder, prompt)
        .await?
        .ok_or_else(|| VaultError::PromptNotFound {
            folder: folder.to_string(),
            prompt: prompt.to_string(),
        })?;
    let referenced = references(&file.content_body);

    match context.format {
        OutputFormat::Table => {
            println!("{rendered}");
            if refs {
                println!();
                println!("{} {}", "Variables:".bold(), list_or_none(&referenced.variables));
                println!("{} {}", "Partials:".bold(), list_or_none(&referenced.partials));
            }
        }
        format => {
            let mut value = json!({
                "folder": folder,
                "prompt": prompt,
                "title": file.title(),
                "rendered": rendered,
            });
            if refs {
                value["references"] = json!({
                    "variables": referenced.variables,
                    "partials": referenced.partials,
                });
            }
            println!("{}", to_structured(&value, format)?);
        }
    }
    Ok(())
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}
