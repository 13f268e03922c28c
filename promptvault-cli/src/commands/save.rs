//! `pvault save` - write a prompt file and re-index

use crate::context::CliContext;
use crate::error::CliResult;
use anyhow::{Context, Result};
use promptvault_store::Frontmatter;
use std::io::Read;
use std::path::Path;

pub async fn run(
    path: &Path,
    frontmatter: Option<&Path>,
    body: Option<&Path>,
    context: &CliContext,
) -> CliResult<()> {
    let frontmatter = match frontmatter {
        Some(file) => Some(read_frontmatter(file).await?),
        None => None,
    };
    let body = match body {
        Some(file) => read_file(file).await?,
        None => read_stdin().await?,
    };

    context
        .vault
        .save_prompt(path, frontmatter.as_ref(), &body)
        .await?;
    context.status(format!("Saved {}", path.display()));
    Ok(())
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

async fn read_frontmatter(path: &Path) -> Result<Frontmatter> {
    let text = read_file(path).await?;
    parse_frontmatter_file(&text)
        .with_context(|| format!("{} is not a YAML mapping", path.display()))
}

/// Decode a header file; an empty file is an empty mapping
fn parse_frontmatter_file(text: &str) -> Result<Frontmatter, serde_yaml_ng::Error> {
    if text.trim().is_empty() {
        return Ok(Frontmatter::new());
    }
    serde_yaml_ng::from_str(text)
}

async fn read_stdin() -> Result<String> {
    let body = tokio::task::spawn_blocking(|| {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body).map(|_| body)
    })
    .await?
    .context("Failed to read standard input")?;
    Ok(body)
}
