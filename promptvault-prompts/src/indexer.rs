//! Two-level vault scan
//!
//! A vault is a directory of folders, and each folder holds Markdown prompt
//! files. Anything deeper than `vault/folder/file.md` is ignored. Folders and
//! files are visited in directory-listing order.

use crate::error::{VaultError, VaultResult};
use crate::frontmatter::parse_frontmatter;
use chrono::{DateTime, Utc};
use promptvault_common::{slugify, slugify_file_name};
use promptvault_store::{IndexedFolder, PromptFile};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension of prompt files, compared case-insensitively
pub const PROMPT_EXTENSION: &str = "md";

/// Prefix placed in front of the body of a file whose header failed to parse
pub const FRONTMATTER_ERROR_PREFIX: &str = "[frontmatter error: ";

/// Scan `vault` and build the folder index.
///
/// Folders and files that cannot be read are skipped with a warning. Only a
/// failure to list the vault root itself is returned as an error.
pub async fn index_vault(vault: &Path) -> VaultResult<Vec<IndexedFolder>> {
    let scan_failed = |source: std::io::Error| VaultError::ScanFailed {
        path: vault.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(vault).await.map_err(scan_failed)?;
    let scanned_at = Utc::now();
    let mut folders = Vec::new();
    let mut folder_slugs = SlugAllocator::default();

    while let Some(entry) = entries.next_entry().await.map_err(scan_failed)? {
        let path = entry.path();
        if !is_dir(&path).await {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let prompts = match scan_folder(&path, scanned_at).await {
            Ok(prompts) => prompts,
            Err(err) => {
                warn!("Skipping folder {}: {}", path.display(), err);
                continue;
            }
        };

        let slug = folder_slugs.claim(slugify(&name), &path);
        debug!(
            "Indexed folder '{}' as '{}' with {} prompts",
            name,
            slug,
            prompts.len()
        );
        folders.push(IndexedFolder {
            name,
            path,
            slug,
            prompts,
        });
    }

    Ok(folders)
}

async fn scan_folder(
    folder: &Path,
    scanned_at: DateTime<Utc>,
) -> std::io::Result<Vec<PromptFile>> {
    let mut entries = tokio::fs::read_dir(folder).await?;
    let mut prompts = Vec::new();
    let mut slugs = SlugAllocator::default();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !is_prompt_file(&path) || !is_file(&path).await {
            continue;
        }

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("Skipping prompt file {}: {}", path.display(), err);
                continue;
            }
        };
        let raw = decode_text(&bytes, &path);

        let name = entry.file_name().to_string_lossy().into_owned();
        let mut prompt = build_prompt_file(name, path, &raw, scanned_at);
        prompt.slug = slugs.claim(prompt.slug, &prompt.path);
        prompts.push(prompt);
    }

    Ok(prompts)
}

/// Build the index record for one prompt file from its raw text
pub fn build_prompt_file(
    name: String,
    path: PathBuf,
    raw: &str,
    scanned_at: DateTime<Utc>,
) -> PromptFile {
    let parsed = parse_frontmatter(raw);
    let content_body = match &parsed.error {
        Some(error) => {
            warn!("Invalid frontmatter in {}: {}", path.display(), error);
            format!("{FRONTMATTER_ERROR_PREFIX}{error}]\n\n{}", parsed.body)
        }
        None => parsed.body,
    };

    PromptFile {
        slug: slugify_file_name(&name),
        name,
        path,
        frontmatter: parsed.frontmatter,
        content_body,
        frontmatter_error: parsed.error,
        last_indexed: scanned_at,
    }
}

/// Decode file contents as UTF-8, replacing invalid sequences
fn decode_text(bytes: &[u8], path: &Path) -> String {
    let text = String::from_utf8_lossy(bytes);
    if let std::borrow::Cow::Owned(_) = text {
        warn!(
            "{} is not valid UTF-8; invalid bytes were replaced",
            path.display()
        );
    }
    text.into_owned()
}

fn is_prompt_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PROMPT_EXTENSION))
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Hands out unique slugs; the first claimant keeps the bare slug
#[derive(Debug, Default)]
struct SlugAllocator {
    taken: HashSet<String>,
}

impl SlugAllocator {
    fn claim(&mut self, slug: String, path: &Path) -> String {
        if self.taken.insert(slug.clone()) {
            return slug;
        }

        let mut n = 2;
        loop {
            let candidate = format!("{slug}-{n}");
            if self.taken.insert(candidate.clone()) {
                warn!(
                    "Slug '{}' is already taken; {} is indexed as '{}'",
                    slug,
                    path.display(),
                    candidate
                );
                return candidate;
            }
            n += 1;
        }
    }
}
