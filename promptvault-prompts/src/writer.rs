//! Writing prompt files back to disk

use crate::error::WriteError;
use crate::frontmatter::DELIMITER;
use promptvault_common::Pretty;
use promptvault_store::Frontmatter;
use std::path::Path;
use tracing::{debug, info};

/// Build the file text for a prompt.
///
/// With a non-empty header the result is `---\n<yaml>---\n\n<body>`;
/// otherwise it is exactly `body`. A header whose YAML would contain the
/// delimiter is rejected, since it could not be parsed back.
pub fn serialize_prompt(frontmatter: Option<&Frontmatter>, body: &str) -> Result<String, WriteError> {
    match frontmatter {
        Some(frontmatter) if !frontmatter.is_empty() => {
            let yaml = serde_yaml_ng::to_string(frontmatter)?;
            if yaml.contains(DELIMITER) {
                let key = delimiter_key(frontmatter)?.unwrap_or_default();
                return Err(WriteError::DelimiterInHeader { key });
            }
            Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n\n{body}"))
        }
        _ => Ok(body.to_string()),
    }
}

/// First header key whose name or value serializes with the delimiter
fn delimiter_key(frontmatter: &Frontmatter) -> Result<Option<String>, WriteError> {
    for (key, value) in frontmatter {
        if key.contains(DELIMITER) || serde_yaml_ng::to_string(value)?.contains(DELIMITER) {
            return Ok(Some(key.clone()));
        }
    }
    Ok(None)
}

/// Replace the contents of `path` with the serialized prompt
pub async fn save(
    path: &Path,
    frontmatter: Option<&Frontmatter>,
    body: &str,
) -> Result<(), WriteError> {
    if let Some(frontmatter) = frontmatter {
        debug!("Saving frontmatter for {}: {}", path.display(), Pretty(frontmatter));
    }

    let text = serialize_prompt(frontmatter, body)?;
    tokio::fs::write(path, text)
        .await
        .map_err(|source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Saved prompt {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::parse_frontmatter;
    use serde_json::json;
    use tempfile::TempDir;

    fn header() -> Frontmatter {
        let mut fm = Frontmatter::new();
        fm.insert("name".to_string(), json!("Code Review"));
        fm.insert("tags".to_string(), json!(["rust"]));
        fm
    }

    #[test]
    fn test_serialize_with_header() {
        let text = serialize_prompt(Some(&header()), "Body text").unwrap();
        assert!(text.starts_with("---\nname: Code Review\n"));
        assert!(text.ends_with("---\n\nBody text"));
    }

    #[test]
    fn test_serialize_without_header_is_exactly_body() {
        assert_eq!(serialize_prompt(None, "Only body").unwrap(), "Only body");
        assert_eq!(
            serialize_prompt(Some(&Frontmatter::new()), "Only body").unwrap(),
            "Only body"
        );
    }

    #[test]
    fn test_parse_reads_back_what_was_written() {
        let text = serialize_prompt(Some(&header()), "Review {{code}}").unwrap();
        let parsed = parse_frontmatter(&text);
        assert_eq!(parsed.frontmatter, Some(header()));
        assert_eq!(parsed.body, "Review {{code}}");
    }

    #[test]
    fn test_delimiter_in_header_is_rejected() {
        let mut fm = Frontmatter::new();
        fm.insert("name".to_string(), json!("Split"));
        fm.insert("description".to_string(), json!("before --- after"));

        let err = serialize_prompt(Some(&fm), "Body").unwrap_err();
        match err {
            WriteError::DelimiterInHeader { key } => assert_eq!(key, "description"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_rejected_header_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.md");
        std::fs::write(&path, "original").unwrap();

        let mut fm = Frontmatter::new();
        fm.insert("note".to_string(), json!("a---b"));
        let err = save(&path, Some(&fm), "new body").await.unwrap_err();
        assert!(matches!(err, WriteError::DelimiterInHeader { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
    }

    #[tokio::test]
    async fn test_save_replaces_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.md");
        std::fs::write(&path, "old content that is longer than the new one").unwrap();

        save(&path, None, "new").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("prompt.md");

        let err = save(&path, None, "body").await.unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }));
        assert!(!path.exists());
    }
}
