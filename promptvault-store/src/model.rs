//! Persisted data model: indexed folders and the prompt files inside them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Structured front-matter header of a prompt file
pub type Frontmatter = serde_json::Map<String, serde_json::Value>;

/// One Markdown file inside an indexed folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFile {
    /// File name including extension, e.g. `code-review.md`
    pub name: String,
    /// Absolute path to the file
    pub path: PathBuf,
    /// Identifier derived from the file name without `.md`
    pub slug: String,
    /// Parsed header, absent when the file had none or it failed to parse
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontmatter: Option<Frontmatter>,
    /// Text after the header, or the whole file when there is no usable header
    pub content_body: String,
    /// Description of the header parse failure, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontmatter_error: Option<String>,
    /// When the scan that produced this record ran
    pub last_indexed: DateTime<Utc>,
}

impl PromptFile {
    /// Look up a string-valued front-matter field
    pub fn frontmatter_str(&self, key: &str) -> Option<&str> {
        self.frontmatter
            .as_ref()
            .and_then(|fm| fm.get(key))
            .and_then(|value| value.as_str())
    }

    /// Display title: the `name` front-matter field, falling back to the file name
    pub fn title(&self) -> &str {
        self.frontmatter_str("name").unwrap_or(&self.name)
    }
}

/// One immediate subdirectory of the vault
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedFolder {
    /// Directory base name
    pub name: String,
    /// Absolute path to the directory
    pub path: PathBuf,
    /// Identifier derived from the name
    pub slug: String,
    /// Prompt files in directory-listing order
    #[serde(default)]
    pub prompts: Vec<PromptFile>,
}

impl IndexedFolder {
    /// Find a prompt in this folder by slug; the first match wins
    pub fn prompt(&self, slug: &str) -> Option<&PromptFile> {
        self.prompts.iter().find(|prompt| prompt.slug == slug)
    }
}

/// Find a folder by slug; the first match wins
pub fn find_folder<'a>(folders: &'a [IndexedFolder], slug: &str) -> Option<&'a IndexedFolder> {
    folders.iter().find(|folder| folder.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prompt(slug: &str, frontmatter: Option<Frontmatter>) -> PromptFile {
        PromptFile {
            name: format!("{slug}.md"),
            path: PathBuf::from(format!("/vault/folder/{slug}.md")),
            slug: slug.to_string(),
            frontmatter,
            content_body: "body".to_string(),
            frontmatter_error: None,
            last_indexed: Utc::now(),
        }
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let value = serde_json::to_value(prompt("a", None)).unwrap();
        assert!(value.get("contentBody").is_some());
        assert!(value.get("lastIndexed").is_some());
        assert!(value.get("frontmatter").is_none());
        assert!(value.get("frontmatterError").is_none());
    }

    #[test]
    fn test_title_prefers_frontmatter_name() {
        let mut fm = Frontmatter::new();
        fm.insert("name".to_string(), json!("Code Review"));
        assert_eq!(prompt("a", Some(fm)).title(), "Code Review");
        assert_eq!(prompt("b", None).title(), "b.md");
    }

    #[test]
    fn test_first_match_wins() {
        let folders = vec![
            IndexedFolder {
                name: "Work".to_string(),
                path: PathBuf::from("/vault/Work"),
                slug: "work".to_string(),
                prompts: vec![prompt("a", None)],
            },
            IndexedFolder {
                name: "work".to_string(),
                path: PathBuf::from("/vault/work"),
                slug: "work".to_string(),
                prompts: vec![],
            },
        ];
        let found = find_folder(&folders, "work").unwrap();
        assert_eq!(found.name, "Work");
        assert!(found.prompt("a").is_some());
        assert!(found.prompt("zzz").is_none());
        assert!(find_folder(&folders, "home").is_none());
    }
}
