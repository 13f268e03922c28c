//! YAML front-matter parsing for prompt files
//!
//! A prompt file may open with a header block delimited by `---`:
//!
//! ```markdown
//! ---
//! name: Code Review
//! tags: [rust, review]
//! ---
//! Review the following code.
//! ```
//!
//! Parsing never fails outright. A header that does not decode is reported
//! through [`ParsedPrompt::error`] and the whole text is kept as the body.

use promptvault_store::Frontmatter;
use serde_json::Value;

/// Header delimiter
pub const DELIMITER: &str = "---";

/// Outcome of splitting a prompt file into header and body
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedPrompt {
    /// Decoded header; `None` when there was no header or it failed to decode
    pub frontmatter: Option<Frontmatter>,
    /// Trimmed text after the header, or the whole trimmed text
    pub body: String,
    /// Why the header failed to decode
    pub error: Option<String>,
}

/// Split `raw` into front-matter and body.
///
/// The text is split on every literal `---`. When it starts with the
/// delimiter and yields at least three segments, segment one is the header
/// and the rest, rejoined with `---`, is the body. Anything else is all body.
pub fn parse_frontmatter(raw: &str) -> ParsedPrompt {
    let segments: Vec<&str> = raw.split(DELIMITER).collect();

    if segments.len() < 3 || !segments[0].is_empty() {
        return ParsedPrompt {
            body: raw.trim().to_string(),
            ..ParsedPrompt::default()
        };
    }

    match decode_header(segments[1]) {
        Ok(frontmatter) => ParsedPrompt {
            frontmatter: Some(frontmatter),
            body: segments[2..].join(DELIMITER).trim().to_string(),
            error: None,
        },
        Err(error) => ParsedPrompt {
            frontmatter: None,
            body: raw.trim().to_string(),
            error: Some(error),
        },
    }
}

fn decode_header(header: &str) -> Result<Frontmatter, String> {
    if header.trim().is_empty() {
        return Ok(Frontmatter::new());
    }

    let value: Value = serde_yaml_ng::from_str(header)
        .map_err(|e| format!("Failed to parse YAML frontmatter: {e}"))?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Frontmatter::new()),
        other => Err(format!(
            "Frontmatter must be a mapping of keys to values, found {}",
            value_kind(&other)
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_frontmatter_with_yaml() {
        let content = r#"---
name: Code Review
tags:
  - rust
  - review
---

Review the following code.
"#;

        let parsed = parse_frontmatter(content);
        assert!(parsed.error.is_none());
        let fm = parsed.frontmatter.unwrap();
        assert_eq!(fm.get("name"), Some(&json!("Code Review")));
        assert_eq!(fm.get("tags"), Some(&json!(["rust", "review"])));
        assert_eq!(parsed.body, "Review the following code.");
    }

    #[test]
    fn test_no_frontmatter() {
        let parsed = parse_frontmatter("  Just a prompt.\n");
        assert!(parsed.frontmatter.is_none());
        assert!(parsed.error.is_none());
        assert_eq!(parsed.body, "Just a prompt.");
    }

    #[test]
    fn test_leading_content_means_no_header() {
        let raw = "intro\n---\nname: x\n---\nbody";
        let parsed = parse_frontmatter(raw);
        assert!(parsed.frontmatter.is_none());
        assert!(parsed.error.is_none());
        assert_eq!(parsed.body, raw);
    }

    #[test]
    fn test_unterminated_header_is_body() {
        let parsed = parse_frontmatter("---\nname: x\nno closing delimiter");
        assert!(parsed.frontmatter.is_none());
        assert!(parsed.error.is_none());
        assert_eq!(parsed.body, "---\nname: x\nno closing delimiter");
    }

    #[test]
    fn test_delimiter_inside_body_is_preserved() {
        let parsed = parse_frontmatter("---\nname: x\n---\nabove\n---\nbelow\n");
        assert_eq!(parsed.body, "above\n---\nbelow");
        assert!(parsed.frontmatter.is_some());
    }

    #[test]
    fn test_empty_header_is_present_and_empty() {
        let parsed = parse_frontmatter("---\n---\nbody");
        assert_eq!(parsed.frontmatter, Some(Frontmatter::new()));
        assert_eq!(parsed.body, "body");

        let parsed = parse_frontmatter("---\n   \n---\nbody");
        assert_eq!(parsed.frontmatter, Some(Frontmatter::new()));
    }

    #[test]
    fn test_invalid_yaml_keeps_whole_text() {
        let raw = "---\nname: [unclosed\n---\nbody\n";
        let parsed = parse_frontmatter(raw);
        assert!(parsed.frontmatter.is_none());
        assert!(parsed.error.is_some());
        assert_eq!(parsed.body, raw.trim());
    }

    #[test]
    fn test_non_mapping_header_is_an_error() {
        let parsed = parse_frontmatter("---\n- a\n- b\n---\nbody");
        assert!(parsed.frontmatter.is_none());
        assert!(parsed.error.unwrap().contains("a sequence"));

        let parsed = parse_frontmatter("---\njust a string\n---\nbody");
        assert!(parsed.error.unwrap().contains("a string"));
    }
}
