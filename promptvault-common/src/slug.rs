//! Slug generation for folder and prompt identifiers
//!
//! Slugs are lowercase ASCII alphanumerics joined by single hyphens. They are
//! not guaranteed unique; callers that need uniqueness (the vault indexer)
//! qualify collisions themselves.

/// Slug returned for names that contain no ASCII alphanumerics at all
pub const UNTITLED_SLUG: &str = "untitled";

/// Convert an arbitrary name into a URL-safe identifier.
///
/// Every maximal run of characters outside `[a-z0-9]` (after lowercasing)
/// collapses into a single `-`, and hyphens at either end are dropped.
/// The result is stable under re-slugification.
///
/// ```rust
/// use promptvault_common::slugify;
///
/// assert_eq!(slugify("Code Review Prompts"), "code-review-prompts");
/// assert_eq!(slugify("  --Hello, World!--  "), "hello-world");
/// assert_eq!(slugify(&slugify("Already Done")), "already-done");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        return UNTITLED_SLUG.to_string();
    }
    slug
}

/// Slugify a file name, stripping a trailing `.md` extension first.
///
/// The extension check is case-insensitive, so `Summary.MD` and `summary.md`
/// produce the same slug.
pub fn slugify_file_name(file_name: &str) -> String {
    slugify(strip_markdown_extension(file_name))
}

fn strip_markdown_extension(file_name: &str) -> &str {
    let len = file_name.len();
    if len >= 3 && file_name.is_char_boundary(len - 3) {
        let (stem, ext) = file_name.split_at(len - 3);
        if ext.eq_ignore_ascii_case(".md") {
            return stem;
        }
    }
    file_name
}
