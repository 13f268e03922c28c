//! Marker styles for rendered output
//!
//! A rendered prompt distinguishes three things visually: variables that
//! resolved, references that did not, and the extent of each expanded
//! partial. How that looks depends on where the output is going.

use colored::Colorize;

const RESOLVED_STYLE: &str =
    "color: #2563eb; background-color: #eff6ff; padding: 2px 4px; border-radius: 4px; font-weight: 500;";
const UNRESOLVED_STYLE: &str =
    "color: #dc2626; background-color: #fef2f2; padding: 2px 4px; border-radius: 4px; font-weight: 500;";
const PARTIAL_STYLE: &str =
    "border-left: 3px solid #a855f7; padding-left: 8px; margin: 4px 0;";

/// Marker style applied by the template engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Markup {
    /// Inline-styled HTML, suitable for a markdown renderer that allows raw HTML.
    /// Values and literals are HTML-escaped.
    #[default]
    Html,
    /// Colored terminal text
    Ansi,
    /// No markers: resolved values, literal leftovers, bare partial expansions
    Plain,
}

impl Markup {
    /// Marker for a variable that resolved to `value`
    pub fn resolved(self, value: &str) -> String {
        match self {
            Markup::Html => format!(
                r#"<span class="pv-resolved" style="{RESOLVED_STYLE}">{}</span>"#,
                html_escape::encode_text(value)
            ),
            Markup::Ansi => value.blue().bold().to_string(),
            Markup::Plain => value.to_string(),
        }
    }

    /// Marker for a reference that could not be resolved; `literal` is the
    /// original reference text, e.g. `{{ name }}` or `{{> name}}`
    pub fn unresolved(self, literal: &str) -> String {
        match self {
            Markup::Html => format!(
                r#"<span class="pv-unresolved" style="{UNRESOLVED_STYLE}">{}</span>"#,
                html_escape::encode_text(literal)
            ),
            Markup::Ansi => literal.red().bold().to_string(),
            Markup::Plain => literal.to_string(),
        }
    }

    /// Container around the expansion of the partial `name`
    pub fn partial(self, name: &str, expansion: &str) -> String {
        match self {
            Markup::Html => format!(
                r#"<div class="pv-partial" data-partial="{name}" style="{PARTIAL_STYLE}">{expansion}</div>"#
            ),
            Markup::Ansi => format!(
                "{}{}{}",
                format!("[{name}: ").dimmed(),
                expansion,
                "]".dimmed()
            ),
            Markup::Plain => expansion.to_string(),
        }
    }
}
