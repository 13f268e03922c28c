//! Template engine for variable and partial substitution
//!
//! Two reference forms are recognised:
//!
//! - `{{ name }}` - a variable
//! - `{{> name }}` - a partial
//!
//! where `name` matches `[a-zA-Z0-9_-]+` and whitespace inside the braces is
//! optional. Anything else, including unbalanced braces, passes through
//! untouched.
//!
//! Rendering is partial-first: every partial reference is expanded
//! recursively (up to [`MAX_PARTIAL_DEPTH`] levels below the top-level
//! content), and only then are variables resolved over the whole expanded
//! text. A partial's own `{{var}}` references therefore see the caller's
//! variables, and a variable value is never itself scanned for references.

use crate::markup::Markup;
use crate::partials::{PartialLoader, VariableSource};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Number of nested partial levels expanded below the top-level content.
///
/// Content reached at a deeper level is left as-is, which bounds rendering
/// of self-referencing or cyclic partials.
pub const MAX_PARTIAL_DEPTH: usize = 5;

static PARTIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*>\s*([a-zA-Z0-9_-]+)\s*\}\}").unwrap());

static VARIABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([a-zA-Z0-9_-]+)\s*\}\}").unwrap());

/// Names referenced by a piece of content, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    /// Variable names (`{{name}}`)
    pub variables: Vec<String>,
    /// Partial names (`{{> name}}`)
    pub partials: Vec<String>,
}

/// Template engine with a fixed marker style and depth cap
#[derive(Debug, Clone, Copy)]
pub struct TemplateEngine {
    markup: Markup,
    max_depth: usize,
}

impl TemplateEngine {
    /// Create a new template engine with HTML markers
    pub fn new() -> Self {
        Self::with_markup(Markup::default())
    }

    /// Create a new template engine with the given marker style
    pub fn with_markup(markup: Markup) -> Self {
        Self {
            markup,
            max_depth: MAX_PARTIAL_DEPTH,
        }
    }

    /// Render `content` against the given variables and partials.
    ///
    /// Never fails: unknown names become unresolved markers and malformed
    /// references are left alone.
    pub fn render<V, P>(&self, content: &str, variables: &V, partials: &P) -> String
    where
        V: VariableSource + ?Sized,
        P: PartialLoader + ?Sized,
    {
        let expanded = self.expand_partials(content, partials, 0);
        self.substitute_variables(&expanded, variables).into_owned()
    }

    fn expand_partials<'a, P>(&self, content: &'a str, partials: &P, depth: usize) -> Cow<'a, str>
    where
        P: PartialLoader + ?Sized,
    {
        if depth > self.max_depth {
            tracing::debug!(
                "Partial depth cap of {} reached, leaving content unexpanded",
                self.max_depth
            );
            return Cow::Borrowed(content);
        }

        PARTIAL_RE.replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            match partials.try_get(name) {
                Some(body) => {
                    let expansion = self.expand_partials(&body, partials, depth + 1);
                    self.markup.partial(name, &expansion)
                }
                None => {
                    tracing::trace!("Unresolved partial reference: {}", name);
                    self.markup.unresolved(&caps[0])
                }
            }
        })
    }

    fn substitute_variables<'a, V>(&self, content: &'a str, variables: &V) -> Cow<'a, str>
    where
        V: VariableSource + ?Sized,
    {
        VARIABLE_RE.replace_all(content, |caps: &Captures| match variables.value(&caps[1]) {
            Some(value) => self.markup.resolved(value),
            None => self.markup.unresolved(&caps[0]),
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Render with the default engine (HTML markers, default depth cap)
pub fn render<V, P>(content: &str, variables: &V, partials: &P) -> String
where
    V: VariableSource + ?Sized,
    P: PartialLoader + ?Sized,
{
    TemplateEngine::new().render(content, variables, partials)
}

/// List the variable and partial names referenced directly by `content`.
///
/// Partials are not followed.
pub fn references(content: &str) -> References {
    let mut refs = References::default();
    for caps in PARTIAL_RE.captures_iter(content) {
        push_unique(&mut refs.partials, &caps[1]);
    }
    for caps in VARIABLE_RE.captures_iter(content) {
        push_unique(&mut refs.variables, &caps[1]);
    }
    refs
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|existing| existing == name) {
        names.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partials::Empty;
    use std::collections::BTreeMap;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn plain() -> TemplateEngine {
        TemplateEngine::with_markup(Markup::Plain)
    }

    #[test]
    fn test_render_no_references() {
        let result = render("Hello World!", &Empty, &Empty);
        assert_eq!(result, "Hello World!");
    }

    #[test]
    fn test_render_resolved_variable() {
        let vars = map(&[("name", "Alice")]);
        let result = plain().render("Hello {{ name }}! Bye {{name}}.", &vars, &Empty);
        assert_eq!(result, "Hello Alice! Bye Alice.");
    }

    #[test]
    fn test_render_everything_unresolved_with_empty_maps() {
        let content = "A {{x}} B {{> y}} C {{ z-1 }}";
        let result = render(content, &Empty, &Empty);

        assert_eq!(result.matches("pv-unresolved").count(), 3);
        assert!(result.contains(">{{x}}</span>"));
        assert!(result.contains(">{{&gt; y}}</span>"));
        assert!(result.contains(">{{ z-1 }}</span>"));
    }

    #[test]
    fn test_render_html_resolved_marker_escapes_value() {
        let vars = map(&[("code", "<script>")]);
        let result = render("Code: {{code}}", &vars, &Empty);
        assert!(result.contains("pv-resolved"));
        assert!(result.contains("&lt;script&gt;"));
        assert!(!result.contains("<script>"));
    }

    #[test]
    fn test_render_partial_wrapped_in_container() {
        let partials = map(&[("sig", "Regards")]);
        let result = render("Body\n{{> sig}}", &Empty, &partials);
        assert!(result.starts_with("Body\n<div class=\"pv-partial\" data-partial=\"sig\""));
        assert!(result.ends_with(">Regards</div>"));
    }

    #[test]
    fn test_render_nested_partials() {
        let partials = map(&[
            ("outer", "[{{> inner}}]"),
            ("inner", "core"),
        ]);
        let result = plain().render("{{> outer }}", &Empty, &partials);
        assert_eq!(result, "[core]");
    }

    #[test]
    fn test_partial_variables_use_callers_map_after_expansion() {
        let vars = map(&[("who", "team")]);
        let partials = map(&[
            ("greeting", "Hi {{who}}, {{> closing}}"),
            ("closing", "thanks {{who}}"),
        ]);
        let result = plain().render("{{> greeting}}", &vars, &partials);
        assert_eq!(result, "Hi team, thanks team");
    }

    #[test]
    fn test_variable_values_are_not_rescanned() {
        let vars = map(&[("a", "{{b}}"), ("b", "nope")]);
        let partials = map(&[("p", "expanded")]);
        let vars_with_partial = map(&[("a", "{{> p}}")]);

        assert_eq!(plain().render("{{a}}", &vars, &Empty), "{{b}}");
        assert_eq!(
            plain().render("{{a}}", &vars_with_partial, &partials),
            "{{> p}}"
        );
    }

    #[test]
    fn test_self_referencing_partial_terminates() {
        let partials = map(&[("loop", "again {{> loop}}")]);
        let result = plain().render("{{> loop}}", &Empty, &partials);

        // Expanded at depths 1 through 5, returned raw at depth 6
        assert_eq!(result.matches("again").count(), MAX_PARTIAL_DEPTH + 1);
        assert!(result.ends_with("{{> loop}}"));
    }

    #[test]
    fn test_partial_cycle_terminates() {
        let partials = map(&[
            ("ping", "ping {{> pong}}"),
            ("pong", "pong {{> ping}}"),
        ]);
        let result = render("{{> ping}}", &Empty, &partials);
        assert_eq!(
            result.matches("class=\"pv-partial\"").count(),
            MAX_PARTIAL_DEPTH + 1
        );
    }

    #[test]
    fn test_custom_depth_cap() {
        let partials = map(&[("loop", "x{{> loop}}")]);
        let engine = TemplateEngine {
            max_depth: 0,
            ..plain()
        };
        let result = engine.render("{{> loop}}", &Empty, &partials);
        assert_eq!(result, "x{{> loop}}");
    }

    #[test]
    fn test_malformed_references_pass_through() {
        let content = "{{ unclosed and {single} and {{ two words }} and {{>}} and {{}}";
        let result = render(content, &Empty, &Empty);
        assert_eq!(result, content);
    }

    #[test]
    fn test_render_is_deterministic() {
        let vars = map(&[("a", "1"), ("b", "2")]);
        let partials = map(&[("p", "{{a}}{{> q}}"), ("q", "{{b}}{{c}}")]);
        let content = "{{> p}} {{a}} {{> missing}}";
        let first = render(content, &vars, &partials);
        for _ in 0..5 {
            assert_eq!(render(content, &vars, &partials), first);
        }
    }

    #[test]
    fn test_references() {
        let refs = references("{{a}} {{> p}} {{ b }} {{a}} {{>p}} {{> q}}");
        assert_eq!(refs.variables, vec!["a", "b"]);
        assert_eq!(refs.partials, vec!["p", "q"]);
    }
}
