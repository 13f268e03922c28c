//! # PromptVault Templating
//!
//! Substitution of `{{variable}}` and `{{> partial}}` references in prompt
//! content. Rendering is a pure function of the content and the two lookup
//! sources: no I/O, no errors, byte-identical output for identical input.
//!
//! ```rust
//! use promptvault_templating::{Markup, TemplateEngine};
//! use std::collections::BTreeMap;
//!
//! let mut variables = BTreeMap::new();
//! variables.insert("language".to_string(), "Rust".to_string());
//! let mut partials = BTreeMap::new();
//! partials.insert("style".to_string(), "Answer in {{language}}.".to_string());
//!
//! let engine = TemplateEngine::with_markup(Markup::Plain);
//! let rendered = engine.render("Review this. {{> style}}", &variables, &partials);
//! assert_eq!(rendered, "Review this. Answer in Rust.");
//! ```

pub mod engine;
pub mod markup;
pub mod partials;

pub use engine::{references, render, References, TemplateEngine, MAX_PARTIAL_DEPTH};
pub use markup::Markup;
pub use partials::{Empty, PartialLoader, VariableSource};
