//! Lookup traits for variables and partials
//!
//! The engine never owns its inputs. Anything that can answer "what is the
//! value of `name`" can be rendered against, which keeps the engine free of
//! store and I/O concerns.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Trait for loading partial templates by name
pub trait PartialLoader {
    /// Get the content of the named partial, if it exists
    fn try_get(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Check if a partial with the given name exists
    fn contains(&self, name: &str) -> bool {
        self.try_get(name).is_some()
    }
}

/// Trait for resolving variable values by name
pub trait VariableSource {
    /// Get the value of the named variable, if it exists
    fn value(&self, name: &str) -> Option<&str>;
}

impl PartialLoader for HashMap<String, String> {
    fn try_get(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|content| Cow::Borrowed(content.as_str()))
    }
}

impl PartialLoader for BTreeMap<String, String> {
    fn try_get(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|content| Cow::Borrowed(content.as_str()))
    }
}

impl VariableSource for HashMap<String, String> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl VariableSource for BTreeMap<String, String> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// A source with no entries, for rendering without variables or partials
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl PartialLoader for Empty {
    fn try_get(&self, _name: &str) -> Option<Cow<'_, str>> {
        None
    }
}

impl VariableSource for Empty {
    fn value(&self, _name: &str) -> Option<&str> {
        None
    }
}
