//! Validated variable and partial registries
//!
//! Both registries share one implementation; an [`EntryKind`] supplies the
//! store key, field labels and length bounds. Every mutation reads the whole
//! map, validates, writes the whole map back and returns the result. The map
//! in the store is left untouched when validation fails.

use crate::backend::StoreKey;
use crate::error::{LibraryError, LibraryResult};
use crate::facade::{NamedValues, VaultStore};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Describes one kind of named library entry
pub trait EntryKind: Send + Sync + 'static {
    /// Store field holding the map
    const KEY: StoreKey;
    /// Human-readable kind, used in messages
    const LABEL: &'static str;
    /// Label of the name field
    const NAME_FIELD: &'static str;
    /// Label of the value field
    const VALUE_FIELD: &'static str;
    /// Maximum name length in characters
    const MAX_NAME_LEN: usize;
    /// Maximum value length in characters
    const MAX_VALUE_LEN: usize;
}

/// `{{key}}` variables
#[derive(Debug, Clone, Copy)]
pub struct VariableKind;

impl EntryKind for VariableKind {
    const KEY: StoreKey = StoreKey::Variables;
    const LABEL: &'static str = "Variable";
    const NAME_FIELD: &'static str = "Key";
    const VALUE_FIELD: &'static str = "Value";
    const MAX_NAME_LEN: usize = 255;
    const MAX_VALUE_LEN: usize = 255;
}

/// `{{> name}}` partials
#[derive(Debug, Clone, Copy)]
pub struct PartialKind;

impl EntryKind for PartialKind {
    const KEY: StoreKey = StoreKey::Partials;
    const LABEL: &'static str = "Partial";
    const NAME_FIELD: &'static str = "Name";
    const VALUE_FIELD: &'static str = "Content";
    const MAX_NAME_LEN: usize = 100;
    const MAX_VALUE_LEN: usize = 5000;
}

/// Registry of variables
pub type VariableRegistry = Registry<VariableKind>;

/// Registry of partials
pub type PartialRegistry = Registry<PartialKind>;

/// CRUD over one name/value map in the store
#[derive(Debug)]
pub struct Registry<K: EntryKind> {
    store: VaultStore,
    lock: Arc<Mutex<()>>,
    _kind: PhantomData<K>,
}

impl<K: EntryKind> Clone for Registry<K> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            lock: Arc::clone(&self.lock),
            _kind: PhantomData,
        }
    }
}

impl<K: EntryKind> Registry<K> {
    /// Create a registry over `store`
    pub fn new(store: VaultStore) -> Self {
        Self {
            store,
            lock: Arc::new(Mutex::new(())),
            _kind: PhantomData,
        }
    }

    /// The full map
    pub async fn list(&self) -> LibraryResult<NamedValues> {
        Ok(self.store.named_values(K::KEY).await?)
    }

    /// One entry's value
    pub async fn get(&self, name: &str) -> LibraryResult<Option<String>> {
        Ok(self.list().await?.remove(name.trim()))
    }

    /// Insert a new entry; fails if the name is already taken
    pub async fn add(&self, name: &str, value: &str) -> LibraryResult<NamedValues> {
        let name = validate_name::<K>(name)?;
        validate_value::<K>(value)?;

        let _guard = self.lock.lock().await;
        let mut values = self.list().await?;
        if values.contains_key(name) {
            return Err(LibraryError::Duplicate {
                kind: K::LABEL,
                name: name.to_string(),
            });
        }

        values.insert(name.to_string(), value.to_string());
        self.store.set_named_values(K::KEY, &values).await?;
        info!("Added {} '{}'", K::LABEL.to_lowercase(), name);
        Ok(values)
    }

    /// Replace an existing entry's value
    pub async fn update(&self, name: &str, value: &str) -> LibraryResult<NamedValues> {
        validate_value::<K>(value)?;
        let name = name.trim();

        let _guard = self.lock.lock().await;
        let mut values = self.list().await?;
        match values.get_mut(name) {
            Some(existing) => *existing = value.to_string(),
            None => return Err(self.not_found(name)),
        }

        self.store.set_named_values(K::KEY, &values).await?;
        info!("Updated {} '{}'", K::LABEL.to_lowercase(), name);
        Ok(values)
    }

    /// Remove an existing entry
    pub async fn delete(&self, name: &str) -> LibraryResult<NamedValues> {
        let name = name.trim();

        let _guard = self.lock.lock().await;
        let mut values = self.list().await?;
        if values.remove(name).is_none() {
            return Err(self.not_found(name));
        }

        self.store.set_named_values(K::KEY, &values).await?;
        info!("Deleted {} '{}'", K::LABEL.to_lowercase(), name);
        Ok(values)
    }

    fn not_found(&self, name: &str) -> LibraryError {
        LibraryError::NotFound {
            kind: K::LABEL,
            name: name.to_string(),
        }
    }
}

fn validate_name<K: EntryKind>(name: &str) -> LibraryResult<&str> {
    let name = name.trim();
    check_field(name, K::NAME_FIELD, K::MAX_NAME_LEN)?;

    if !is_referenceable(name) {
        warn!(
            "{} name '{}' contains characters outside [a-zA-Z0-9_-] and cannot be referenced from a template",
            K::LABEL,
            name
        );
    }
    Ok(name)
}

fn validate_value<K: EntryKind>(value: &str) -> LibraryResult<()> {
    check_field(value, K::VALUE_FIELD, K::MAX_VALUE_LEN)
}

fn check_field(text: &str, field: &'static str, max: usize) -> LibraryResult<()> {
    if text.trim().is_empty() {
        return Err(LibraryError::Empty { field });
    }
    let actual = text.chars().count();
    if actual > max {
        return Err(LibraryError::TooLong { field, max, actual });
    }
    Ok(())
}

fn is_referenceable(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
