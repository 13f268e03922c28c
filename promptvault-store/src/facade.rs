//! Typed facade over a [`KeyValueStore`]
//!
//! Turns the four untyped store fields into the values the rest of the
//! system works with, applying the documented defaults for missing fields.

use crate::backend::{KeyValueStore, StoreKey};
use crate::error::{StoreError, StoreResult};
use crate::model::IndexedFolder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name to value map used for both variables and partials
pub type NamedValues = BTreeMap<String, String>;

/// Typed access to the persisted vault state
#[derive(Debug, Clone)]
pub struct VaultStore {
    backend: Arc<dyn KeyValueStore>,
}

impl VaultStore {
    /// Wrap a store backend
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// The configured vault directory, if setup has happened
    pub async fn vault_directory(&self) -> StoreResult<Option<PathBuf>> {
        self.get(StoreKey::VaultDirectory).await
    }

    /// Record the vault directory
    pub async fn set_vault_directory(&self, path: &Path) -> StoreResult<()> {
        self.set(StoreKey::VaultDirectory, &path).await
    }

    /// Last index snapshot, empty if none was ever stored
    pub async fn indexed_folders(&self) -> StoreResult<Vec<IndexedFolder>> {
        Ok(self.get(StoreKey::IndexedFolders).await?.unwrap_or_default())
    }

    /// Replace the index snapshot
    pub async fn set_indexed_folders(&self, folders: &[IndexedFolder]) -> StoreResult<()> {
        self.set(StoreKey::IndexedFolders, &folders).await
    }

    /// All variables, empty if none were ever stored
    pub async fn variables(&self) -> StoreResult<NamedValues> {
        self.named_values(StoreKey::Variables).await
    }

    /// Replace the variable map
    pub async fn set_variables(&self, variables: &NamedValues) -> StoreResult<()> {
        self.set(StoreKey::Variables, variables).await
    }

    /// All partials, empty if none were ever stored
    pub async fn partials(&self) -> StoreResult<NamedValues> {
        self.named_values(StoreKey::Partials).await
    }

    /// Replace the partial map
    pub async fn set_partials(&self, partials: &NamedValues) -> StoreResult<()> {
        self.set(StoreKey::Partials, partials).await
    }

    /// Read one of the two name/value maps
    pub async fn named_values(&self, key: StoreKey) -> StoreResult<NamedValues> {
        Ok(self.get(key).await?.unwrap_or_default())
    }

    /// Replace one of the two name/value maps
    pub async fn set_named_values(&self, key: StoreKey, values: &NamedValues) -> StoreResult<()> {
        self.set(key, values).await
    }

    async fn get<T: DeserializeOwned>(&self, key: StoreKey) -> StoreResult<Option<T>> {
        match self.backend.get(key).await? {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| StoreError::Decode { key, source }),
        }
    }

    async fn set<T: Serialize + ?Sized>(&self, key: StoreKey, value: &T) -> StoreResult<()> {
        let value =
            serde_json::to_value(value).map_err(|source| StoreError::Encode { key, source })?;
        self.backend.set(key, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use serde_json::json;

    fn store() -> (Arc<MemoryStore>, VaultStore) {
        let backend = Arc::new(MemoryStore::new());
        (backend.clone(), VaultStore::new(backend))
    }

    #[tokio::test]
    async fn test_defaults_when_empty() {
        let (_, store) = store();
        assert!(store.vault_directory().await.unwrap().is_none());
        assert!(store.indexed_folders().await.unwrap().is_empty());
        assert!(store.variables().await.unwrap().is_empty());
        assert!(store.partials().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_vault_directory_roundtrip() {
        let (_, store) = store();
        store
            .set_vault_directory(Path::new("/home/me/prompts"))
            .await
            .unwrap();
        assert_eq!(
            store.vault_directory().await.unwrap(),
            Some(PathBuf::from("/home/me/prompts"))
        );
    }

    #[tokio::test]
    async fn test_whole_map_write() {
        let (backend, store) = store();
        let mut vars = NamedValues::new();
        vars.insert("tone".to_string(), "formal".to_string());
        store.set_variables(&vars).await.unwrap();

        assert_eq!(store.variables().await.unwrap(), vars);
        assert_eq!(
            backend.get(StoreKey::Variables).await.unwrap(),
            Some(json!({"tone": "formal"}))
        );
    }

    #[tokio::test]
    async fn test_decode_error_names_key() {
        let (backend, store) = store();
        backend
            .set(StoreKey::Partials, json!(["not", "a", "map"]))
            .await
            .unwrap();

        let err = store.partials().await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Decode {
                key: StoreKey::Partials,
                ..
            }
        ));
    }
}
