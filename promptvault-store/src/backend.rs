//! Key-value store backends
//!
//! The store knows four logical keys and only ever moves whole values:
//! callers read a complete map, change it in memory, and write it back.

use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, trace};

/// The logical fields held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StoreKey {
    /// Root directory of the active vault
    VaultDirectory,
    /// Snapshot of the last vault index
    IndexedFolders,
    /// Variable name to value map
    Variables,
    /// Partial name to content map
    Partials,
}

impl StoreKey {
    /// All keys, in document order
    pub const ALL: [StoreKey; 4] = [
        StoreKey::VaultDirectory,
        StoreKey::IndexedFolders,
        StoreKey::Variables,
        StoreKey::Partials,
    ];

    /// Field name used in persisted documents
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::VaultDirectory => "vaultDirectory",
            StoreKey::IndexedFolders => "indexedFolders",
            StoreKey::Variables => "variables",
            StoreKey::Partials => "partials",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole-value persistent storage keyed by [`StoreKey`]
#[async_trait]
pub trait KeyValueStore: Send + Sync + fmt::Debug {
    /// Read the value stored under `key`
    async fn get(&self, key: StoreKey) -> StoreResult<Option<Value>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: StoreKey, value: Value) -> StoreResult<()>;

    /// Remove the value stored under `key`
    async fn remove(&self, key: StoreKey) -> StoreResult<()>;
}

/// In-memory store, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<StoreKey, Value>>,
}

impl MemoryStore {
    /// Create an empty memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: StoreKey) -> StoreResult<Option<Value>> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: StoreKey, value: Value) -> StoreResult<()> {
        self.values.write().await.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: StoreKey) -> StoreResult<()> {
        self.values.write().await.remove(&key);
        Ok(())
    }
}

/// Store persisted as a single JSON document on disk
///
/// Every read goes to disk, so edits made by another tool between
/// operations are picked up. Writes replace the document atomically by
/// writing a sibling temporary file and renaming it over the original.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> StoreResult<Map<String, Value>> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                trace!("Store file {} does not exist yet", self.path.display());
                return Ok(Map::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if text.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn write_document(&self, document: &Map<String, Value>) -> StoreResult<()> {
        let io_error = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
            }
        }

        let text = serde_json::to_string_pretty(document)
            .map_err(|err| io_error(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        tokio::fs::write(&tmp_path, text).await.map_err(io_error)?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(io_error)?;
        debug!("Wrote store file {}", self.path.display());
        Ok(())
    }

    async fn update<F>(&self, apply: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Map<String, Value>) + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        apply(&mut document);
        self.write_document(&document).await
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: StoreKey) -> StoreResult<Option<Value>> {
        let mut document = self.read_document().await?;
        Ok(document.remove(key.as_str()))
    }

    async fn set(&self, key: StoreKey, value: Value) -> StoreResult<()> {
        self.update(move |document| {
            document.insert(key.as_str().to_string(), value);
        })
        .await
    }

    async fn remove(&self, key: StoreKey) -> StoreResult<()> {
        self.update(move |document| {
            document.remove(key.as_str());
        })
        .await
    }
}
