//! # PromptVault Store
//!
//! Persistent state for PromptVault: the active vault directory, the last
//! index snapshot, and the variable and partial maps.
//!
//! ## Layers
//!
//! - [`KeyValueStore`] moves whole JSON values under four fixed keys.
//!   [`MemoryStore`] and [`JsonFileStore`] implement it.
//! - [`VaultStore`] gives typed access with defaults for missing fields.
//! - [`VariableRegistry`] and [`PartialRegistry`] validate mutations and
//!   return the updated map.
//!
//! ```rust
//! use promptvault_store::{MemoryStore, VariableRegistry, VaultStore};
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let store = VaultStore::new(Arc::new(MemoryStore::new()));
//! let variables = VariableRegistry::new(store.clone());
//! let all = variables.add("language", "Rust").await?;
//! assert_eq!(all.len(), 1);
//! # Ok::<(), promptvault_store::LibraryError>(())
//! # }).unwrap();
//! ```

pub mod backend;
pub mod error;
pub mod facade;
pub mod model;
pub mod registry;

pub use backend::{JsonFileStore, KeyValueStore, MemoryStore, StoreKey};
pub use error::{LibraryError, LibraryResult, StoreError, StoreResult};
pub use facade::{NamedValues, VaultStore};
pub use model::{find_folder, Frontmatter, IndexedFolder, PromptFile};
pub use registry::{
    EntryKind, PartialKind, PartialRegistry, Registry, VariableKind, VariableRegistry,
};
