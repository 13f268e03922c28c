//! The vault service: every operation a front end needs, in one handle
//!
//! [`PromptVault`] is built once with a store backend and passed by
//! reference. It reads through the store on every call rather than caching,
//! so the store stays the single source of truth.

use crate::error::{VaultError, VaultResult};
use crate::indexer::index_vault;
use crate::writer;
use async_trait::async_trait;
use promptvault_config::IndexFailurePolicy;
use promptvault_store::{
    find_folder, Frontmatter, IndexedFolder, KeyValueStore, NamedValues, PartialRegistry,
    PromptFile, VariableRegistry, VaultStore,
};
use promptvault_templating::{Markup, TemplateEngine};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Notified after every index run with the folders now in the store
pub trait IndexObserver: Send + Sync {
    /// Called with the persisted snapshot
    fn on_indexed(&self, folders: &[IndexedFolder]);
}

/// Asks the user for a directory
#[async_trait]
pub trait FolderPicker: Send + Sync {
    /// The chosen directory, or `None` if the user cancelled
    async fn pick_folder(&self) -> Option<PathBuf>;
}

/// Handle to a prompt vault and its library of variables and partials
pub struct PromptVault {
    store: VaultStore,
    variables: VariableRegistry,
    partials: PartialRegistry,
    failure_policy: IndexFailurePolicy,
    observers: Vec<Arc<dyn IndexObserver>>,
}

impl fmt::Debug for PromptVault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptVault")
            .field("store", &self.store)
            .field("failure_policy", &self.failure_policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl PromptVault {
    /// Create a service over `backend` with the default failure policy
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        let store = VaultStore::new(backend);
        Self {
            variables: VariableRegistry::new(store.clone()),
            partials: PartialRegistry::new(store.clone()),
            store,
            failure_policy: IndexFailurePolicy::default(),
            observers: Vec::new(),
        }
    }

    /// Set what happens to the stored index when the vault root cannot be listed
    pub fn with_failure_policy(mut self, policy: IndexFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Register an observer for completed index runs
    pub fn add_observer(&mut self, observer: Arc<dyn IndexObserver>) {
        self.observers.push(observer);
    }

    /// Ask `picker` for a vault directory; nothing is stored
    pub async fn choose_vault_path(&self, picker: &dyn FolderPicker) -> Option<PathBuf> {
        let chosen = picker.pick_folder().await;
        match &chosen {
            Some(path) => debug!("Folder picker returned {}", path.display()),
            None => debug!("Folder picker was cancelled"),
        }
        chosen
    }

    /// Make `path` the active vault and index it
    pub async fn set_vault_path(&self, path: &Path) -> VaultResult<Vec<IndexedFolder>> {
        let given = path;
        let path = tokio::fs::canonicalize(given)
            .await
            .map_err(|e| vault_path_error(given, e))?;
        let meta = tokio::fs::metadata(&path)
            .await
            .map_err(|e| vault_path_error(given, e))?;
        if !meta.is_dir() {
            return Err(VaultError::NotADirectory(path));
        }

        self.store.set_vault_directory(&path).await?;
        info!("Vault directory set to {}", path.display());
        self.index_at(&path).await
    }

    /// The active vault directory, if any
    pub async fn vault_path(&self) -> VaultResult<Option<PathBuf>> {
        Ok(self.store.vault_directory().await?)
    }

    /// Re-scan the active vault
    pub async fn reindex(&self) -> VaultResult<Vec<IndexedFolder>> {
        let path = self.require_vault_path().await?;
        self.index_at(&path).await
    }

    /// The last stored index snapshot
    pub async fn indexed_folders(&self) -> VaultResult<Vec<IndexedFolder>> {
        Ok(self.store.indexed_folders().await?)
    }

    /// Prompts of the folder with slug `folder`, or `None` if there is no such folder
    pub async fn prompts_for_folder(&self, folder: &str) -> VaultResult<Option<Vec<PromptFile>>> {
        let folders = self.store.indexed_folders().await?;
        Ok(find_folder(&folders, folder).map(|found| found.prompts.clone()))
    }

    /// One prompt by folder slug and prompt slug
    pub async fn prompt(&self, folder: &str, prompt: &str) -> VaultResult<Option<PromptFile>> {
        let folders = self.store.indexed_folders().await?;
        Ok(find_folder(&folders, folder)
            .and_then(|found| found.prompt(prompt))
            .cloned())
    }

    /// Render a prompt's body against the current variables and partials
    pub async fn render_prompt(
        &self,
        folder: &str,
        prompt: &str,
        markup: Markup,
    ) -> VaultResult<String> {
        let folders = self.store.indexed_folders().await?;
        let found = find_folder(&folders, folder)
            .ok_or_else(|| VaultError::FolderNotFound(folder.to_string()))?;
        let file = found
            .prompt(prompt)
            .ok_or_else(|| VaultError::PromptNotFound {
                folder: folder.to_string(),
                prompt: prompt.to_string(),
            })?;

        let variables = self.store.variables().await?;
        let partials = self.store.partials().await?;
        Ok(TemplateEngine::with_markup(markup).render(&file.content_body, &variables, &partials))
    }

    /// All variables
    pub async fn variables(&self) -> VaultResult<NamedValues> {
        Ok(self.variables.list().await?)
    }

    /// Add a variable, returning the updated map
    pub async fn add_variable(&self, key: &str, value: &str) -> VaultResult<NamedValues> {
        Ok(self.variables.add(key, value).await?)
    }

    /// Change a variable's value, returning the updated map
    pub async fn update_variable(&self, key: &str, value: &str) -> VaultResult<NamedValues> {
        Ok(self.variables.update(key, value).await?)
    }

    /// Remove a variable, returning the updated map
    pub async fn delete_variable(&self, key: &str) -> VaultResult<NamedValues> {
        Ok(self.variables.delete(key).await?)
    }

    /// All partials
    pub async fn partials(&self) -> VaultResult<NamedValues> {
        Ok(self.partials.list().await?)
    }

    /// Add a partial, returning the updated map
    pub async fn add_partial(&self, name: &str, content: &str) -> VaultResult<NamedValues> {
        Ok(self.partials.add(name, content).await?)
    }

    /// Change a partial's content, returning the updated map
    pub async fn update_partial(&self, name: &str, content: &str) -> VaultResult<NamedValues> {
        Ok(self.partials.update(name, content).await?)
    }

    /// Remove a partial, returning the updated map
    pub async fn delete_partial(&self, name: &str) -> VaultResult<NamedValues> {
        Ok(self.partials.delete(name).await?)
    }

    /// Write a prompt file, then re-index the active vault.
    ///
    /// The store is left untouched if the write fails. Without an active
    /// vault the file is still written and the re-index is skipped.
    pub async fn save_prompt(
        &self,
        path: &Path,
        frontmatter: Option<&Frontmatter>,
        body: &str,
    ) -> VaultResult<()> {
        writer::save(path, frontmatter, body).await?;

        match self.store.vault_directory().await? {
            Some(vault) => {
                self.index_at(&vault).await?;
            }
            None => info!(
                "Saved {} with no vault configured; skipping re-index",
                path.display()
            ),
        }
        Ok(())
    }

    async fn require_vault_path(&self) -> VaultResult<PathBuf> {
        self.store
            .vault_directory()
            .await?
            .ok_or(VaultError::SetupRequired)
    }

    async fn index_at(&self, vault: &Path) -> VaultResult<Vec<IndexedFolder>> {
        let folders = match index_vault(vault).await {
            Ok(folders) => folders,
            Err(err @ VaultError::ScanFailed { .. }) => {
                warn!("{}", err);
                match self.failure_policy {
                    IndexFailurePolicy::Clear => Vec::new(),
                    IndexFailurePolicy::Keep => {
                        warn!("Keeping the previous index snapshot");
                        return Ok(self.store.indexed_folders().await?);
                    }
                }
            }
            Err(err) => return Err(err),
        };

        self.store.set_indexed_folders(&folders).await?;
        let prompt_count: usize = folders.iter().map(|f| f.prompts.len()).sum();
        info!(
            "Indexed {} folders with {} prompts from {}",
            folders.len(),
            prompt_count,
            vault.display()
        );

        for observer in &self.observers {
            observer.on_indexed(&folders);
        }
        Ok(folders)
    }
}

/// A missing path is "not a directory"; other failures keep their cause
fn vault_path_error(path: &Path, source: std::io::Error) -> VaultError {
    match source.kind() {
        std::io::ErrorKind::NotFound => VaultError::NotADirectory(path.to_path_buf()),
        _ => VaultError::Inaccessible {
            path: path.to_path_buf(),
            source,
        },
    }
}
