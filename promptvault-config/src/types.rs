//! Strongly typed application settings

use crate::discovery::APP_DIR_NAME;
use crate::error::ConfigError;
use crate::ConfigResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the JSON store inside the PromptVault config directory
pub const STORE_FILE_NAME: &str = "store.json";

/// Complete PromptVault configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the key-value store lives
    pub store: StoreSettings,
    /// Vault indexing behavior
    pub index: IndexSettings,
    /// Template rendering behavior
    pub render: RenderSettings,
    /// Logging defaults
    pub log: LogSettings,
}

impl AppConfig {
    /// Resolve the store file location.
    ///
    /// An explicit `store.path` wins; otherwise the store lives at
    /// `<config dir>/promptvault/store.json`.
    pub fn store_path(&self) -> ConfigResult<PathBuf> {
        match &self.store.path {
            Some(path) if path.as_os_str().is_empty() => Err(ConfigError::InvalidPath {
                key: "store.path".to_string(),
                path: path.clone(),
            }),
            Some(path) => Ok(path.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
                .ok_or(ConfigError::ConfigDirectoryNotFound),
        }
    }
}

/// Store location settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Explicit path to the JSON store file
    pub path: Option<PathBuf>,
}

/// Vault indexing settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSettings {
    /// What to do with the stored index when the vault root cannot be listed
    pub on_failure: IndexFailurePolicy,
}

/// Policy applied when the vault root directory cannot be listed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexFailurePolicy {
    /// Persist an empty index, discarding the previous snapshot
    #[default]
    Clear,
    /// Leave the last good snapshot in the store
    Keep,
}

/// Rendering settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Marker style used when rendering prompt bodies
    pub markup: MarkupStyle,
}

/// How resolved, unresolved and partial markers are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupStyle {
    /// Styled HTML spans and divs
    #[default]
    Html,
    /// Colored terminal output
    Ansi,
    /// No markers at all
    Plain,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default `EnvFilter` directive when neither flags nor RUST_LOG apply
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
