//! Configuration file discovery
//!
//! Looks for `config.{toml,yaml,yml,json}` in the global PromptVault
//! directory and in the project-local `.promptvault/` directory. Project
//! files take precedence over global ones.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Base name of configuration files
pub const CONFIG_FILE_STEM: &str = "config";

/// Name of the per-user and per-project configuration directories
pub const APP_DIR_NAME: &str = "promptvault";

/// Name of the project-local configuration directory
pub const PROJECT_DIR_NAME: &str = ".promptvault";

const EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Represents a discovered configuration file with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Full path to the configuration file
    pub path: PathBuf,
    /// Detected format of the file
    pub format: ConfigFormat,
    /// Where the file was found
    pub scope: ConfigScope,
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (.toml extension)
    Toml,
    /// YAML format (.yaml or .yml extensions)
    Yaml,
    /// JSON format (.json extension)
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration scope indicating where the file was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    /// Global configuration from the user's config directory
    Global,
    /// Project configuration from ./.promptvault/
    Project,
}

/// File discovery service for finding configuration files
#[derive(Debug, Clone, Default)]
pub struct FileDiscovery {
    global_dir: Option<PathBuf>,
    project_dir: Option<PathBuf>,
}

impl FileDiscovery {
    /// Discovery over the standard global and project directories
    pub fn new() -> Self {
        let global_dir = dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME));
        let project_dir = std::env::current_dir()
            .ok()
            .map(|dir| dir.join(PROJECT_DIR_NAME));
        debug!(
            "FileDiscovery using global={:?} project={:?}",
            global_dir, project_dir
        );
        Self {
            global_dir,
            project_dir,
        }
    }

    /// Discovery over explicit directories
    pub fn with_directories(global_dir: Option<PathBuf>, project_dir: Option<PathBuf>) -> Self {
        Self {
            global_dir,
            project_dir,
        }
    }

    /// Discover all configuration files, lowest precedence first
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let mut files = Vec::new();
        if let Some(dir) = &self.global_dir {
            files.extend(Self::discover_in(dir, ConfigScope::Global));
        }
        if let Some(dir) = &self.project_dir {
            files.extend(Self::discover_in(dir, ConfigScope::Project));
        }
        files
    }

    fn discover_in(dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        EXTENSIONS
            .iter()
            .filter_map(|ext| {
                let path = dir.join(format!("{CONFIG_FILE_STEM}.{ext}"));
                if !path.is_file() {
                    return None;
                }
                trace!("Found {:?} config file {}", scope, path.display());
                ConfigFormat::from_extension(ext).map(|format| ConfigFile {
                    path,
                    format,
                    scope,
                })
            })
            .collect()
    }
}
