//! Error types for vault operations

use promptvault_common::{ErrorSeverity, Severity};
use promptvault_store::{LibraryError, StoreError};
use std::path::PathBuf;
use thiserror::Error;

/// Failure writing a prompt file
#[derive(Debug, Error)]
pub enum WriteError {
    /// The front-matter could not be serialized to YAML
    #[error("Failed to serialize frontmatter: {0}")]
    Serialize(#[from] serde_yaml_ng::Error),

    /// The serialized header would contain the `---` delimiter
    #[error("Frontmatter key '{key}' contains the '---' delimiter and cannot be saved")]
    DelimiterInHeader {
        /// Offending key
        key: String,
    },

    /// The file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Target file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the vault service
#[derive(Debug, Error)]
pub enum VaultError {
    /// No vault directory has been configured yet
    #[error("No vault directory is configured; choose one with `pvault vault choose` or `pvault vault set <path>`")]
    SetupRequired,

    /// The chosen vault path is not a directory
    #[error("Vault path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The chosen vault path exists but could not be inspected
    #[error("Cannot access vault path {}: {source}", path.display())]
    Inaccessible {
        /// Path as given
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The vault root could not be listed
    #[error("Failed to list vault directory {}: {source}", path.display())]
    ScanFailed {
        /// Vault root
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The folder slug does not match any indexed folder
    #[error("Folder '{0}' not found")]
    FolderNotFound(String),

    /// The prompt slug does not match any prompt in the folder
    #[error("Prompt '{prompt}' not found in folder '{folder}'")]
    PromptNotFound {
        /// Folder slug
        folder: String,
        /// Prompt slug
        prompt: String,
    },

    /// Saving a prompt failed; the store was not touched
    #[error(transparent)]
    Write(#[from] WriteError),

    /// A variable or partial mutation was rejected
    #[error(transparent)]
    Library(#[from] LibraryError),

    /// The store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl VaultError {
    /// True when the caller should run the vault setup flow
    pub fn is_setup_required(&self) -> bool {
        matches!(self, VaultError::SetupRequired)
    }
}

impl Severity for WriteError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }
}

impl Severity for VaultError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            VaultError::SetupRequired => ErrorSeverity::Warning,
            VaultError::FolderNotFound(_) => ErrorSeverity::Warning,
            VaultError::PromptNotFound { .. } => ErrorSeverity::Warning,
            VaultError::NotADirectory(_) => ErrorSeverity::Error,
            VaultError::Inaccessible { .. } => ErrorSeverity::Error,
            VaultError::ScanFailed { .. } => ErrorSeverity::Error,
            VaultError::Write(err) => err.severity(),
            VaultError::Library(err) => err.severity(),
            VaultError::Store(err) => err.severity(),
        }
    }
}

/// Result type for vault operations
pub type VaultResult<T> = Result<T, VaultError>;
