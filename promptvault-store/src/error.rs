//! Error types for the store and the variable/partial registries

use crate::StoreKey;
use promptvault_common::{ErrorSeverity, Severity};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by store backends and the typed facade
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("Store I/O error at {}: {source}", path.display())]
    Io {
        /// The store file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object
    #[error("Store file {} is corrupt: {source}", path.display())]
    Corrupt {
        /// The store file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage
    #[error("Failed to encode '{key}': {source}")]
    Encode {
        /// Logical key being written
        key: StoreKey,
        /// Underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// A stored value does not have the expected shape
    #[error("Stored value for '{key}' has an unexpected shape: {source}")]
    Decode {
        /// Logical key being read
        key: StoreKey,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

impl Severity for StoreError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StoreError::Io { .. } => ErrorSeverity::Critical,
            StoreError::Corrupt { .. } => ErrorSeverity::Critical,
            StoreError::Encode { .. } => ErrorSeverity::Error,
            StoreError::Decode { .. } => ErrorSeverity::Error,
        }
    }
}

/// Validation and existence errors for variable and partial mutations
#[derive(Debug, Error)]
pub enum LibraryError {
    /// A required field is empty or whitespace only
    #[error("{field} must not be empty")]
    Empty {
        /// Field name, e.g. "Key" or "Content"
        field: &'static str,
    },

    /// A field exceeds its length bound
    #[error("{field} must be {max} characters or less (got {actual})")]
    TooLong {
        /// Field name
        field: &'static str,
        /// Maximum number of characters
        max: usize,
        /// Actual number of characters
        actual: usize,
    },

    /// Add was called for a name that already exists
    #[error("{kind} '{name}' already exists")]
    Duplicate {
        /// "Variable" or "Partial"
        kind: &'static str,
        /// The existing name
        name: String,
    },

    /// Update or delete was called for a name that does not exist
    #[error("{kind} '{name}' not found")]
    NotFound {
        /// "Variable" or "Partial"
        kind: &'static str,
        /// The missing name
        name: String,
    },

    /// The store itself failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Severity for LibraryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            LibraryError::Store(err) => err.severity(),
            _ => ErrorSeverity::Error,
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for registry operations
pub type LibraryResult<T> = Result<T, LibraryError>;
