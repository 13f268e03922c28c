//! Error types for the PromptVault configuration system

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration parsing failed
    #[error("Failed to parse configuration: {source}")]
    ParseError {
        /// Underlying figment error, which names the offending key and source
        #[source]
        source: Box<figment::Error>,
    },

    /// The platform configuration directory could not be determined
    #[error("Unable to determine the user configuration directory")]
    ConfigDirectoryNotFound,

    /// A configured path is not usable
    #[error("Invalid path for '{key}': {}", path.display())]
    InvalidPath {
        /// Dotted configuration key
        key: String,
        /// The rejected path
        path: PathBuf,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError {
            source: Box::new(error),
        }
    }
}
