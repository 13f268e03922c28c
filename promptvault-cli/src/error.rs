//! Error handling for the PromptVault CLI
//!
//! Library errors are converted into a [`CliError`] carrying the message
//! to print and the exit code to return.

use std::error::Error;
use std::fmt;

use colored::Colorize;
use promptvault_common::{ErrorChainExt, ErrorSeverity, Severity};
use promptvault_config::ConfigError;
use promptvault_prompts::VaultError;

use crate::exit_codes::{EXIT_ERROR, EXIT_SETUP_REQUIRED, EXIT_SUCCESS, EXIT_WARNING};

/// CLI-specific result type that preserves error information
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type that includes both error information and suggested exit code
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    /// Create a new CLI error with a message and exit code
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a CLI error that keeps `source` for the error chain
    pub fn with_source(
        message: impl Into<String>,
        exit_code: i32,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: Some(Box::new(source)),
        }
    }

    /// Get the full error chain as a formatted string
    pub fn full_chain(&self) -> String {
        self.error_chain().to_string()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

fn exit_code_for(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Warning => EXIT_WARNING,
        ErrorSeverity::Error | ErrorSeverity::Critical => EXIT_ERROR,
    }
}

impl From<VaultError> for CliError {
    fn from(error: VaultError) -> Self {
        let exit_code = if error.is_setup_required() {
            EXIT_SETUP_REQUIRED
        } else {
            exit_code_for(error.severity())
        };
        // Vault error messages already include their cause
        Self::new(error.to_string(), exit_code)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        Self::new(format!("Configuration error: {error}"), EXIT_ERROR)
    }
}

impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> Self {
        // `{:#}` keeps the context chain on one line
        Self::new(format!("{error:#}"), EXIT_ERROR)
    }
}

/// Convert a CliResult to an exit code, printing the full error chain if needed
pub fn handle_cli_result<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed with exit code {}", e.exit_code);
            eprintln!("{} {}", "Error:".red().bold(), e.full_chain());
            e.exit_code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptvault_prompts::WriteError;
    use promptvault_store::LibraryError;

    #[test]
    fn test_setup_required_has_its_own_exit_code() {
        let err = CliError::from(VaultError::SetupRequired);
        assert_eq!(err.exit_code, EXIT_SETUP_REQUIRED);
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let err = CliError::from(VaultError::FolderNotFound("work".to_string()));
        assert_eq!(err.exit_code, EXIT_WARNING);

        let err = CliError::from(VaultError::Library(LibraryError::Empty { field: "Key" }));
        assert_eq!(err.exit_code, EXIT_ERROR);
        assert_eq!(err.message, "Key must not be empty");
    }

    #[test]
    fn test_anyhow_context_is_kept() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = CliError::from(anyhow::Error::new(io).context("Failed to read body.md"));
        assert_eq!(err.exit_code, EXIT_ERROR);
        assert_eq!(err.message, "Failed to read body.md: no such file");
    }

    #[test]
    fn test_full_chain_indents_nested_sources() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only filesystem");
        let write = WriteError::Io {
            path: std::path::PathBuf::from("/v/f/p.md"),
            source: io,
        };
        let err = CliError::with_source("Failed to save /v/f/p.md", EXIT_ERROR, write);
        assert_eq!(
            err.full_chain(),
            "Failed to save /v/f/p.md\n  Caused by: Failed to write /v/f/p.md: read-only filesystem\n    Caused by: read-only filesystem"
        );
    }

    #[test]
    fn test_full_chain_includes_sources() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = CliError::with_source("Failed to read body.md", EXIT_ERROR, io);
        assert_eq!(
            err.full_chain(),
            "Failed to read body.md\n  Caused by: no such file"
        );
    }
}
