//! Error severity classification shared across PromptVault crates
//!
//! Each crate defines its own error enum; this module gives them a common
//! vocabulary for how bad a failure is, so the CLI can pick log levels and
//! exit codes without knowing every variant.

use std::fmt;

/// Severity levels for error classification
///
/// - **Warning**: Potential issue but the operation can proceed.
/// - **Error**: The operation failed but the system can continue.
/// - **Critical**: The system cannot continue, e.g. the store cannot be persisted.
///
/// # Examples
///
/// ```rust
/// use promptvault_common::ErrorSeverity;
///
/// // Error: a duplicate variable key rejects this add, nothing else is affected
/// let duplicate = ErrorSeverity::Error;
///
/// // Critical: the configuration store cannot be written
/// let store = ErrorSeverity::Critical;
/// assert!(store > duplicate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed
    Warning,

    /// Operation failed but system can continue
    Error,

    /// System cannot continue, requires immediate attention
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Trait for error types that have severity levels
///
/// All PromptVault error types implement this trait so that callers can
/// classify failures consistently.
///
/// # Example
///
/// ```rust
/// use promptvault_common::{ErrorSeverity, Severity};
///
/// #[derive(Debug)]
/// enum MyError {
///     StoreCorrupted,
///     NotFound,
/// }
///
/// impl Severity for MyError {
///     fn severity(&self) -> ErrorSeverity {
///         match self {
///             MyError::StoreCorrupted => ErrorSeverity::Critical,
///             MyError::NotFound => ErrorSeverity::Error,
///         }
///     }
/// }
///
/// assert_eq!(MyError::StoreCorrupted.severity(), ErrorSeverity::Critical);
/// ```
pub trait Severity {
    /// Get the severity level of this error
    fn severity(&self) -> ErrorSeverity;
}

/// Error chain formatter for detailed error reporting
pub struct ErrorChain<'a>(&'a dyn std::error::Error);

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;

        let mut current = self.0.source();
        let mut level = 1;

        while let Some(err) = current {
            write!(f, "\n{:indent$}Caused by: {}", "", err, indent = level * 2)?;
            current = err.source();
            level += 1;
        }

        Ok(())
    }
}

/// Extension trait for error types to format the full error chain
pub trait ErrorChainExt {
    /// Format the full error chain
    fn error_chain(&self) -> ErrorChain<'_>;
}

impl<E: std::error::Error> ErrorChainExt for E {
    fn error_chain(&self) -> ErrorChain<'_> {
        ErrorChain(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Wrapped {
        source: io::Error,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "failed to write store")
        }
    }

    impl std::error::Error for Wrapped {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.source)
        }
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
        assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
        assert_eq!(ErrorSeverity::Critical.to_string(), "critical");
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let error = Wrapped {
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem"),
        };

        let chain = error.error_chain().to_string();
        assert_eq!(
            chain,
            "failed to write store\n  Caused by: read-only filesystem"
        );
    }

    #[test]
    fn test_error_chain_single_error() {
        let error = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert_eq!(error.error_chain().to_string(), "missing");
    }
}
