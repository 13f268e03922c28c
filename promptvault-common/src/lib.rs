//! # PromptVault Common
//!
//! Foundational pieces shared by every PromptVault crate.
//!
//! ## Modules
//!
//! - [`error`] - Severity classification and error chain formatting
//! - [`logging`] - Helpers for readable structured values in log lines
//! - [`slug`] - Deterministic URL-safe identifiers for folders and prompts

pub mod error;
pub mod logging;
pub mod slug;

// Re-export error types for convenience
pub use error::{ErrorChain, ErrorChainExt, ErrorSeverity, Severity};

// Re-export logging helpers for convenience
pub use logging::Pretty;

// Re-export slug functions for convenience
pub use slug::{slugify, slugify_file_name, UNTITLED_SLUG};
