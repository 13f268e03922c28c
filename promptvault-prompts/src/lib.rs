//! # PromptVault Prompts
//!
//! Everything that touches prompt files on disk, plus the service that ties
//! the vault, the store and the template engine together.
//!
//! ## Modules
//!
//! - [`frontmatter`] - split a prompt file into YAML header and body
//! - [`indexer`] - two-level scan of a vault directory
//! - [`writer`] - write a prompt file back
//! - [`service`] - [`PromptVault`], the handle front ends talk to
//!
//! ```no_run
//! use promptvault_prompts::PromptVault;
//! use promptvault_store::JsonFileStore;
//! use promptvault_templating::Markup;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # async fn demo() -> promptvault_prompts::VaultResult<()> {
//! let vault = PromptVault::new(Arc::new(JsonFileStore::new("/tmp/promptvault/store.json")));
//! let folders = vault.set_vault_path(Path::new("/home/me/prompts")).await?;
//! if let Some(prompt) = folders.first().and_then(|f| f.prompts.first()) {
//!     let text = vault
//!         .render_prompt(&folders[0].slug, &prompt.slug, Markup::Plain)
//!         .await?;
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod frontmatter;
pub mod indexer;
pub mod service;
pub mod writer;

pub use error::{VaultError, VaultResult, WriteError};
pub use frontmatter::{parse_frontmatter, ParsedPrompt};
pub use indexer::{build_prompt_file, index_vault, FRONTMATTER_ERROR_PREFIX};
pub use service::{FolderPicker, IndexObserver, PromptVault};
pub use writer::{save, serialize_prompt};
