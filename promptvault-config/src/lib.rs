//! PromptVault configuration management using Figment
//!
//! Settings are merged from defaults, a global file in the user's config
//! directory, a project file in `./.promptvault/`, and `PROMPTVAULT_`
//! environment variables, in that order of increasing precedence.
//!
//! ```no_run
//! use promptvault_config::load_configuration;
//!
//! let config = load_configuration()?;
//! println!("store lives at {}", config.store_path()?.display());
//! # Ok::<(), promptvault_config::ConfigError>(())
//! ```
//!
//! ## Example TOML Configuration
//!
//! ```toml
//! [store]
//! path = "/home/me/.local/share/promptvault/store.json"
//!
//! [index]
//! on_failure = "keep"   # or "clear"
//!
//! [render]
//! markup = "ansi"       # html, ansi or plain
//!
//! [log]
//! level = "info"
//! ```

pub mod discovery;
pub mod error;
pub mod provider;
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::ConfigError;
pub use provider::{ConfigProvider, ENV_PREFIX};
pub use types::{
    AppConfig, IndexFailurePolicy, IndexSettings, LogSettings, MarkupStyle, RenderSettings,
    StoreSettings, STORE_FILE_NAME,
};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load configuration from all standard sources
pub fn load_configuration() -> ConfigResult<AppConfig> {
    ConfigProvider::new().load()
}
