//! Configuration provider using Figment

use crate::discovery::{ConfigFile, ConfigFormat, FileDiscovery};
use crate::types::AppConfig;
use crate::ConfigResult;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, trace};

/// Prefix for environment overrides, e.g. `PROMPTVAULT_LOG__LEVEL=debug`
pub const ENV_PREFIX: &str = "PROMPTVAULT_";

/// Configuration provider using figment
///
/// Sources are merged in precedence order (later sources override earlier ones):
/// 1. Default values
/// 2. Global configuration file
/// 3. Project configuration file
/// 4. Environment variables (`PROMPTVAULT_`, `__` separates nested keys)
///
/// Nothing is cached; every call reads the sources again.
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
}

impl ConfigProvider {
    /// Provider over the standard file locations
    pub fn new() -> Self {
        Self {
            discovery: FileDiscovery::new(),
        }
    }

    /// Provider over a custom discovery, mostly for tests
    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self { discovery }
    }

    /// Load the merged application configuration
    pub fn load(&self) -> ConfigResult<AppConfig> {
        let config: AppConfig = self.build_figment().extract()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    fn build_figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        for config_file in self.discovery.discover_all() {
            trace!(
                "Loading config file: {} ({:?})",
                config_file.path.display(),
                config_file.format
            );
            figment = figment.merge(Self::file_provider(&config_file));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn file_provider(config_file: &ConfigFile) -> Figment {
        let path = &config_file.path;
        match config_file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }
}
