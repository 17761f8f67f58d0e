use std::path::Path;

use crate::agents::TdConfig;
use crate::error::ConfigError;
use crate::training::DriverConfig;

/// Top-level application configuration, loadable from TOML.
///
/// ```toml
/// seed = 42
///
/// [agent]
/// exploration_rate = 0.2
/// learning_rate = 0.2
/// discount = 0.9
///
/// [driver]
/// episodes = 50000
/// progress_interval = 1000
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base seed for agent RNGs. Unset means seeded from entropy.
    pub seed: Option<u64>,
    pub agent: TdConfig,
    pub driver: DriverConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.agent.validate()?;
        self.driver.validate()
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The default configuration as TOML, for writing a starter file.
    pub fn default_toml() -> Result<String, ConfigError> {
        Self::default().to_toml()
    }
}
