//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{AbacusConfig, ConfigStore, LOG_LEVELS},
};

/// Configuration manager
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Create with custom config path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: "ABACUS".to_string(),
        }
    }

    /// Use a different environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("abacus")
            .join("config.toml")
    }
}

impl ConfigStore for ConfigManager {
    fn load_config(&self) -> Result<AbacusConfig> {
        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: AbacusConfig = builder.build()?.try_deserialize()?;
        self.validate_config(&config)?;
        debug!(path = %self.config_path.display(), "Loaded configuration");
        Ok(config)
    }

    fn save_config(&self, config: &AbacusConfig) -> Result<()> {
        self.validate_config(config)?;
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    fn validate_config(&self, config: &AbacusConfig) -> Result<()> {
        if !config.calculator.initial_value.is_finite() {
            return Err(ConfigError::validation(
                "Initial value must be a finite number",
            ));
        }
        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::validation(format!(
                "Unknown log level '{}', expected one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let manager = ConfigManager::new();
        assert!(manager.config_path().ends_with("abacus/config.toml"));
    }

    #[test]
    fn test_validate_rejects_non_finite_initial_value() {
        let manager = ConfigManager::with_path("unused.toml");
        let mut config = AbacusConfig::default();
        config.calculator.initial_value = f64::NAN;
        assert!(matches!(
            manager.validate_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_log_level_is_case_insensitive() {
        let manager = ConfigManager::with_path("unused.toml");
        let mut config = AbacusConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert!(manager.validate_config(&config).is_ok());

        config.logging.level = "loud".to_string();
        assert!(manager.validate_config(&config).is_err());
    }
}
