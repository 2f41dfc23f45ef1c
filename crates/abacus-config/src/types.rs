//! Core configuration types and data structures

use serde::{Deserialize, Serialize};

/// Log levels accepted by [`LoggingConfig::level`]
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AbacusConfig {
    /// Calculator configuration
    pub calculator: CalculatorConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Calculator-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Value a fresh accumulator starts from
    pub initial_value: f64,
    /// Refuse commands whose undo cannot restore the previous value
    pub strict_operands: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level written to stderr
    pub level: String,
    /// Include the event target in log lines
    pub show_target: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            initial_value: 0.0,
            strict_operands: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            show_target: false,
        }
    }
}

/// Loading, saving and validating configuration
pub trait ConfigStore {
    /// Load configuration
    fn load_config(&self) -> Result<AbacusConfig, crate::error::ConfigError>;
    /// Save configuration
    fn save_config(&self, config: &AbacusConfig) -> Result<(), crate::error::ConfigError>;
    /// Validate configuration
    fn validate_config(&self, config: &AbacusConfig) -> Result<(), crate::error::ConfigError>;
}
