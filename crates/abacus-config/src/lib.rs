//! Abacus Configuration Management
//!
//! Loads calculator and logging settings from built-in defaults, an optional TOML file
//! and `ABACUS_*` environment variables, in that order of precedence.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{AbacusConfig, CalculatorConfig, ConfigStore, LoggingConfig};
