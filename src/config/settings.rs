//! Validator settings
//! 
//! Settings for the validation tool itself, loaded from an optional
//! `bridge-validator` file and `BRIDGE_VALIDATOR__*` environment variables.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::registry::DEFAULT_BASE_CHAIN;
use crate::shared::error::{AppError, AppResult};

/// Validation tool settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ValidatorSettings {
    /// Path to the node configuration file to validate
    #[validate(length(min = 1))]
    pub config_path: String,

    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(function = "validate_log_level"))]
    pub log_level: String,

    /// Log format (text, json)
    #[validate(custom(function = "validate_log_format"))]
    pub log_format: String,

    /// Base settlement chain
    #[validate(length(min = 1))]
    pub base_chain: String,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            config_path: "config.json".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            base_chain: DEFAULT_BASE_CHAIN.to_string(),
        }
    }
}

impl ValidatorSettings {
    /// Load settings from file and environment variables
    pub fn load() -> AppResult<Self> {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("config_path", defaults.config_path)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", defaults.log_format)?
            .set_default("base_chain", defaults.base_chain)?
            .add_source(config::File::with_name("bridge-validator").required(false))
            .add_source(config::Environment::with_prefix("BRIDGE_VALIDATOR").separator("__"))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build settings: {}", e)))?;

        let settings: ValidatorSettings = settings
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize settings: {}", e)))?;

        settings
            .validate()
            .map_err(|e| AppError::Config(format!("Settings validation failed: {}", e)))?;

        Ok(settings)
    }
}

fn validate_log_level(level: &str) -> Result<(), validator::ValidationError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_log_level")),
    }
}

fn validate_log_format(format: &str) -> Result<(), validator::ValidationError> {
    match format {
        "text" | "json" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_log_format")),
    }
}
