//! Logging utilities module
//! 
//! This module provides centralized logging functionality and utilities.

use tracing::{error, info};

use crate::shared::error::{AppError, AppResult};
use crate::validation::error::ValidationError;

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level and format (`text` or `json`)
    pub fn initialize(level: &str, format: &str) -> AppResult<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let result = match format {
            "json" => tracing::subscriber::set_global_default(builder.json().finish()),
            _ => tracing::subscriber::set_global_default(builder.finish()),
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log a rejected configuration with the offending path
    pub fn log_rejection(source: &str, err: &ValidationError) {
        error!(
            source = %source,
            kind = %err.kind(),
            path = %err.path(),
            error = %err,
            "Configuration rejected"
        );
    }

    /// Log an accepted configuration
    pub fn log_acceptance(source: &str, chains: usize, tokens: &[String]) {
        info!(
            source = %source,
            chains = %chains,
            tokens = ?tokens,
            "Configuration accepted"
        );
    }
}
