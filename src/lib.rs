//! Bridge Config Validator - startup configuration checks for a multi-chain bridge node
//! 
//! This library validates a bridge operator's configuration before any
//! watcher, signer or network connection is started. Validation is split into
//! a structural pass over the raw configuration and a value pass over the
//! resolved configuration.

pub mod config;
pub mod shared;
pub mod validation;

#[cfg(test)]
mod tests;

pub use config::{Registry, ResolvedConfig, ValidatorSettings};
pub use shared::error::{AppError, AppResult};
pub use validation::{ConfigValidator, ValidationError};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
