//! Startup configuration validation
//!
//! Validation runs in two passes. The structural pass checks the raw
//! configuration's shape; only if it succeeds is the resolved configuration
//! built and handed to the value pass. Both passes stop at the first
//! violation.

pub mod checksum;
pub mod error;
pub mod keys;
pub mod matrix;
pub mod schema;
pub mod structural;
pub mod values;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::registry::Registry;
use crate::config::resolved::ResolvedConfig;

pub use checksum::{AddressChecksum, Eip55Checksum};
pub use error::{ValidationError, ValidationErrorKind, ValueKind};
pub use keys::validate_keys;
pub use structural::{StructuralSummary, StructuralValidator};
pub use values::ValueValidator;

/// Two-pass configuration validator
pub struct ConfigValidator<C: AddressChecksum = Eip55Checksum> {
    registry: Registry,
    checksum: C,
}

impl ConfigValidator<Eip55Checksum> {
    /// Create a validator using EIP-55 address checksums
    pub fn new(registry: Registry) -> Self {
        Self::with_checksum(registry, Eip55Checksum)
    }
}

impl<C: AddressChecksum> ConfigValidator<C> {
    pub fn with_checksum(registry: Registry, checksum: C) -> Self {
        Self { registry, checksum }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Structural pass over the raw configuration
    pub fn validate_structure(&self, raw: &Value) -> Result<StructuralSummary, ValidationError> {
        debug!("Running structural validation");
        StructuralValidator::new(&self.registry).validate(raw)
    }

    /// Value pass over the resolved configuration
    pub fn validate_values(&self, resolved: &ResolvedConfig) -> Result<(), ValidationError> {
        debug!("Running value validation");
        ValueValidator::new(&self.registry, &self.checksum).validate(resolved)
    }

    /// Run both passes in order and return the resolved configuration
    pub fn validate_startup(&self, raw: &Value) -> Result<ResolvedConfig, ValidationError> {
        let summary = self.validate_structure(raw)?;
        let resolved = ResolvedConfig::from_raw(raw, &summary);
        self.validate_values(&resolved)?;

        info!(
            chains = resolved.networks.len(),
            tokens = ?resolved.enabled_tokens,
            "Configuration validated"
        );
        Ok(resolved)
    }
}
