//! Value validation
//!
//! Runs on a configuration that already passed the structural pass and checks
//! field-level semantics: types, ranges, URL and address formats, and enum
//! membership.

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::registry::Registry;
use crate::config::resolved::ResolvedConfig;
use crate::validation::checksum::AddressChecksum;
use crate::validation::error::{ValidationError, ValueKind};
use crate::validation::matrix::{is_empty_matrix, present_cells, required_cells, MatrixShape, RouteFilter, Routes};
use crate::validation::schema::{self, check_fields, expect_object};

/// Validates the resolved configuration
pub struct ValueValidator<'a, C: AddressChecksum + ?Sized> {
    registry: &'a Registry,
    checksum: &'a C,
}

impl<'a, C: AddressChecksum + ?Sized> ValueValidator<'a, C> {
    pub fn new(registry: &'a Registry, checksum: &'a C) -> Self {
        Self { registry, checksum }
    }

    /// Run every value check in order, stopping at the first violation
    pub fn validate(&self, config: &ResolvedConfig) -> Result<(), ValidationError> {
        self.validate_networks(config)?;
        self.validate_thresholds(config)?;
        self.validate_bonders(config)?;
        self.validate_vault(config)?;
        self.validate_blocklist(config)?;
        Ok(())
    }

    fn validate_networks(&self, config: &ResolvedConfig) -> Result<(), ValidationError> {
        for (chain, network) in &config.networks {
            let path = format!("networks.{}", chain);
            let network = expect_object(&path, network)?;
            check_fields(&path, network, schema::NETWORK_FIELDS)?;

            let rpc_url = network.get("rpcUrl").and_then(Value::as_str).unwrap_or_default();
            validate_rpc_url(&format!("{}.rpcUrl", path), rpc_url)?;
            debug!(chain = %chain, "Network configuration is valid");
        }
        Ok(())
    }

    fn validate_thresholds(&self, config: &ResolvedConfig) -> Result<(), ValidationError> {
        let Some(thresholds) = config.min_threshold_amount().filter(|t| !is_empty_matrix(Some(*t))) else {
            return Ok(());
        };

        let routes = Routes::from_value(config.routes.as_ref());
        let filter = RouteFilter::ExemptSource(self.registry.base_chain());
        for cell in required_cells(&config.enabled_tokens, &routes, MatrixShape::ByRoute, filter) {
            let value = cell.lookup(thresholds);
            if !value.is_some_and(Value::is_number) {
                return Err(ValidationError::type_mismatch(
                    cell.path("commitTransfers.minThresholdAmount"),
                    ValueKind::Number,
                    value,
                ));
            }
        }
        Ok(())
    }

    fn validate_bonders(&self, config: &ResolvedConfig) -> Result<(), ValidationError> {
        let Some(bonders) = config.bonders.as_ref() else {
            return Ok(());
        };

        for (cell, value) in present_cells(bonders, &config.enabled_tokens) {
            let path = cell.path("bonders");
            let address = value
                .as_str()
                .ok_or_else(|| ValidationError::type_mismatch(&path, ValueKind::String, Some(value)))?;

            self.checksum
                .checksum(address)
                .map_err(|reason| ValidationError::InvalidFormat {
                    path: path.clone(),
                    format: "address".to_string(),
                    reason: format!("\"{}\": {}", address, reason),
                })?;
        }
        Ok(())
    }

    fn validate_vault(&self, config: &ResolvedConfig) -> Result<(), ValidationError> {
        let Some(vault) = config.vault.as_ref().and_then(Value::as_object) else {
            return Ok(());
        };

        for (token, chains) in vault {
            let Some(chains) = chains.as_object() else {
                continue;
            };
            for (chain, entry) in chains {
                let path = format!("vault.{}.{}", token, chain);
                let entry = expect_object(&path, entry)?;

                check_fields(&path, entry, schema::VAULT_AUTO_DEPOSIT)?;
                if entry.get("autoDeposit").and_then(Value::as_bool) == Some(true) {
                    check_fields(&path, entry, schema::VAULT_DEPOSIT_AMOUNTS)?;
                }
                check_fields(&path, entry, schema::VAULT_STRATEGY_FIELDS)?;
            }
        }
        Ok(())
    }

    fn validate_blocklist(&self, config: &ResolvedConfig) -> Result<(), ValidationError> {
        if let Some(blocklist) = config.blocklist.as_ref() {
            let blocklist = expect_object("blocklist", blocklist)?;
            check_fields("blocklist", blocklist, schema::BLOCKLIST_FIELDS)?;
        }
        Ok(())
    }
}

/// Require a parseable URL with a host and an http or https scheme
pub fn validate_rpc_url(path: &str, rpc_url: &str) -> Result<(), ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidFormat {
        path: path.to_string(),
        format: "url".to_string(),
        reason,
    };

    let url = Url::parse(rpc_url).map_err(|e| invalid(format!("\"{}\": {}", rpc_url, e)))?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(format!("\"{}\" has no host", rpc_url)));
    }

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("\"{}\" uses unsupported scheme \"{}\"", rpc_url, other))),
    }
}
