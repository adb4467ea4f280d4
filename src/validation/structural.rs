//! Structural validation
//!
//! Checks the shape of the raw configuration: recognized keys at every level,
//! required and mutually exclusive sections, and presence of every entry the
//! fee, threshold and bonder matrices must contain.

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::registry::Registry;
use crate::validation::error::ValidationError;
use crate::validation::keys::validate_keys;
use crate::validation::matrix::{is_empty_matrix, required_cells, MatrixShape, RouteFilter, Routes};
use crate::validation::schema::{self, expect_object, is_truthy, LOG_LEVELS, OPTIONAL_SECTIONS};

/// Sets computed by the structural pass, reused when resolving
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuralSummary {
    /// Keys of the `chains` section
    pub enabled_chains: Vec<String>,
    /// Keys of the `tokens` section whose toggle is truthy
    pub enabled_tokens: Vec<String>,
}

/// Validates the raw configuration tree
pub struct StructuralValidator<'a> {
    registry: &'a Registry,
}

impl<'a> StructuralValidator<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Run every structural check in order, stopping at the first violation
    pub fn validate(&self, raw: &Value) -> Result<StructuralSummary, ValidationError> {
        let root = schema::TOP_LEVEL.check(schema::TOP_LEVEL.name, raw)?;

        let enabled_chains = self.validate_chains(root)?;
        let enabled_tokens = self.validate_tokens(root)?;
        debug!(chains = ?enabled_chains, tokens = ?enabled_tokens, "Enabled chains and tokens");

        self.validate_watchers(root)?;
        Self::validate_credentials(root)?;
        Self::validate_sections(root)?;

        let routes = Self::validate_routes(root, &enabled_chains)?;
        Self::validate_fees(root, &enabled_tokens, &routes)?;
        self.validate_thresholds(root, &enabled_tokens, &routes)?;
        Self::validate_bonders(root, &enabled_tokens, &enabled_chains)?;
        self.validate_vault(root)?;

        Ok(StructuralSummary {
            enabled_chains,
            enabled_tokens,
        })
    }

    fn validate_chains(&self, root: &Map<String, Value>) -> Result<Vec<String>, ValidationError> {
        let chains = root
            .get("chains")
            .ok_or_else(|| ValidationError::missing("chains", "a chains section is required"))?;
        let chains = expect_object("chains", chains)?;

        validate_keys("chains", self.registry.chains(), chains.keys())?;

        let base = self.registry.base_chain();
        if !chains.contains_key(base) {
            return Err(ValidationError::missing(
                format!("chains.{}", base),
                format!("the base chain \"{}\" must be configured", base),
            ));
        }

        for (chain, entry) in chains {
            schema::CHAIN_ENTRY.check(&format!("chains.{}", chain), entry)?;
        }

        Ok(chains.keys().cloned().collect())
    }

    fn validate_tokens(&self, root: &Map<String, Value>) -> Result<Vec<String>, ValidationError> {
        let Some(tokens) = root.get("tokens") else {
            return Ok(Vec::new());
        };
        let tokens = expect_object("tokens", tokens)?;

        let enabled: Vec<String> = tokens
            .iter()
            .filter(|(_, toggle)| is_truthy(toggle))
            .map(|(token, _)| token.clone())
            .collect();

        validate_keys("tokens", self.registry.tokens(), &enabled)?;
        Ok(enabled)
    }

    fn validate_watchers(&self, root: &Map<String, Value>) -> Result<(), ValidationError> {
        if let Some(watchers) = root.get("watchers") {
            let watchers = expect_object("watchers", watchers)?;
            validate_keys("watchers", self.registry.watchers(), watchers.keys())?;
        }
        Ok(())
    }

    fn validate_credentials(root: &Map<String, Value>) -> Result<(), ValidationError> {
        if root.contains_key("keystore") && root.contains_key("signer") {
            return Err(ValidationError::MutuallyExclusiveSections {
                first: "keystore".to_string(),
                second: "signer".to_string(),
            });
        }
        Ok(())
    }

    fn validate_sections(root: &Map<String, Value>) -> Result<(), ValidationError> {
        for section in OPTIONAL_SECTIONS {
            if let Some(value) = root.get(section.name) {
                section.check(section.name, value)?;
            }
        }

        if let Some(level) = root.get("logging").and_then(|l| l.get("level")) {
            let level_name = level.as_str().unwrap_or_default();
            if !LOG_LEVELS.contains(&level_name) {
                return Err(ValidationError::InvalidEnumValue {
                    path: "logging.level".to_string(),
                    value: level.as_str().map(str::to_string).unwrap_or_else(|| level.to_string()),
                    allowed: LOG_LEVELS.iter().map(|s| s.to_string()).collect(),
                });
            }
        }

        Ok(())
    }

    fn validate_routes(root: &Map<String, Value>, enabled_chains: &[String]) -> Result<Routes, ValidationError> {
        let Some(routes) = root.get("routes") else {
            return Ok(Routes::default());
        };
        let sources = expect_object("routes", routes)?;

        validate_keys("routes", enabled_chains, sources.keys())?;
        for (source, destinations) in sources {
            let path = format!("routes.{}", source);
            let destinations = expect_object(&path, destinations)?;
            validate_keys(&path, enabled_chains, destinations.keys())?;
        }

        Ok(Routes::from_value(Some(routes)))
    }

    fn validate_fees(
        root: &Map<String, Value>,
        enabled_tokens: &[String],
        routes: &Routes,
    ) -> Result<(), ValidationError> {
        let Some(fees) = root.get("fees") else {
            return Ok(());
        };
        let fee_tokens = expect_object("fees", fees)?;
        validate_keys("fees", enabled_tokens, fee_tokens.keys())?;

        for cell in required_cells(enabled_tokens, routes, MatrixShape::ByDestination, RouteFilter::All) {
            if cell.lookup(fees).map_or(true, Value::is_null) {
                return Err(ValidationError::missing(
                    cell.path("fees"),
                    format!("missing fee for token \"{}\" on chain \"{}\"", cell.token, cell.destination),
                ));
            }
        }

        for token in enabled_tokens {
            if fee_tokens.get(token).map_or(true, Value::is_null) {
                return Err(ValidationError::missing(
                    format!("fees.{}", token),
                    format!("missing fees for token \"{}\"", token),
                ));
            }
        }

        Ok(())
    }

    fn validate_thresholds(
        &self,
        root: &Map<String, Value>,
        enabled_tokens: &[String],
        routes: &Routes,
    ) -> Result<(), ValidationError> {
        let Some(thresholds) = root
            .get("commitTransfers")
            .and_then(|c| c.get("minThresholdAmount"))
            .filter(|t| !is_empty_matrix(Some(*t)))
        else {
            return Ok(());
        };
        expect_object("commitTransfers.minThresholdAmount", thresholds)?;

        let filter = RouteFilter::ExemptSource(self.registry.base_chain());
        for cell in required_cells(enabled_tokens, routes, MatrixShape::ByRoute, filter) {
            if cell.lookup(thresholds).map_or(true, Value::is_null) {
                return Err(ValidationError::missing(
                    cell.path("commitTransfers.minThresholdAmount"),
                    format!(
                        "missing minThresholdAmount for token \"{}\" from \"{}\" to \"{}\"",
                        cell.token,
                        cell.source.unwrap_or_default(),
                        cell.destination
                    ),
                ));
            }
        }

        Ok(())
    }

    fn validate_bonders(
        root: &Map<String, Value>,
        enabled_tokens: &[String],
        enabled_chains: &[String],
    ) -> Result<(), ValidationError> {
        let Some(bonders) = root.get("bonders") else {
            return Ok(());
        };
        let bonder_tokens = expect_object("bonders", bonders)?;
        validate_keys("bonders", enabled_tokens, bonder_tokens.keys())?;

        for token in enabled_tokens {
            let path = format!("bonders.{}", token);
            let sources = bonder_tokens
                .get(token)
                .ok_or_else(|| ValidationError::missing(&path, format!("missing bonders for token \"{}\"", token)))?;
            let sources = expect_object(&path, sources)?;
            validate_keys(&path, enabled_chains, sources.keys())?;

            for (source, destinations) in sources {
                let path = format!("bonders.{}.{}", token, source);
                let destinations = expect_object(&path, destinations)?;
                validate_keys(&path, enabled_chains, destinations.keys())?;
            }
        }

        Ok(())
    }

    fn validate_vault(&self, root: &Map<String, Value>) -> Result<(), ValidationError> {
        let Some(vault) = root.get("vault") else {
            return Ok(());
        };
        let tokens = expect_object("vault", vault)?;
        validate_keys("vault", self.registry.tokens(), tokens.keys())?;

        for (token, chains) in tokens {
            let path = format!("vault.{}", token);
            let chains = expect_object(&path, chains)?;
            validate_keys(&path, self.registry.chains(), chains.keys())?;

            for (chain, entry) in chains {
                schema::VAULT_ENTRY.check(&format!("vault.{}.{}", token, chain), entry)?;
            }
        }

        Ok(())
    }
}
