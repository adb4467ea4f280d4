//! Resolved configuration
//!
//! The value pass reads this view rather than the raw tree. Section contents
//! stay as JSON values so that type errors remain visible to validation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validation::structural::StructuralSummary;

/// Configuration after the structural pass, as handed to the value pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    /// Per-chain network parameters: `{rpcUrl, maxGasPrice?, waitConfirmations?}`
    pub networks: Map<String, Value>,
    pub routes: Option<Value>,
    pub fees: Option<Value>,
    pub commit_transfers: Option<Value>,
    pub bonders: Option<Value>,
    pub vault: Option<Value>,
    pub blocklist: Option<Value>,
    pub enabled_tokens: Vec<String>,
}

impl ResolvedConfig {
    /// Build the resolved view of a structurally valid raw configuration
    pub fn from_raw(raw: &Value, summary: &StructuralSummary) -> Self {
        let section = |name: &str| raw.get(name).filter(|v| !v.is_null()).cloned();

        let networks = raw
            .get("chains")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Self {
            networks,
            routes: section("routes"),
            fees: section("fees"),
            commit_transfers: section("commitTransfers"),
            bonders: section("bonders"),
            vault: section("vault"),
            blocklist: section("blocklist"),
            enabled_tokens: summary.enabled_tokens.clone(),
        }
    }

    /// `commitTransfers.minThresholdAmount`, if configured
    pub fn min_threshold_amount(&self) -> Option<&Value> {
        self.commit_transfers
            .as_ref()
            .and_then(|c| c.get("minThresholdAmount"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_copies_sections() {
        let raw = json!({
            "chains": {"ethereum": {"rpcUrl": "https://rpc.example.com"}},
            "tokens": {"USDC": true},
            "commitTransfers": {"minThresholdAmount": {}},
            "blocklist": null
        });
        let summary = StructuralSummary {
            enabled_chains: vec!["ethereum".to_string()],
            enabled_tokens: vec!["USDC".to_string()],
        };

        let resolved = ResolvedConfig::from_raw(&raw, &summary);
        assert_eq!(resolved.networks.len(), 1);
        assert_eq!(resolved.enabled_tokens, vec!["USDC".to_string()]);
        assert_eq!(resolved.min_threshold_amount(), Some(&json!({})));
        assert!(resolved.blocklist.is_none());
        assert!(resolved.bonders.is_none());
    }
}
