//! Known chains, tokens and watchers
//!
//! The registry is the closed set of identifiers the node recognizes. It is
//! passed into the validators explicitly.

use crate::shared::error::{AppError, AppResult};

pub const DEFAULT_BASE_CHAIN: &str = "ethereum";

pub const DEFAULT_CHAINS: &[&str] = &[
    "ethereum",
    "optimism",
    "arbitrum",
    "polygon",
    "gnosis",
    "nova",
    "base",
    "linea",
    "polygonzk",
];

pub const DEFAULT_TOKENS: &[&str] = &[
    "USDC", "USDT", "DAI", "ETH", "MATIC", "HOP", "SNX", "sUSD", "rETH", "MAGIC",
];

pub const DEFAULT_WATCHERS: &[&str] = &[
    "bondTransferRoot",
    "bondWithdrawal",
    "challenge",
    "commitTransfers",
    "settleBondedWithdrawals",
    "confirmRoots",
    "L1ToL2Relay",
];

/// Closed enumerations of supported chains, tokens and watchers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    chains: Vec<String>,
    tokens: Vec<String>,
    watchers: Vec<String>,
    base_chain: String,
}

impl Registry {
    /// Create a registry. The base chain must be one of `chains`.
    pub fn new(
        chains: Vec<String>,
        tokens: Vec<String>,
        watchers: Vec<String>,
        base_chain: impl Into<String>,
    ) -> AppResult<Self> {
        let base_chain = base_chain.into();
        if !chains.contains(&base_chain) {
            return Err(AppError::Config(format!(
                "base chain \"{}\" is not a known chain; known chains are: {}",
                base_chain,
                chains.join(", ")
            )));
        }

        Ok(Self {
            chains,
            tokens,
            watchers,
            base_chain,
        })
    }

    /// Replace the base settlement chain
    pub fn with_base_chain(self, base_chain: &str) -> AppResult<Self> {
        Self::new(self.chains, self.tokens, self.watchers, base_chain)
    }

    pub fn chains(&self) -> &[String] {
        &self.chains
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn watchers(&self) -> &[String] {
        &self.watchers
    }

    pub fn base_chain(&self) -> &str {
        &self.base_chain
    }
}

impl Default for Registry {
    fn default() -> Self {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            chains: owned(DEFAULT_CHAINS),
            tokens: owned(DEFAULT_TOKENS),
            watchers: owned(DEFAULT_WATCHERS),
            base_chain: DEFAULT_BASE_CHAIN.to_string(),
        }
    }
}
