//! Test fixtures for bridge configuration tests
//! 
//! This module provides:
//! - A complete, valid raw configuration
//! - Helpers to remove or overwrite entries by path

use serde_json::{json, Value};

/// Valid EIP-55 checksummed bonder addresses
pub const BONDER_A: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
pub const BONDER_B: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

/// The smallest configuration with one route and one enabled token
pub fn minimal_config() -> Value {
    json!({
        "chains": {
            "ethereum": {"rpcUrl": "https://mainnet.example.com"},
            "optimism": {"rpcUrl": "https://optimism.example.com"}
        },
        "tokens": {"USDC": true},
        "routes": {"ethereum": {"optimism": true}},
        "fees": {"USDC": {"optimism": 18}}
    })
}

/// A configuration using every top-level section except `signer`
pub fn full_config() -> Value {
    json!({
        "network": "mainnet",
        "chains": {
            "ethereum": {"rpcUrl": "https://mainnet.example.com", "maxGasPrice": 500},
            "optimism": {"rpcUrl": "https://optimism.example.com"},
            "arbitrum": {"rpcUrl": "http://arbitrum.internal:8547"}
        },
        "sync": {},
        "tokens": {"USDC": true, "DAI": false},
        "routes": {
            "ethereum": {"optimism": true, "arbitrum": true},
            "optimism": {"arbitrum": true}
        },
        "fees": {"USDC": {"optimism": 18, "arbitrum": 18}},
        "commitTransfers": {
            "minThresholdAmount": {"USDC": {"optimism": {"arbitrum": 1000}}}
        },
        "bondWithdrawals": {},
        "settleBondedWithdrawals": {},
        "bonders": {
            "USDC": {
                "ethereum": {"optimism": BONDER_A, "arbitrum": BONDER_A},
                "optimism": {"arbitrum": BONDER_B}
            }
        },
        "vault": {
            "USDC": {
                "ethereum": {
                    "depositThresholdAmount": 100000,
                    "depositAmount": 50000,
                    "strategy": "yearn",
                    "autoDeposit": true,
                    "autoWithdraw": false
                }
            }
        },
        "watchers": {"bondWithdrawal": true, "commitTransfers": true},
        "db": {"location": "/var/lib/bridge/db"},
        "logging": {"level": "info"},
        "keystore": {"location": "/etc/bridge/keystore.json", "passwordFile": "/run/secrets/pass"},
        "metrics": {"enabled": true, "port": 8080},
        "addresses": {"location": "./addresses.json"},
        "blocklist": {"path": "./blocklist.txt", "addresses": {}}
    })
}

/// Remove the entry at `path`, panicking if a parent is missing
pub fn remove(config: &mut Value, path: &[&str]) {
    let (last, parents) = path.split_last().expect("empty path");
    let mut node = config;
    for key in parents {
        node = node.get_mut(*key).unwrap_or_else(|| panic!("missing {key}"));
    }
    node.as_object_mut()
        .expect("parent is not an object")
        .remove(*last)
        .unwrap_or_else(|| panic!("missing {last}"));
}

/// Overwrite or insert the entry at `path`
pub fn set(config: &mut Value, path: &[&str], value: Value) {
    let mut node = config;
    for key in path {
        node = &mut node[*key];
    }
    *node = value;
}
