//! Section schema descriptors
//!
//! Allowed-key sets and per-field expectations are declared here once and
//! interpreted by [`SectionSchema::check`] and [`check_fields`].

use serde_json::{Map, Value};

use crate::validation::error::{ValidationError, ValueKind};
use crate::validation::keys::validate_keys;

/// Valid `logging.level` values
pub const LOG_LEVELS: &[&str] = &["debug", "info", "warn", "error"];

/// Valid vault strategy names
pub const VAULT_STRATEGIES: &[&str] = &["yearn", "aave"];

/// A configuration section with a fixed set of allowed keys
#[derive(Debug, Clone, Copy)]
pub struct SectionSchema {
    pub name: &'static str,
    pub keys: &'static [&'static str],
}

impl SectionSchema {
    /// Require `value` to be an object whose keys are all allowed
    pub fn check<'v>(&self, path: &str, value: &'v Value) -> Result<&'v Map<String, Value>, ValidationError> {
        let map = expect_object(path, value)?;
        validate_keys(path, self.keys, map.keys())?;
        Ok(map)
    }
}

pub const TOP_LEVEL: SectionSchema = SectionSchema {
    name: "config",
    keys: &[
        "network",
        "chains",
        "sync",
        "tokens",
        "commitTransfers",
        "bondWithdrawals",
        "settleBondedWithdrawals",
        "watchers",
        "db",
        "logging",
        "keystore",
        "addresses",
        "metrics",
        "fees",
        "routes",
        "bonders",
        "signer",
        "vault",
        "blocklist",
    ],
};

pub const CHAIN_ENTRY: SectionSchema = SectionSchema {
    name: "chain",
    keys: &["rpcUrl", "maxGasPrice"],
};

pub const DB: SectionSchema = SectionSchema {
    name: "db",
    keys: &["location"],
};

pub const LOGGING: SectionSchema = SectionSchema {
    name: "logging",
    keys: &["level"],
};

pub const KEYSTORE: SectionSchema = SectionSchema {
    name: "keystore",
    keys: &["location", "pass", "passwordFile", "parameterStore", "awsRegion"],
};

pub const SIGNER: SectionSchema = SectionSchema {
    name: "signer",
    keys: &["type", "keyId", "awsRegion", "lambdaFunctionName"],
};

pub const METRICS: SectionSchema = SectionSchema {
    name: "metrics",
    keys: &["enabled", "port"],
};

pub const ADDRESSES: SectionSchema = SectionSchema {
    name: "addresses",
    keys: &["location"],
};

pub const BLOCKLIST: SectionSchema = SectionSchema {
    name: "blocklist",
    keys: &["path", "addresses"],
};

pub const VAULT_ENTRY: SectionSchema = SectionSchema {
    name: "vault entry",
    keys: &[
        "depositThresholdAmount",
        "depositAmount",
        "strategy",
        "autoWithdraw",
        "autoDeposit",
    ],
};

/// Optional top-level sections checked against their allow-lists, in order
pub const OPTIONAL_SECTIONS: &[SectionSchema] = &[DB, LOGGING, KEYSTORE, SIGNER, METRICS, ADDRESSES, BLOCKLIST];

/// Whether a field must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// Extra rule applied once the field has the right kind
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    None,
    NonEmpty,
    Positive,
    OneOf(&'static [&'static str]),
}

/// Expected type and constraint of a single field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: ValueKind,
    pub presence: Presence,
    pub constraint: Constraint,
}

impl FieldSpec {
    const fn new(key: &'static str, kind: ValueKind, presence: Presence, constraint: Constraint) -> Self {
        Self { key, kind, presence, constraint }
    }
}

pub const NETWORK_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("rpcUrl", ValueKind::String, Presence::Required, Constraint::NonEmpty),
    FieldSpec::new("waitConfirmations", ValueKind::Number, Presence::Optional, Constraint::Positive),
    FieldSpec::new("maxGasPrice", ValueKind::Number, Presence::Optional, Constraint::Positive),
];

pub const VAULT_AUTO_DEPOSIT: &[FieldSpec] = &[
    FieldSpec::new("autoDeposit", ValueKind::Boolean, Presence::Required, Constraint::None),
];

/// Checked only when `autoDeposit` is enabled
pub const VAULT_DEPOSIT_AMOUNTS: &[FieldSpec] = &[
    FieldSpec::new("depositThresholdAmount", ValueKind::Number, Presence::Required, Constraint::None),
    FieldSpec::new("depositAmount", ValueKind::Number, Presence::Required, Constraint::None),
];

pub const VAULT_STRATEGY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("autoWithdraw", ValueKind::Boolean, Presence::Required, Constraint::None),
    FieldSpec::new("strategy", ValueKind::String, Presence::Required, Constraint::OneOf(VAULT_STRATEGIES)),
];

pub const BLOCKLIST_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("path", ValueKind::String, Presence::Optional, Constraint::None),
];

/// Require `value` to be an object
pub fn expect_object<'v>(path: &str, value: &'v Value) -> Result<&'v Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::type_mismatch(path, ValueKind::Object, Some(value)))
}

/// JavaScript-style truthiness, used for feature toggles such as `tokens.USDC`
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Check the listed fields of `map`, stopping at the first violation
pub fn check_fields(path: &str, map: &Map<String, Value>, fields: &[FieldSpec]) -> Result<(), ValidationError> {
    for field in fields {
        let field_path = format!("{}.{}", path, field.key);
        let value = match map.get(field.key) {
            Some(value) => value,
            None if field.presence == Presence::Optional => continue,
            None => return Err(ValidationError::type_mismatch(field_path, field.kind, None)),
        };

        if !field.kind.matches(value) {
            return Err(ValidationError::type_mismatch(field_path, field.kind, Some(value)));
        }

        apply_constraint(&field_path, value, field.constraint)?;
    }

    Ok(())
}

fn apply_constraint(path: &str, value: &Value, constraint: Constraint) -> Result<(), ValidationError> {
    match constraint {
        Constraint::None => Ok(()),
        Constraint::NonEmpty => match value.as_str() {
            Some("") => Err(ValidationError::missing(path, "value must not be empty")),
            _ => Ok(()),
        },
        Constraint::Positive => match value.as_f64() {
            Some(n) if n > 0.0 => Ok(()),
            _ => Err(ValidationError::RangeViolation {
                path: path.to_string(),
                value: value.to_string(),
            }),
        },
        Constraint::OneOf(allowed) => {
            let actual = value.as_str().unwrap_or_default();
            if allowed.contains(&actual) {
                Ok(())
            } else {
                Err(ValidationError::InvalidEnumValue {
                    path: path.to_string(),
                    value: actual.to_string(),
                    allowed: allowed.iter().map(|s| s.to_string()).collect(),
                })
            }
        }
    }
}
