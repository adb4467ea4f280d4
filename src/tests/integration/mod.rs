//! Integration tests for the bridge configuration validator
//!
//! These tests run the full startup sequence: loading a file, the structural
//! pass, resolution and the value pass.

use std::io::Write;

use serde_json::json;

use crate::{
    config::{load_raw_config, Registry},
    shared::error::AppError,
    tests::{
        config,
        fixtures::{self, full_config, minimal_config, BONDER_A},
    },
    validation::{ConfigValidator, ValidationErrorKind},
};

fn validator() -> ConfigValidator {
    config::init();
    ConfigValidator::new(Registry::default())
}

#[test]
fn test_full_config_passes_both_passes() {
    let resolved = validator().validate_startup(&full_config()).unwrap();
    assert_eq!(resolved.networks.len(), 3);
    assert_eq!(resolved.enabled_tokens, vec!["USDC".to_string()]);
    assert!(resolved.bonders.is_some());
}

#[test]
fn test_minimal_scenario_passes() {
    assert!(validator().validate_startup(&minimal_config()).is_ok());
}

#[test]
fn test_removing_fee_names_token_and_chain() {
    let mut raw = minimal_config();
    fixtures::remove(&mut raw, &["fees", "USDC", "optimism"]);

    let err = validator().validate_structure(&raw).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::MissingRequiredSection);
    let message = err.to_string();
    assert!(message.contains("USDC"), "{message}");
    assert!(message.contains("optimism"), "{message}");
}

#[test]
fn test_removing_any_required_fee_fails() {
    for destination in ["optimism", "arbitrum"] {
        let mut raw = full_config();
        fixtures::remove(&mut raw, &["fees", "USDC", destination]);
        let err = validator().validate_structure(&raw).unwrap_err();
        assert_eq!(err.path(), format!("fees.USDC.{destination}"));
    }
}

#[test]
fn test_removing_required_threshold_fails() {
    let mut raw = full_config();
    fixtures::remove(&mut raw, &["commitTransfers", "minThresholdAmount", "USDC", "optimism", "arbitrum"]);
    let err = validator().validate_structure(&raw).unwrap_err();
    assert_eq!(err.path(), "commitTransfers.minThresholdAmount.USDC.optimism.arbitrum");
}

#[test]
fn test_base_chain_absent_fails() {
    let mut raw = full_config();
    fixtures::remove(&mut raw, &["chains", "ethereum"]);
    let err = validator().validate_startup(&raw).unwrap_err();
    assert_eq!(err.path(), "chains.ethereum");
}

#[test]
fn test_alternate_base_chain() {
    // With gnosis as base, ethereum no longer exempts its routes from thresholds
    let registry = Registry::default().with_base_chain("gnosis").unwrap();
    let validator = ConfigValidator::new(registry);

    let mut raw = full_config();
    fixtures::set(&mut raw, &["chains", "gnosis"], json!({"rpcUrl": "https://gnosis.example.com"}));
    let err = validator.validate_structure(&raw).unwrap_err();
    assert_eq!(err.path(), "commitTransfers.minThresholdAmount.USDC.ethereum.arbitrum");
}

#[test]
fn test_signer_instead_of_keystore() {
    let mut raw = full_config();
    fixtures::remove(&mut raw, &["keystore"]);
    fixtures::set(&mut raw, &["signer"], json!({"type": "kms", "keyId": "alias/bonder", "awsRegion": "us-east-1"}));
    assert!(validator().validate_startup(&raw).is_ok());

    fixtures::set(&mut raw, &["keystore"], json!({"location": "/etc/bridge/keystore.json"}));
    let err = validator().validate_startup(&raw).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::MutuallyExclusiveSections);
}

#[test]
fn test_ftp_rpc_url_fails() {
    let mut raw = full_config();
    fixtures::set(&mut raw, &["chains", "optimism", "rpcUrl"], json!("ftp://optimism.example.com"));

    assert!(validator().validate_structure(&raw).is_ok());
    let err = validator().validate_startup(&raw).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::InvalidFormat);
    assert_eq!(err.path(), "networks.optimism.rpcUrl");
}

#[test]
fn test_bad_bonder_checksum_fails() {
    let mut raw = full_config();
    let bad = format!("0x{}", BONDER_A[2..].to_ascii_lowercase().replacen('a', "A", 1));
    fixtures::set(&mut raw, &["bonders", "USDC", "optimism", "arbitrum"], json!(bad));

    let err = validator().validate_startup(&raw).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::InvalidFormat);
    assert_eq!(err.path(), "bonders.USDC.optimism.arbitrum");
}

#[test]
fn test_auto_deposit_without_amount_names_deposit_amount() {
    let mut raw = full_config();
    fixtures::set(
        &mut raw,
        &["vault", "USDC", "optimism"],
        json!({"depositThresholdAmount": 10, "strategy": "aave", "autoDeposit": true, "autoWithdraw": true}),
    );

    let err = validator().validate_startup(&raw).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::TypeMismatch);
    assert!(err.to_string().contains("depositAmount"));
}

#[test]
fn test_load_json_file_and_validate() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(full_config().to_string().as_bytes()).unwrap();

    let raw = load_raw_config(file.path()).unwrap();
    assert!(validator().validate_startup(&raw).is_ok());
}

#[test]
fn test_load_toml_file_and_validate() {
    let contents = r#"
[chains.ethereum]
rpcUrl = "https://mainnet.example.com"

[chains.optimism]
rpcUrl = "https://optimism.example.com"
maxGasPrice = 2

[tokens]
USDC = true

[routes.ethereum]
optimism = true

[fees.USDC]
optimism = 18

[bonders.USDC.ethereum]
optimism = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
"#;
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();

    let raw = load_raw_config(file.path()).unwrap();
    let resolved = validator().validate_startup(&raw).unwrap();
    assert_eq!(resolved.networks.len(), 2);
}

#[test]
fn test_validation_error_into_app_error() {
    let err = validator().validate_startup(&json!({"chains": {}})).unwrap_err();
    let app_error = AppError::from(err);
    assert!(matches!(app_error, AppError::Validation(_)));
    assert_eq!(app_error.exit_code(), 1);
}
