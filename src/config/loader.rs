//! Configuration file loading
//! 
//! Reads a node configuration file into a JSON tree. JSON and TOML files are
//! supported, selected by extension.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::shared::error::{AppError, AppResult};

/// Load the raw node configuration from `path`
pub fn load_raw_config(path: impl AsRef<Path>) -> AppResult<Value> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    debug!(path = %path.display(), format = %extension, "Parsing configuration file");

    parse_raw_config(&contents, extension)
}

/// Parse configuration text in the format named by `extension`
pub fn parse_raw_config(contents: &str, extension: &str) -> AppResult<Value> {
    let value: Value = match extension {
        "toml" => toml::from_str(contents)?,
        _ => serde_json::from_str(contents)?,
    };

    if !value.is_object() {
        return Err(AppError::Config(
            "Configuration root must be an object".to_string(),
        ));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json() {
        let value = parse_raw_config(r#"{"tokens": {"USDC": true}}"#, "json").unwrap();
        assert_eq!(value, json!({"tokens": {"USDC": true}}));
    }

    #[test]
    fn test_parse_toml() {
        let contents = r#"
            [tokens]
            USDC = true

            [routes.ethereum]
            optimism = true
        "#;
        let value = parse_raw_config(contents, "toml").unwrap();
        assert_eq!(value["tokens"]["USDC"], json!(true));
        assert_eq!(value["routes"]["ethereum"]["optimism"], json!(true));
    }

    #[test]
    fn test_root_must_be_object() {
        let result = parse_raw_config("[1, 2]", "json");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(parse_raw_config("{", "json").is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = load_raw_config("/nonexistent/bridge-config.json");
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
