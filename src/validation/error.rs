//! Validation error taxonomy
//!
//! Every variant names the dotted path of the offending entry so an operator
//! can locate it in the configuration file.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Primitive kinds a configuration value is expected to have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Object,
}

impl ValueKind {
    /// Check whether a JSON value has this kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ValueKind::String => value.is_string(),
            ValueKind::Number => value.is_number(),
            ValueKind::Boolean => value.is_boolean(),
            ValueKind::Object => value.is_object(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Describe what was actually found at a path, for diagnostics
pub fn describe(value: Option<&Value>) -> String {
    match value {
        None => "missing".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(_)) => "boolean".to_string(),
        Some(Value::Number(_)) => "number".to_string(),
        Some(Value::String(_)) => "string".to_string(),
        Some(Value::Array(_)) => "array".to_string(),
        Some(Value::Object(_)) => "object".to_string(),
    }
}

/// Discriminant of [`ValidationError`], used for matching and log fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    UnrecognizedKey,
    MissingRequiredSection,
    MutuallyExclusiveSections,
    TypeMismatch,
    RangeViolation,
    InvalidFormat,
    InvalidEnumValue,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A configuration rule violation. The first one found aborts validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unrecognized key \"{key}\" in {section}; valid keys are: {}", .allowed.join(", "))]
    UnrecognizedKey {
        section: String,
        key: String,
        allowed: Vec<String>,
    },

    #[error("missing required entry {path}: {reason}")]
    MissingRequiredSection { path: String, reason: String },

    #[error("only one of \"{first}\" or \"{second}\" may be configured")]
    MutuallyExclusiveSections { first: String, second: String },

    #[error("{path} must be a {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: ValueKind,
        found: String,
    },

    #[error("{path} must be greater than 0, got {value}")]
    RangeViolation { path: String, value: String },

    #[error("{path} is not a valid {format}: {reason}")]
    InvalidFormat {
        path: String,
        format: String,
        reason: String,
    },

    #[error("invalid value \"{value}\" for {path}; valid values are: {}", .allowed.join(", "))]
    InvalidEnumValue {
        path: String,
        value: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::UnrecognizedKey { .. } => ValidationErrorKind::UnrecognizedKey,
            ValidationError::MissingRequiredSection { .. } => {
                ValidationErrorKind::MissingRequiredSection
            }
            ValidationError::MutuallyExclusiveSections { .. } => {
                ValidationErrorKind::MutuallyExclusiveSections
            }
            ValidationError::TypeMismatch { .. } => ValidationErrorKind::TypeMismatch,
            ValidationError::RangeViolation { .. } => ValidationErrorKind::RangeViolation,
            ValidationError::InvalidFormat { .. } => ValidationErrorKind::InvalidFormat,
            ValidationError::InvalidEnumValue { .. } => ValidationErrorKind::InvalidEnumValue,
        }
    }

    /// Dotted path of the entry that failed
    pub fn path(&self) -> String {
        match self {
            ValidationError::UnrecognizedKey { section, key, .. } => format!("{}.{}", section, key),
            ValidationError::MissingRequiredSection { path, .. }
            | ValidationError::TypeMismatch { path, .. }
            | ValidationError::RangeViolation { path, .. }
            | ValidationError::InvalidFormat { path, .. }
            | ValidationError::InvalidEnumValue { path, .. } => path.clone(),
            ValidationError::MutuallyExclusiveSections { first, second } => {
                format!("{}|{}", first, second)
            }
        }
    }

    pub(crate) fn type_mismatch(path: impl Into<String>, expected: ValueKind, found: Option<&Value>) -> Self {
        ValidationError::TypeMismatch {
            path: path.into(),
            expected,
            found: describe(found),
        }
    }

    pub(crate) fn missing(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::MissingRequiredSection {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
