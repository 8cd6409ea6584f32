//! Error types for the option registry
//!
//! Covers:
//! - Registration failures (duplicate or malformed keys, bad defaults)
//! - Lookup of keys that were never registered
//! - Values rejected by a validator

use serde_json::Value as JsonValue;

use crate::key::KeyError;

/// Registry errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// Key was never registered
    #[error("unknown setting '{0}'")]
    UnknownKey(String),

    /// Key registered twice
    #[error("setting '{0}' is already registered")]
    DuplicateKey(String),

    /// Key is syntactically malformed
    #[error("invalid setting key '{key}': {source}")]
    InvalidKey {
        /// Offending key
        key: String,
        /// Underlying syntax error
        #[source]
        source: KeyError,
    },

    /// Value failed the setting's validator
    #[error("invalid value {value} for setting '{key}': {reason}")]
    Validation {
        /// Setting that rejected the value
        key: String,
        /// Rejected value
        value: JsonValue,
        /// Validator explanation
        reason: String,
    },
}

impl RegistryError {
    /// Create validation error
    pub fn validation(key: impl Into<String>, value: JsonValue, reason: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Key the error refers to
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::UnknownKey(key) | Self::DuplicateKey(key) => key,
            Self::InvalidKey { key, .. } | Self::Validation { key, .. } => key,
        }
    }

    /// Whether the caller can recover by retrying with a corrected value
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_key_display() {
        let err = RegistryError::UnknownKey("grid.colour".to_string());
        assert_eq!(err.to_string(), "unknown setting 'grid.colour'");
    }

    #[test]
    fn validation_display() {
        let err = RegistryError::validation("tick.dir", json!("up"), "expected one of in, out, inout");
        assert_eq!(
            err.to_string(),
            "invalid value \"up\" for setting 'tick.dir': expected one of in, out, inout"
        );
        assert!(err.is_recoverable());
        assert_eq!(err.key(), "tick.dir");
    }

    #[test]
    fn duplicate_is_not_recoverable() {
        let err = RegistryError::DuplicateKey("abc".to_string());
        assert!(!err.is_recoverable());
    }
}
