//! Option definitions

use std::fmt;

use serde_json::Value as JsonValue;

use crate::validate::SharedValidator;

/// One registered setting
///
/// Bundles the default value, the validator that guards it and a
/// one-paragraph description.
#[derive(Clone)]
pub struct RcOption {
    key: String,
    default: JsonValue,
    validator: SharedValidator,
    description: String,
}

impl RcOption {
    /// Create option definition
    ///
    /// The key is checked and the default validated on registration.
    pub fn new(
        key: impl Into<String>,
        default: JsonValue,
        validator: SharedValidator,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            default,
            validator,
            description: description.into(),
        }
    }

    /// Dotted key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Default value
    #[inline]
    #[must_use]
    pub fn default_value(&self) -> &JsonValue {
        &self.default
    }

    /// Validator
    #[inline]
    #[must_use]
    pub fn validator(&self) -> &SharedValidator {
        &self.validator
    }

    /// Description text, empty for host settings without one
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn set_default(&mut self, default: JsonValue) {
        self.default = default;
    }
}

impl fmt::Debug for RcOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RcOption")
            .field("key", &self.key)
            .field("default", &self.default)
            .field("validator", &self.validator.describe())
            .finish_non_exhaustive()
    }
}
