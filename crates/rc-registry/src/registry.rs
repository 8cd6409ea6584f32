//! Option registry
//!
//! Maps dotted keys to their [`RcOption`] definitions in registration order.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::defaults;
use crate::error::{RegistryError, RegistryResult};
use crate::key::OptionKey;
use crate::option::RcOption;

/// Registry of setting definitions
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    options: IndexMap<OptionKey, RcOption>,
}

impl OptionRegistry {
    /// Create empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create registry holding the built-in host overrides and library settings
    ///
    /// # Errors
    /// Returns [`RegistryError`] if a built-in definition is inconsistent
    pub fn with_defaults() -> RegistryResult<Self> {
        let mut registry = Self::new();
        for option in defaults::host_options()
            .into_iter()
            .chain(defaults::library_options())
        {
            registry.register(option)?;
        }
        tracing::debug!(options = registry.len(), "Populated built-in settings");
        Ok(registry)
    }

    /// Register an option
    ///
    /// The default is passed through the option's own validator and the
    /// validated form is stored.
    ///
    /// # Errors
    /// - [`RegistryError::InvalidKey`] if the key is malformed
    /// - [`RegistryError::DuplicateKey`] if the key is already registered
    /// - [`RegistryError::Validation`] if the default is rejected
    pub fn register(&mut self, mut option: RcOption) -> RegistryResult<()> {
        let key = OptionKey::parse(option.key()).map_err(|source| RegistryError::InvalidKey {
            key: option.key().to_string(),
            source,
        })?;
        if self.options.contains_key(&key) {
            return Err(RegistryError::DuplicateKey(key.to_string()));
        }
        let default = option
            .validator()
            .validate(option.default_value())
            .map_err(|reason| {
                RegistryError::validation(key.as_str(), option.default_value().clone(), reason)
            })?;
        option.set_default(default);
        tracing::trace!(key = %key, "Registered setting");
        self.options.insert(key, option);
        Ok(())
    }

    /// Look up an option
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownKey`] if the key is not registered
    pub fn lookup(&self, key: &str) -> RegistryResult<&RcOption> {
        self.options
            .get(key)
            .ok_or_else(|| RegistryError::UnknownKey(key.to_string()))
    }

    /// Validate a value for a setting
    ///
    /// # Errors
    /// - [`RegistryError::UnknownKey`] if the key is not registered
    /// - [`RegistryError::Validation`] if the validator rejects the value
    pub fn validate(&self, key: &str, value: &JsonValue) -> RegistryResult<JsonValue> {
        self.lookup(key)?
            .validator()
            .validate(value)
            .map_err(|reason| RegistryError::validation(key, value.clone(), reason))
    }

    /// Default value of a setting
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownKey`] if the key is not registered
    pub fn default_of(&self, key: &str) -> RegistryResult<&JsonValue> {
        self.lookup(key).map(RcOption::default_value)
    }

    /// Replace the default of a registered setting
    ///
    /// # Errors
    /// - [`RegistryError::UnknownKey`] if the key is not registered
    /// - [`RegistryError::Validation`] if the new default is rejected
    pub fn override_default(&mut self, key: &str, value: &JsonValue) -> RegistryResult<()> {
        let validated = self.validate(key, value)?;
        let option = self
            .options
            .get_mut(key)
            .ok_or_else(|| RegistryError::UnknownKey(key.to_string()))?;
        option.set_default(validated);
        tracing::debug!(key, "Overrode default");
        Ok(())
    }

    /// Check if key is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Get number of registered options
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &OptionKey> {
        self.options.keys()
    }

    /// Options in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RcOption> {
        self.options.values()
    }

    /// Options whose first segment is `namespace`
    pub fn namespace<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'a RcOption> + 'a {
        self.options
            .iter()
            .filter(move |(key, _)| key.namespace() == namespace)
            .map(|(_, option)| option)
    }
}
