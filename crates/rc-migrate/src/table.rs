//! Migration table
//!
//! Resolves retired keys before any registry or graph lookup: renamed keys
//! are redirected with a deprecation notice, removed keys are rejected.

use std::fmt;

use indexmap::IndexMap;
use rc_registry::OptionRegistry;
use semver::Version;

use crate::defaults;
use crate::error::{MigrationError, MigrationResult};

/// How a key was retired
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Retirement {
    /// Dropped with no replacement setting
    Removed {
        /// Suggested alternative, possibly empty
        hint: String,
        /// Release that removed the key
        version: Version,
    },
    /// Superseded by another key
    Renamed {
        /// Current key
        new_key: String,
        /// Release that renamed the key
        version: Version,
    },
}

impl Retirement {
    /// Release in which the key was retired
    #[must_use]
    pub fn version(&self) -> &Version {
        match self {
            Self::Removed { version, .. } | Self::Renamed { version, .. } => version,
        }
    }
}

/// Outcome of looking a key up in the migration table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Key is not retired
    Current(&'a str),
    /// Key was renamed
    Renamed {
        /// Key as given
        old_key: &'a str,
        /// Key to use instead
        new_key: &'a str,
        /// Release that renamed the key
        version: &'a Version,
    },
    /// Key was removed
    Removed {
        /// Key as given
        key: &'a str,
        /// Suggested alternative, possibly empty
        hint: &'a str,
        /// Release that removed the key
        version: &'a Version,
    },
}

impl<'a> Resolution<'a> {
    /// Key to continue with, or `None` if removed
    #[must_use]
    pub fn key(&self) -> Option<&'a str> {
        match *self {
            Self::Current(key) => Some(key),
            Self::Renamed { new_key, .. } => Some(new_key),
            Self::Removed { .. } => None,
        }
    }

    /// Deprecation notice for renamed keys
    #[must_use]
    pub fn deprecation(&self) -> Option<DeprecatedKey> {
        match *self {
            Self::Renamed {
                old_key,
                new_key,
                version,
            } => Some(DeprecatedKey {
                old_key: old_key.to_string(),
                new_key: new_key.to_string(),
                version: version.clone(),
            }),
            _ => None,
        }
    }

    /// Convert into the key to continue with
    ///
    /// # Errors
    /// Returns [`MigrationError::Removed`] if the key was removed
    pub fn into_key(self) -> MigrationResult<&'a str> {
        match self {
            Self::Current(key) | Self::Renamed { new_key: key, .. } => Ok(key),
            Self::Removed { key, hint, version } => Err(MigrationError::Removed {
                key: key.to_string(),
                hint: hint.to_string(),
                version: version.clone(),
            }),
        }
    }
}

/// Non-fatal notice that a renamed key was used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecatedKey {
    /// Key as given
    pub old_key: String,
    /// Key used instead
    pub new_key: String,
    /// Release that renamed the key
    pub version: Version,
}

impl fmt::Display for DeprecatedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "setting '{}' was renamed to '{}' in version {}",
            self.old_key, self.new_key, self.version
        )
    }
}

/// Retired keys and what became of them
#[derive(Debug, Clone, Default)]
pub struct MigrationTable {
    entries: IndexMap<String, Retirement>,
}

impl MigrationTable {
    /// Create empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create table holding the library's historical retirements
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for &(key, hint, (major, minor, patch)) in defaults::REMOVED {
            table.entries.insert(
                key.to_string(),
                Retirement::Removed {
                    hint: hint.to_string(),
                    version: Version::new(major, minor, patch),
                },
            );
        }
        for &(old_key, new_key, (major, minor, patch)) in defaults::RENAMED {
            table.entries.insert(
                old_key.to_string(),
                Retirement::Renamed {
                    new_key: new_key.to_string(),
                    version: Version::new(major, minor, patch),
                },
            );
        }
        table
    }

    /// Record a removed key
    ///
    /// # Errors
    /// Returns [`MigrationError::Invariant`] if the key is already retired
    pub fn add_removed(
        &mut self,
        key: &str,
        hint: impl Into<String>,
        version: Version,
    ) -> MigrationResult<()> {
        self.insert(
            key,
            Retirement::Removed {
                hint: hint.into(),
                version,
            },
        )
    }

    /// Record a renamed key
    ///
    /// # Errors
    /// Returns [`MigrationError::Invariant`] if the key is already retired or
    /// renamed to itself
    pub fn add_renamed(&mut self, old_key: &str, new_key: &str, version: Version) -> MigrationResult<()> {
        if old_key == new_key {
            return Err(MigrationError::invariant(format!(
                "'{old_key}' is renamed to itself"
            )));
        }
        self.insert(
            old_key,
            Retirement::Renamed {
                new_key: new_key.to_string(),
                version,
            },
        )
    }

    fn insert(&mut self, key: &str, retirement: Retirement) -> MigrationResult<()> {
        if self.entries.contains_key(key) {
            return Err(MigrationError::invariant(format!(
                "'{key}' is already retired"
            )));
        }
        self.entries.insert(key.to_string(), retirement);
        Ok(())
    }

    /// Look up a key
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> Resolution<'a> {
        match self.entries.get(key) {
            None => Resolution::Current(key),
            Some(Retirement::Renamed { new_key, version }) => Resolution::Renamed {
                old_key: key,
                new_key,
                version,
            },
            Some(Retirement::Removed { hint, version }) => Resolution::Removed { key, hint, version },
        }
    }

    /// Resolve a key, logging a deprecation notice for renamed keys
    ///
    /// # Errors
    /// Returns [`MigrationError::Removed`] if the key was removed
    pub fn redirect<'a>(&'a self, key: &'a str) -> MigrationResult<&'a str> {
        let resolution = self.resolve(key);
        if let Some(notice) = resolution.deprecation() {
            tracing::warn!(
                old_key = %notice.old_key,
                new_key = %notice.new_key,
                version = %notice.version,
                "{notice}; use the new name"
            );
        }
        resolution.into_key()
    }

    /// Check the table against itself and the registry
    ///
    /// - A renamed key points at a key that is neither renamed nor removed
    /// - Every rename target is registered
    /// - No retired key is registered
    ///
    /// # Errors
    /// Returns [`MigrationError::Invariant`] for the first violation found
    pub fn verify(&self, registry: &OptionRegistry) -> MigrationResult<()> {
        for (key, retirement) in &self.entries {
            if registry.contains(key) {
                return Err(MigrationError::invariant(format!(
                    "retired key '{key}' is still registered"
                )));
            }
            if let Retirement::Renamed { new_key, .. } = retirement {
                if self.entries.contains_key(new_key) {
                    return Err(MigrationError::invariant(format!(
                        "'{key}' is renamed to '{new_key}', which is itself retired"
                    )));
                }
                if !registry.contains(new_key) {
                    return Err(MigrationError::invariant(format!(
                        "'{key}' is renamed to unregistered '{new_key}'"
                    )));
                }
            }
        }
        tracing::debug!(entries = self.entries.len(), "Verified migration table");
        Ok(())
    }

    /// Check if key is retired
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get number of retired keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if table is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retired keys in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Retirement)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Renamed keys with their targets
    pub fn renamed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(key, entry)| match entry {
            Retirement::Renamed { new_key, .. } => Some((key.as_str(), new_key.as_str())),
            Retirement::Removed { .. } => None,
        })
    }

    /// Removed keys
    pub fn removed(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|(key, entry)| match entry {
            Retirement::Removed { .. } => Some(key.as_str()),
            Retirement::Renamed { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rc_test_utils::registry_with_keys;

    fn toy() -> MigrationTable {
        let mut table = MigrationTable::new();
        table
            .add_renamed("abc.format", "abc", Version::new(0, 5, 0))
            .unwrap();
        table
            .add_removed("rgbcycle", "", Version::new(0, 6, 0))
            .unwrap();
        table
    }

    #[test]
    fn current_key_passes_through() {
        let table = toy();
        assert_eq!(table.resolve("abc"), Resolution::Current("abc"));
        assert_eq!(table.redirect("abc").unwrap(), "abc");
        assert!(table.resolve("abc").deprecation().is_none());
    }

    #[test]
    fn renamed_key_redirects_with_notice() {
        let table = toy();
        let resolution = table.resolve("abc.format");
        assert_eq!(resolution.key(), Some("abc"));
        let notice = resolution.deprecation().unwrap();
        assert_eq!(
            notice.to_string(),
            "setting 'abc.format' was renamed to 'abc' in version 0.5.0"
        );
        assert_eq!(table.redirect("abc.format").unwrap(), "abc");
    }

    #[test]
    fn removed_key_is_rejected() {
        let table = toy();
        assert_eq!(table.resolve("rgbcycle").key(), None);
        let err = table.redirect("rgbcycle").unwrap_err();
        assert!(matches!(
            err,
            MigrationError::Removed { ref key, ref version, .. }
                if key == "rgbcycle" && *version == Version::new(0, 6, 0)
        ));
    }

    #[test]
    fn duplicate_and_self_renames_rejected() {
        let mut table = toy();
        assert!(table.add_removed("abc.format", "", Version::new(0, 9, 0)).is_err());
        assert!(table.add_renamed("tick.dir", "tick.dir", Version::new(0, 9, 0)).is_err());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn verify_detects_chains() {
        let mut table = toy();
        table
            .add_renamed("abc.style", "abc.format", Version::new(0, 8, 0))
            .unwrap();
        let registry = registry_with_keys(&["abc"]);
        let err = table.verify(&registry).unwrap_err();
        assert!(err.to_string().contains("itself retired"));
    }

    #[test]
    fn verify_detects_unregistered_target() {
        let table = toy();
        let registry = registry_with_keys(&["title"]);
        let err = table.verify(&registry).unwrap_err();
        assert!(err.to_string().contains("unregistered 'abc'"));
    }

    #[test]
    fn verify_detects_registered_retired_key() {
        let table = toy();
        let registry = registry_with_keys(&["abc", "rgbcycle"]);
        let err = table.verify(&registry).unwrap_err();
        assert!(err.to_string().contains("'rgbcycle' is still registered"));
    }

    #[test]
    fn verify_accepts_consistent_table() {
        let table = toy();
        let registry = registry_with_keys(&["abc"]);
        assert!(table.verify(&registry).is_ok());
        assert_eq!(table.renamed().collect::<Vec<_>>(), vec![("abc.format", "abc")]);
        assert_eq!(table.removed().collect::<Vec<_>>(), vec!["rgbcycle"]);
    }

    #[test]
    fn built_in_table_sizes() {
        let table = MigrationTable::with_defaults();
        assert_eq!(table.removed().count(), 6);
        assert_eq!(table.renamed().count(), 48);
        assert_eq!(
            defaults::REMOVED.len() + defaults::RENAMED.len(),
            table.len()
        );
    }

    #[test]
    fn built_in_table_verifies_against_built_in_registry() {
        let table = MigrationTable::with_defaults();
        let registry = OptionRegistry::with_defaults().unwrap();
        table.verify(&registry).unwrap();
        for (old_key, new_key) in table.renamed() {
            assert_eq!(table.redirect(old_key).unwrap(), new_key);
            assert!(registry.contains(new_key));
        }
        for key in table.removed() {
            assert!(table.redirect(key).is_err());
        }
    }
}
