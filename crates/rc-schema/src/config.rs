//! Schema configuration
//!
//! Loaded from a small TOML file:
//!
//! ```toml
//! host_version = "3.4.2"
//! alias_conflicts = "strict"
//! ```

use std::path::Path;

use rc_args::{ConflictPolicy, ResolveOptions};
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};

/// Host release assumed when none is configured
pub const DEFAULT_HOST_VERSION: Version = Version::new(3, 8, 0);

/// Settings that shape how a schema is assembled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Version of the host plotting library; selects the version gates
    pub host_version: Version,
    /// Policy for several keyword aliases given in one call
    pub alias_conflicts: ConflictPolicy,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            host_version: DEFAULT_HOST_VERSION,
            alias_conflicts: ConflictPolicy::default(),
        }
    }
}

impl SchemaConfig {
    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns [`SchemaError::Config`] on malformed TOML or unknown fields
    pub fn from_toml(input: &str) -> SchemaResult<Self> {
        toml::from_str(input).map_err(|e| SchemaError::config(e.to_string()))
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Returns [`SchemaError::Config`] if the file cannot be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::config(format!("failed to read {}: {e}", path.display())))?;
        let config = Self::from_toml(&content).map_err(|e| match e {
            SchemaError::Config(message) => {
                SchemaError::config(format!("failed to parse {}: {message}", path.display()))
            }
            other => other,
        })?;
        tracing::debug!(path = %path.display(), host_version = %config.host_version, "Loaded schema config");
        Ok(config)
    }

    /// Set the host version
    #[must_use]
    pub fn with_host_version(mut self, host_version: Version) -> Self {
        self.host_version = host_version;
        self
    }

    /// Set the alias conflict policy
    #[must_use]
    pub fn with_alias_conflicts(mut self, policy: ConflictPolicy) -> Self {
        self.alias_conflicts = policy;
        self
    }

    /// Argument resolution options implied by this config
    #[must_use]
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions::default().with_policy(self.alias_conflicts)
    }
}
