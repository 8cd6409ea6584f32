//! Host-version gated table mutations
//!
//! Some host settings only exist from a given host release onward. Each
//! [`VersionGate`] bundles the mutations that become valid at its threshold.
//! Gates mutate an [`AliasGraphBuilder`], so they can only run before
//! [`AliasGraphBuilder::build`] seals the graph.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut registry = OptionRegistry::with_defaults()?;
//! let mut builder = AliasGraphBuilder::with_defaults()?;
//! let report = extension::extend(&Version::new(3, 4, 0), &mut registry, &mut builder)?;
//! assert_eq!(report.applied().len(), 2);
//! let graph = builder.build(&registry)?;
//! ```

use rc_registry::{validate, JsonValue, OptionRegistry, RcOption};
use semver::Version;
use serde_json::json;

use crate::builder::AliasGraphBuilder;
use crate::error::{GraphError, GraphResult};

/// One change to the registry or the child table
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Register a new option; skipped if the key already exists
    AddOption(RcOption),
    /// Replace the children of a parent
    AddChildren {
        /// Parent key
        parent: String,
        /// New children
        children: Vec<String>,
    },
    /// Append children to a parent
    ExtendChildren {
        /// Parent key
        parent: String,
        /// Extra children
        children: Vec<String>,
    },
    /// Replace the default of a registered option
    OverrideDefault {
        /// Option key
        key: String,
        /// New default, validated
        value: JsonValue,
    },
}

impl Mutation {
    /// Replace the children of `parent`
    pub fn add_children<S: Into<String>>(parent: &str, children: impl IntoIterator<Item = S>) -> Self {
        Self::AddChildren {
            parent: parent.to_string(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// Append children to `parent`
    pub fn extend_children<S: Into<String>>(
        parent: &str,
        children: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::ExtendChildren {
            parent: parent.to_string(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// Override the default of `key`
    #[must_use]
    pub fn override_default(key: &str, value: JsonValue) -> Self {
        Self::OverrideDefault {
            key: key.to_string(),
            value,
        }
    }

    fn apply(
        &self,
        registry: &mut OptionRegistry,
        builder: &mut AliasGraphBuilder,
    ) -> Result<(), rc_registry::RegistryError> {
        match self {
            Self::AddOption(option) => {
                if registry.contains(option.key()) {
                    tracing::debug!(key = option.key(), "Gated option already registered");
                } else {
                    registry.register(option.clone())?;
                }
            }
            Self::AddChildren { parent, children } => {
                builder.add_children(parent, children.iter().cloned());
            }
            Self::ExtendChildren { parent, children } => {
                builder.extend_children(parent, children.iter().cloned());
            }
            Self::OverrideDefault { key, value } => registry.override_default(key, value)?,
        }
        Ok(())
    }
}

/// Mutations that apply from `threshold` onward
#[derive(Debug, Clone)]
pub struct VersionGate {
    threshold: Version,
    mutations: Vec<Mutation>,
}

impl VersionGate {
    /// Create gate
    #[must_use]
    pub fn new(threshold: Version, mutations: Vec<Mutation>) -> Self {
        Self {
            threshold,
            mutations,
        }
    }

    /// Minimum host version
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> &Version {
        &self.threshold
    }

    /// Mutations applied when open
    #[inline]
    #[must_use]
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    /// Check if the gate is open for `host`
    #[inline]
    #[must_use]
    pub fn applies_to(&self, host: &Version) -> bool {
        host >= &self.threshold
    }
}

/// Outcome of [`extend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionReport {
    host_version: Version,
    applied: Vec<Version>,
    skipped: Vec<Version>,
}

impl ExtensionReport {
    /// Host version the gates were evaluated against
    #[must_use]
    pub fn host_version(&self) -> &Version {
        &self.host_version
    }

    /// Thresholds of gates that were applied
    #[must_use]
    pub fn applied(&self) -> &[Version] {
        &self.applied
    }

    /// Thresholds of gates left closed
    #[must_use]
    pub fn skipped(&self) -> &[Version] {
        &self.skipped
    }
}

/// Gates for the host releases the library knows about
#[must_use]
pub fn builtin_gates() -> Vec<VersionGate> {
    let labelcolors = ["xtick.labelcolor", "ytick.labelcolor"];
    vec![
        VersionGate::new(
            Version::new(3, 2, 0),
            vec![
                Mutation::AddOption(RcOption::new(
                    "axes.titlecolor",
                    json!("black"),
                    validate::color(),
                    "",
                )),
                Mutation::add_children("title.color", ["axes.titlecolor"]),
            ],
        ),
        VersionGate::new(
            Version::new(3, 4, 0),
            vec![
                Mutation::AddOption(RcOption::new(
                    "mathtext.fallback",
                    json!("stixsans"),
                    validate::or_none(validate::belongs([
                        json!("cm"),
                        json!("stix"),
                        json!("stixsans"),
                    ])),
                    "",
                )),
                Mutation::AddOption(RcOption::new(
                    "xtick.labelcolor",
                    json!("black"),
                    validate::color(),
                    "",
                )),
                Mutation::AddOption(RcOption::new(
                    "ytick.labelcolor",
                    json!("black"),
                    validate::color(),
                    "",
                )),
                Mutation::add_children("tick.labelcolor", labelcolors),
                Mutation::add_children("grid.labelcolor", labelcolors),
                Mutation::extend_children("meta.color", labelcolors),
            ],
        ),
    ]
}

/// Apply the built-in gates for `host_version`
///
/// # Errors
/// Returns [`GraphError::Gate`] if a registry mutation fails
pub fn extend(
    host_version: &Version,
    registry: &mut OptionRegistry,
    builder: &mut AliasGraphBuilder,
) -> GraphResult<ExtensionReport> {
    apply_gates(&builtin_gates(), host_version, registry, builder)
}

/// Apply `gates` whose threshold is at most `host_version`
///
/// Re-applying the same gates leaves the tables unchanged.
///
/// # Errors
/// Returns [`GraphError::Gate`] if a registry mutation fails
pub fn apply_gates(
    gates: &[VersionGate],
    host_version: &Version,
    registry: &mut OptionRegistry,
    builder: &mut AliasGraphBuilder,
) -> GraphResult<ExtensionReport> {
    let mut applied = Vec::new();
    let mut skipped = Vec::new();
    for gate in gates {
        if !gate.applies_to(host_version) {
            skipped.push(gate.threshold.clone());
            continue;
        }
        for mutation in &gate.mutations {
            mutation
                .apply(registry, builder)
                .map_err(|source| GraphError::Gate {
                    threshold: gate.threshold.clone(),
                    source,
                })?;
        }
        tracing::debug!(
            threshold = %gate.threshold,
            mutations = gate.mutations.len(),
            "Applied version gate"
        );
        applied.push(gate.threshold.clone());
    }
    Ok(ExtensionReport {
        host_version: host_version.clone(),
        applied,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tables() -> (OptionRegistry, AliasGraphBuilder) {
        (
            OptionRegistry::with_defaults().unwrap(),
            AliasGraphBuilder::with_defaults().unwrap(),
        )
    }

    #[test]
    fn old_host_applies_nothing() {
        let (mut registry, mut builder) = tables();
        let before = registry.len();
        let report = extend(&Version::new(3, 1, 3), &mut registry, &mut builder).unwrap();
        assert!(report.applied().is_empty());
        assert_eq!(report.skipped().len(), 2);
        assert_eq!(registry.len(), before);
        assert!(builder.children("title.color").is_none());
    }

    #[test]
    fn gates_open_exactly_at_threshold() {
        let (mut registry, mut builder) = tables();
        let report = extend(&Version::new(3, 2, 0), &mut registry, &mut builder).unwrap();
        assert_eq!(report.applied(), &[Version::new(3, 2, 0)]);
        assert!(registry.contains("axes.titlecolor"));
        assert!(!registry.contains("mathtext.fallback"));

        let (mut registry, mut builder) = tables();
        extend(&Version::new(3, 3, 4), &mut registry, &mut builder).unwrap();
        assert!(!registry.contains("xtick.labelcolor"));

        let (mut registry, mut builder) = tables();
        let report = extend(&Version::new(3, 4, 0), &mut registry, &mut builder).unwrap();
        assert_eq!(report.applied().len(), 2);
        assert_eq!(registry.default_of("mathtext.fallback").unwrap(), &json!("stixsans"));
    }

    #[test]
    fn prerelease_is_below_threshold() {
        let (mut registry, mut builder) = tables();
        let host = Version::parse("3.4.0-rc1").unwrap();
        let report = extend(&host, &mut registry, &mut builder).unwrap();
        assert_eq!(report.applied(), &[Version::new(3, 2, 0)]);
    }

    #[test]
    fn labelcolor_children_and_meta_extension() {
        let (mut registry, mut builder) = tables();
        extend(&Version::new(3, 8, 0), &mut registry, &mut builder).unwrap();
        let meta = builder.children("meta.color").unwrap();
        assert!(meta.contains("xtick.labelcolor"));
        assert!(meta.contains("axes.edgecolor"));
        let tick: Vec<_> = builder.children("tick.labelcolor").unwrap().iter().collect();
        assert_eq!(tick, vec!["xtick.labelcolor", "ytick.labelcolor"]);
    }

    #[test]
    fn reapplying_is_idempotent() {
        let (mut registry, mut builder) = tables();
        let host = Version::new(3, 8, 0);
        extend(&host, &mut registry, &mut builder).unwrap();
        let len = registry.len();
        let meta = builder.children("meta.color").cloned();
        extend(&host, &mut registry, &mut builder).unwrap();
        assert_eq!(registry.len(), len);
        assert_eq!(builder.children("meta.color").cloned(), meta);
    }

    #[test]
    fn failing_override_reports_gate() {
        let (mut registry, mut builder) = tables();
        let gates = vec![VersionGate::new(
            Version::new(1, 0, 0),
            vec![Mutation::override_default("tick.dir", json!("up"))],
        )];
        let err = apply_gates(&gates, &Version::new(2, 0, 0), &mut registry, &mut builder)
            .unwrap_err();
        assert!(matches!(err, GraphError::Gate { ref threshold, .. } if *threshold == Version::new(1, 0, 0)));
    }

    #[test]
    fn override_default_gate() {
        let (mut registry, mut builder) = tables();
        let gates = vec![VersionGate::new(
            Version::new(1, 0, 0),
            vec![Mutation::override_default("tick.dir", json!("inout"))],
        )];
        apply_gates(&gates, &Version::new(2, 0, 0), &mut registry, &mut builder).unwrap();
        assert_eq!(registry.default_of("tick.dir").unwrap(), &json!("inout"));
    }
}
