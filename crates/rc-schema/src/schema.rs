//! Schema assembly and the read-only settings schema

use indexmap::IndexMap;
use rc_args::{reconcile, ResolveOptions, Resolved, Slot};
use rc_graph::extension::{self, ExtensionReport, VersionGate};
use rc_graph::{AliasGraph, AliasGraphBuilder};
use rc_migrate::{DeprecatedKey, MigrationTable, Resolution};
use rc_registry::{JsonValue, OptionRegistry, RcOption, RegistryError};
use semver::Version;

use crate::config::SchemaConfig;
use crate::error::SchemaResult;

/// Assembles a [`SettingsSchema`]
///
/// Tables left unset fall back to the built-in ones. Construction runs in a
/// fixed order: registry population, version gates, closure, then migration
/// verification.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    config: SchemaConfig,
    registry: Option<OptionRegistry>,
    graph: Option<AliasGraphBuilder>,
    migrations: Option<MigrationTable>,
    gates: Option<Vec<VersionGate>>,
}

impl SchemaBuilder {
    /// Builder for `config` with the built-in tables
    #[must_use]
    pub fn new(config: SchemaConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Use a custom registry
    #[must_use]
    pub fn with_registry(mut self, registry: OptionRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Use custom synonym groups and child links
    #[must_use]
    pub fn with_graph(mut self, graph: AliasGraphBuilder) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Use a custom migration table
    #[must_use]
    pub fn with_migrations(mut self, migrations: MigrationTable) -> Self {
        self.migrations = Some(migrations);
        self
    }

    /// Use custom version gates instead of the built-in ones
    #[must_use]
    pub fn with_gates(mut self, gates: Vec<VersionGate>) -> Self {
        self.gates = Some(gates);
        self
    }

    /// Build and seal the schema
    ///
    /// # Errors
    /// Returns the first construction error: a bad built-in table, a failing
    /// gate, an unknown key in the alias tables, or an inconsistent migration
    /// table
    pub fn build(self) -> SchemaResult<SettingsSchema> {
        let mut registry = match self.registry {
            Some(registry) => registry,
            None => OptionRegistry::with_defaults()?,
        };
        let mut builder = match self.graph {
            Some(builder) => builder,
            None => AliasGraphBuilder::with_defaults()?,
        };
        let gates = self.gates.unwrap_or_else(extension::builtin_gates);
        let extension = extension::apply_gates(
            &gates,
            &self.config.host_version,
            &mut registry,
            &mut builder,
        )?;
        let graph = builder.build(&registry)?;
        let migrations = self.migrations.unwrap_or_else(MigrationTable::with_defaults);
        migrations.verify(&registry)?;

        tracing::debug!(
            host_version = %self.config.host_version,
            options = registry.len(),
            parents = graph.len(),
            retired = migrations.len(),
            "Built settings schema"
        );
        Ok(SettingsSchema {
            config: self.config,
            registry,
            graph,
            migrations,
            extension,
        })
    }
}

/// A user-facing setting after migration and validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSetting {
    /// Current name of the setting
    pub key: String,
    /// Validated value
    pub value: JsonValue,
    /// Keys to refresh alongside `key`
    pub children: Vec<String>,
    /// Set when `key` was reached through a renamed key
    pub deprecation: Option<DeprecatedKey>,
}

/// Read-only key space for one host version
///
/// Owns the option registry, the closed alias graph and the migration table.
/// Every method takes `&self`; a schema never changes once built.
#[derive(Debug, Clone)]
pub struct SettingsSchema {
    config: SchemaConfig,
    registry: OptionRegistry,
    graph: AliasGraph,
    migrations: MigrationTable,
    extension: ExtensionReport,
}

impl SettingsSchema {
    /// Built-in schema for the default config
    ///
    /// # Errors
    /// Returns a construction error if a built-in table is inconsistent
    pub fn with_defaults() -> SchemaResult<Self> {
        SchemaBuilder::new(SchemaConfig::default()).build()
    }

    /// Built-in schema for `host_version`
    ///
    /// # Errors
    /// Returns a construction error if a built-in table is inconsistent
    pub fn for_host(host_version: Version) -> SchemaResult<Self> {
        SchemaBuilder::new(SchemaConfig::default().with_host_version(host_version)).build()
    }

    /// Option under its exact key
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownKey`] if not registered
    pub fn lookup(&self, key: &str) -> SchemaResult<&RcOption> {
        Ok(self.registry.lookup(key)?)
    }

    /// Validate `value` for the exact key
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownKey`] or [`RegistryError::Validation`]
    pub fn validate(&self, key: &str, value: &JsonValue) -> SchemaResult<JsonValue> {
        Ok(self.registry.validate(key, value)?)
    }

    /// Keys to refresh when `key` changes
    #[must_use]
    pub fn children(&self, key: &str) -> &[String] {
        self.graph.children(key)
    }

    /// Migration status of `key`
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> Resolution<'a> {
        self.migrations.resolve(key)
    }

    /// Current name of `key`, logging a notice for renamed keys
    ///
    /// # Errors
    /// Returns [`rc_migrate::MigrationError::Removed`] for removed keys
    pub fn redirect<'a>(&'a self, key: &'a str) -> SchemaResult<&'a str> {
        Ok(self.migrations.redirect(key)?)
    }

    /// Option for a user-supplied key, following renames
    ///
    /// # Errors
    /// Returns the migration or lookup failure
    pub fn describe(&self, key: &str) -> SchemaResult<&RcOption> {
        let key = self.redirect(key)?;
        self.lookup(key)
    }

    /// Resolve, validate and expand a user-supplied setting
    ///
    /// Migration runs before any registry or graph access, so removed keys
    /// fail here and renamed keys are validated under their new name.
    ///
    /// # Errors
    /// - [`rc_migrate::MigrationError::Removed`] for removed keys
    /// - [`RegistryError::UnknownKey`] for keys that were never registered
    /// - [`RegistryError::Validation`] if the value is rejected
    pub fn validate_user(&self, key: &str, value: &JsonValue) -> SchemaResult<ValidatedSetting> {
        let resolution = self.migrations.resolve(key);
        let deprecation = resolution.deprecation();
        if let Some(notice) = &deprecation {
            tracing::warn!(
                old_key = %notice.old_key,
                new_key = %notice.new_key,
                version = %notice.version,
                "{notice}; use the new name"
            );
        }
        let key = resolution.into_key()?;
        let value = self.registry.validate(key, value)?;
        Ok(ValidatedSetting {
            key: key.to_string(),
            value,
            children: self.graph.children(key).to_vec(),
            deprecation,
        })
    }

    /// Argument resolution options under this schema's conflict policy
    #[must_use]
    pub fn resolve_options(&self) -> ResolveOptions {
        self.config.resolve_options()
    }

    /// Reconcile call arguments under this schema's conflict policy
    ///
    /// # Errors
    /// Returns [`rc_args::ArgsError`] wrapped in [`crate::SchemaError::Args`]
    pub fn reconcile_args(
        &self,
        slots: &[Slot],
        positional: Vec<JsonValue>,
        kwargs: IndexMap<String, JsonValue>,
    ) -> SchemaResult<Resolved<JsonValue>> {
        Ok(reconcile(slots, positional, kwargs, &self.resolve_options())?)
    }

    /// Re-run the consistency checks on the sealed schema
    ///
    /// # Errors
    /// Returns the first violation: a default that no longer validates, a
    /// graph key that is not registered, or a migration table inconsistency
    pub fn verify(&self) -> SchemaResult<()> {
        for option in self.registry.iter() {
            let revalidated = self.registry.validate(option.key(), option.default_value())?;
            if &revalidated != option.default_value() {
                return Err(RegistryError::validation(
                    option.key(),
                    option.default_value().clone(),
                    "default is not in validated form",
                )
                .into());
            }
        }
        for (parent, children) in self.graph.iter() {
            for key in std::iter::once(parent).chain(children.iter().map(String::as_str)) {
                self.registry.lookup(key)?;
            }
        }
        self.migrations.verify(&self.registry)?;
        Ok(())
    }

    /// Config the schema was built with
    #[must_use]
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Host version the schema was built for
    #[must_use]
    pub fn host_version(&self) -> &Version {
        &self.config.host_version
    }

    /// Option registry
    #[must_use]
    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Closed alias graph
    #[must_use]
    pub fn graph(&self) -> &AliasGraph {
        &self.graph
    }

    /// Migration table
    #[must_use]
    pub fn migrations(&self) -> &MigrationTable {
        &self.migrations
    }

    /// Version gates applied during construction
    #[must_use]
    pub fn extension(&self) -> &ExtensionReport {
        &self.extension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use pretty_assertions::assert_eq;
    use rc_migrate::MigrationError;
    use serde_json::json;

    fn toy_schema() -> SettingsSchema {
        let registry = rc_test_utils::line_registry();
        let mut graph = AliasGraphBuilder::new();
        graph
            .add_synonym_group(["meta.color", "meta.edgecolor"])
            .unwrap();
        graph.add_synonym_group(["line.width", "line.lw"]).unwrap();
        graph.add_children("meta.color", ["axes.edgecolor", "tick.color"]);
        graph.add_children("tick.color", ["xtick.color", "ytick.color"]);
        let mut migrations = MigrationTable::new();
        migrations
            .add_renamed("line.linewidth", "line.width", Version::new(0, 2, 0))
            .unwrap();
        migrations
            .add_removed("line.shadow", "Use a path effect.", Version::new(0, 3, 0))
            .unwrap();
        SchemaBuilder::new(SchemaConfig::default())
            .with_registry(registry)
            .with_graph(graph)
            .with_migrations(migrations)
            .with_gates(Vec::new())
            .build()
            .unwrap()
    }

    #[test]
    fn toy_schema_builds_independently() {
        let schema = toy_schema();
        assert_eq!(schema.registry().len(), 9);
        assert!(schema.extension().applied().is_empty());
        schema.verify().unwrap();
    }

    #[test]
    fn validate_user_expands_children() {
        let schema = toy_schema();
        let setting = schema.validate_user("meta.edgecolor", &json!("RED")).unwrap();
        assert_eq!(setting.key, "meta.edgecolor");
        assert_eq!(setting.value, json!("red"));
        assert_eq!(
            setting.children,
            vec!["axes.edgecolor", "meta.color", "tick.color"]
        );
        assert!(setting.deprecation.is_none());
    }

    #[test]
    fn validate_user_follows_renames() {
        let schema = toy_schema();
        let setting = schema.validate_user("line.linewidth", &json!("2pt")).unwrap();
        assert_eq!(setting.key, "line.width");
        assert_eq!(setting.value, json!(2.0));
        assert_eq!(setting.children, vec!["line.lw"]);
        let notice = setting.deprecation.unwrap();
        assert_eq!(notice.old_key, "line.linewidth");
        assert_eq!(notice.version, Version::new(0, 2, 0));
    }

    #[test]
    fn validate_user_rejects_removed_before_lookup() {
        let schema = toy_schema();
        let err = schema.validate_user("line.shadow", &json!(true)).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Migration(MigrationError::Removed { ref hint, .. }) if hint == "Use a path effect."
        ));
    }

    #[test]
    fn validate_user_reports_bad_values() {
        let schema = toy_schema();
        let err = schema.validate_user("tick.dir", &json!("sideways")).unwrap_err();
        assert!(matches!(err, SchemaError::Registry(RegistryError::Validation { .. })));
        let err = schema.validate_user("tick.size", &json!(4)).unwrap_err();
        assert_eq!(err, SchemaError::Registry(RegistryError::UnknownKey("tick.size".to_string())));
    }

    #[test]
    fn describe_follows_renames() {
        let schema = toy_schema();
        assert_eq!(schema.describe("line.linewidth").unwrap().key(), "line.width");
        assert!(schema.lookup("line.linewidth").is_err());
    }

    #[test]
    fn unknown_graph_key_aborts_build() {
        let mut graph = AliasGraphBuilder::new();
        graph.add_children("meta.color", ["meta.shade"]);
        let err = SchemaBuilder::new(SchemaConfig::default())
            .with_registry(rc_test_utils::line_registry())
            .with_graph(graph)
            .with_migrations(MigrationTable::new())
            .with_gates(Vec::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::Graph(_)));
    }

    #[test]
    fn registered_retired_key_aborts_build() {
        let mut migrations = MigrationTable::new();
        migrations
            .add_removed("tick.dir", "", Version::new(0, 1, 0))
            .unwrap();
        let err = SchemaBuilder::new(SchemaConfig::default())
            .with_registry(rc_test_utils::line_registry())
            .with_graph(AliasGraphBuilder::new())
            .with_migrations(migrations)
            .with_gates(Vec::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::Migration(MigrationError::Invariant(_))));
    }

    #[test]
    fn reconcile_uses_config_policy() {
        let slots = [Slot::new("color").alias("c")];
        let kwargs = rc_test_utils::kwargs([("c", json!("red")), ("color", json!("blue"))]);
        let resolved = toy_schema()
            .reconcile_args(&slots, Vec::new(), kwargs.clone())
            .unwrap();
        assert_eq!(resolved.get("color"), Some(&json!("blue")));

        let strict = SchemaBuilder::new(
            SchemaConfig::default().with_alias_conflicts(rc_args::ConflictPolicy::Strict),
        )
        .with_registry(rc_test_utils::line_registry())
        .with_graph(AliasGraphBuilder::new())
        .with_migrations(MigrationTable::new())
        .with_gates(Vec::new())
        .build()
        .unwrap();
        assert!(matches!(
            strict.reconcile_args(&slots, Vec::new(), kwargs),
            Err(SchemaError::Args(_))
        ));
    }
}
