//! Reference settings store
//!
//! A minimal key/value store over a [`SettingsSchema`] that follows the
//! get/set contract: migration first, then validation, then fan-out of the
//! validated value to every child key.

use std::sync::Arc;

use indexmap::IndexMap;
use rc_registry::{JsonValue, RegistryError};

use crate::error::SchemaResult;
use crate::schema::{SettingsSchema, ValidatedSetting};

/// Current values for every registered key
#[derive(Debug, Clone)]
pub struct SettingsStore {
    schema: Arc<SettingsSchema>,
    values: IndexMap<String, JsonValue>,
}

impl SettingsStore {
    /// Store holding the schema's defaults
    #[must_use]
    pub fn new(schema: Arc<SettingsSchema>) -> Self {
        let values = schema
            .registry()
            .iter()
            .map(|option| (option.key().to_string(), option.default_value().clone()))
            .collect();
        Self { schema, values }
    }

    /// Schema the store validates against
    #[must_use]
    pub fn schema(&self) -> &Arc<SettingsSchema> {
        &self.schema
    }

    /// Current value, following renames
    ///
    /// # Errors
    /// Returns the migration failure for removed keys, or
    /// [`RegistryError::UnknownKey`]
    pub fn get(&self, key: &str) -> SchemaResult<&JsonValue> {
        let key = self.schema.redirect(key)?;
        self.values
            .get(key)
            .ok_or_else(|| RegistryError::UnknownKey(key.to_string()).into())
    }

    /// Validate and store a value under `key` and all of its children
    ///
    /// Children receive the validated value unchanged. Nothing is written
    /// if validation fails.
    ///
    /// # Errors
    /// Returns the failure from [`SettingsSchema::validate_user`]
    pub fn set(&mut self, key: &str, value: &JsonValue) -> SchemaResult<ValidatedSetting> {
        let setting = self.schema.validate_user(key, value)?;
        self.apply(&setting);
        Ok(setting)
    }

    /// Apply several settings, all or nothing
    ///
    /// Later entries win where keys or children overlap.
    ///
    /// # Errors
    /// Returns the first validation failure; the store is left untouched
    pub fn update<'k, I>(&mut self, settings: I) -> SchemaResult<Vec<ValidatedSetting>>
    where
        I: IntoIterator<Item = (&'k str, JsonValue)>,
    {
        let validated = settings
            .into_iter()
            .map(|(key, value)| self.schema.validate_user(key, &value))
            .collect::<SchemaResult<Vec<_>>>()?;
        for setting in &validated {
            self.apply(setting);
        }
        Ok(validated)
    }

    /// Restore the default of `key` and its children
    ///
    /// # Errors
    /// Returns the migration failure for removed keys, or
    /// [`RegistryError::UnknownKey`]
    pub fn reset(&mut self, key: &str) -> SchemaResult<ValidatedSetting> {
        let default = self.schema.describe(key)?.default_value().clone();
        self.set(key, &default)
    }

    /// Keys whose value differs from the registered default
    pub fn changed(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        let registry = self.schema.registry();
        self.values.iter().filter_map(move |(key, value)| {
            let default = registry.default_of(key).ok()?;
            (default != value).then_some((key.as_str(), value))
        })
    }

    fn apply(&mut self, setting: &ValidatedSetting) {
        for key in std::iter::once(&setting.key).chain(&setting.children) {
            self.values.insert(key.clone(), setting.value.clone());
        }
        tracing::trace!(
            key = %setting.key,
            children = setting.children.len(),
            "Stored setting"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchemaConfig;
    use crate::error::SchemaError;
    use crate::schema::SchemaBuilder;
    use pretty_assertions::assert_eq;
    use rc_graph::AliasGraphBuilder;
    use rc_migrate::MigrationTable;
    use semver::Version;
    use serde_json::json;

    fn store() -> SettingsStore {
        let mut graph = AliasGraphBuilder::new();
        graph.add_synonym_group(["line.width", "line.lw"]).unwrap();
        graph.add_children("tick.color", ["xtick.color", "ytick.color"]);
        let mut migrations = MigrationTable::new();
        migrations
            .add_renamed("tick.colour", "tick.color", Version::new(0, 4, 0))
            .unwrap();
        migrations
            .add_removed("tick.shadow", "", Version::new(0, 5, 0))
            .unwrap();
        let schema = SchemaBuilder::new(SchemaConfig::default())
            .with_registry(rc_test_utils::line_registry())
            .with_graph(graph)
            .with_migrations(migrations)
            .with_gates(Vec::new())
            .build()
            .unwrap();
        SettingsStore::new(Arc::new(schema))
    }

    #[test]
    fn starts_at_defaults() {
        let store = store();
        assert_eq!(store.get("tick.dir").unwrap(), &json!("out"));
        assert_eq!(store.changed().count(), 0);
    }

    #[test]
    fn set_fans_out_to_children() {
        let mut store = store();
        let setting = store.set("tick.color", &json!("red")).unwrap();
        assert_eq!(setting.children, vec!["xtick.color", "ytick.color"]);
        assert_eq!(store.get("xtick.color").unwrap(), &json!("red"));
        assert_eq!(store.get("ytick.color").unwrap(), &json!("red"));
        assert_eq!(store.get("axes.edgecolor").unwrap(), &json!("black"));

        let changed: Vec<_> = store.changed().map(|(key, _)| key).collect();
        assert_eq!(changed, vec!["tick.color", "xtick.color", "ytick.color"]);
    }

    #[test]
    fn synonyms_stay_in_step() {
        let mut store = store();
        store.set("line.lw", &json!("3pt")).unwrap();
        assert_eq!(store.get("line.width").unwrap(), &json!(3.0));
        store.reset("line.width").unwrap();
        assert_eq!(store.get("line.lw").unwrap(), &json!(1.5));
    }

    #[test]
    fn renamed_keys_read_and_write_through() {
        let mut store = store();
        let setting = store.set("tick.colour", &json!("blue")).unwrap();
        assert_eq!(setting.key, "tick.color");
        assert!(setting.deprecation.is_some());
        assert_eq!(store.get("tick.colour").unwrap(), &json!("blue"));
    }

    #[test]
    fn removed_keys_always_fail() {
        let mut store = store();
        assert!(matches!(store.get("tick.shadow"), Err(SchemaError::Migration(_))));
        assert!(matches!(
            store.set("tick.shadow", &json!(true)),
            Err(SchemaError::Migration(_))
        ));
        assert!(store.reset("tick.shadow").is_err());
    }

    #[test]
    fn failed_update_leaves_store_untouched() {
        let mut store = store();
        let err = store
            .update([("tick.color", json!("red")), ("tick.dir", json!("sideways"))])
            .unwrap_err();
        assert!(matches!(err, SchemaError::Registry(RegistryError::Validation { .. })));
        assert_eq!(store.get("tick.color").unwrap(), &json!("black"));
        assert_eq!(store.changed().count(), 0);

        let applied = store
            .update([("tick.color", json!("red")), ("tick.dir", json!("in"))])
            .unwrap();
        assert_eq!(applied.len(), 2);
        assert_eq!(store.get("tick.dir").unwrap(), &json!("in"));
    }

    #[test]
    fn unknown_keys_fail() {
        let store = store();
        assert_eq!(
            store.get("tick.size").unwrap_err(),
            SchemaError::Registry(RegistryError::UnknownKey("tick.size".to_string()))
        );
    }
}
