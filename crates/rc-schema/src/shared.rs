//! Atomically replaceable schema handle for hot reload

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::SchemaConfig;
use crate::error::SchemaResult;
use crate::schema::{SchemaBuilder, SettingsSchema};

/// Current schema behind a swappable pointer
///
/// Readers take an [`Arc`] snapshot and keep using it after a swap; they
/// never see a half-built schema because replacements are fully built first.
#[derive(Debug)]
pub struct SharedSchema {
    current: RwLock<Arc<SettingsSchema>>,
}

impl SharedSchema {
    /// Wrap a built schema
    #[must_use]
    pub fn new(schema: SettingsSchema) -> Self {
        Self {
            current: RwLock::new(Arc::new(schema)),
        }
    }

    /// Snapshot of the current schema
    #[must_use]
    pub fn current(&self) -> Arc<SettingsSchema> {
        Arc::clone(&self.current.read())
    }

    /// Swap in `schema`, returning the previous one
    pub fn replace(&self, schema: SettingsSchema) -> Arc<SettingsSchema> {
        let next = Arc::new(schema);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        tracing::debug!(
            from = %previous.host_version(),
            to = %self.current.read().host_version(),
            "Replaced settings schema"
        );
        previous
    }

    /// Build a schema from `config` with the built-in tables and swap it in
    ///
    /// On error the current schema stays in place.
    ///
    /// # Errors
    /// Returns the construction error of the new schema
    pub fn reload(&self, config: SchemaConfig) -> SchemaResult<Arc<SettingsSchema>> {
        let schema = SchemaBuilder::new(config).build()?;
        Ok(self.replace(schema))
    }
}

impl From<SettingsSchema> for SharedSchema {
    fn from(schema: SettingsSchema) -> Self {
        Self::new(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn schema_types_are_thread_safe() {
        assert_send_sync::<SettingsSchema>();
        assert_send_sync::<SharedSchema>();
    }

    #[test]
    fn snapshots_survive_replacement() {
        let shared = SharedSchema::new(SettingsSchema::for_host(Version::new(3, 1, 0)).unwrap());
        let before = shared.current();
        assert!(!before.registry().contains("axes.titlecolor"));

        let previous = shared.replace(SettingsSchema::for_host(Version::new(3, 4, 0)).unwrap());
        assert!(Arc::ptr_eq(&previous, &before));
        assert!(!before.registry().contains("axes.titlecolor"));
        assert!(shared.current().registry().contains("xtick.labelcolor"));
    }

    #[test]
    fn concurrent_readers_see_whole_schemas() {
        let shared = SharedSchema::new(SettingsSchema::for_host(Version::new(3, 1, 0)).unwrap());
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        let schema = shared.current();
                        let gated = schema.registry().contains("xtick.labelcolor");
                        assert_eq!(gated, schema.host_version() >= &Version::new(3, 4, 0));
                    }
                });
            }
            scope.spawn(|| {
                shared
                    .reload(SchemaConfig::default().with_host_version(Version::new(3, 4, 0)))
                    .unwrap();
            });
        });
        assert_eq!(shared.current().host_version(), &Version::new(3, 4, 0));
    }
}
