//! rcschema Settings Schema
//!
//! Composition root for the settings key space. A [`SettingsSchema`] owns the
//! option registry, the alias graph closed for one host version, and the
//! migration table, and answers the questions a settings store asks on every
//! get and set.
//!
//! # Core Concepts
//!
//! - [`SchemaConfig`]: Host version and alias conflict policy, loadable from TOML
//! - [`SchemaBuilder`]: Runs registry population, version gates, closure and
//!   migration checks in order
//! - [`SettingsSchema`]: Sealed, read-only tables with `validate_user`
//! - [`SharedSchema`]: Snapshot handle for swapping schemas at runtime
//! - [`SettingsStore`]: Reference store exercising the get/set contract
//!
//! # Example
//!
//! ```rust
//! use rc_schema::SettingsSchema;
//! use serde_json::json;
//!
//! let schema = SettingsSchema::with_defaults()?;
//! let setting = schema.validate_user("grid.width", &json!("1pt"))?;
//! assert_eq!(setting.value, json!(1.0));
//! assert!(setting.children.iter().any(|key| key == "grid.linewidth"));
//!
//! let renamed = schema.validate_user("subplots.axwidth", &json!(2))?;
//! assert_eq!(renamed.key, "subplots.refwidth");
//! assert!(renamed.deprecation.is_some());
//! # Ok::<(), rc_schema::SchemaError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
mod schema;
mod shared;
mod store;

pub use config::{SchemaConfig, DEFAULT_HOST_VERSION};
pub use error::{SchemaError, SchemaResult};
pub use schema::{SchemaBuilder, SettingsSchema, ValidatedSetting};
pub use shared::SharedSchema;
pub use store::SettingsStore;

/// Commonly used types across the workspace
pub mod prelude {
    pub use crate::{SchemaBuilder, SchemaConfig, SchemaError, SettingsSchema, SettingsStore};
    pub use rc_args::{ConflictPolicy, ResolveOptions, Slot};
    pub use rc_migrate::{DeprecatedKey, Resolution};
    pub use rc_registry::{JsonValue, OptionRegistry, RcOption};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
