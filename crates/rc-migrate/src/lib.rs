//! rcschema Key Migration
//!
//! Backward compatibility for setting names: renamed keys are redirected to
//! their current name with a deprecation notice, removed keys are rejected
//! with a hint.
//!
//! # Example
//!
//! ```rust
//! use rc_migrate::{MigrationTable, Resolution};
//!
//! let table = MigrationTable::with_defaults();
//! assert_eq!(table.redirect("subplots.axwidth")?, "subplots.refwidth");
//! assert!(matches!(table.resolve("tick.dir"), Resolution::Current("tick.dir")));
//! assert!(table.redirect("geogrid.latmax").is_err());
//! # Ok::<(), rc_migrate::MigrationError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod defaults;
mod error;
mod table;

pub use error::{MigrationError, MigrationResult};
pub use table::{DeprecatedKey, MigrationTable, Resolution, Retirement};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
