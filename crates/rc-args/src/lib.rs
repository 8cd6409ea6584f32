//! rcschema Argument Resolution
//!
//! Helpers for plotting calls that accept the same parameter under several
//! names and positions.
//!
//! # Core Concepts
//!
//! - [`Slot`]: A parameter name plus keyword aliases in priority order
//! - [`first_non_empty`]: Pick one value from a positional and its aliases
//! - [`reconcile`]: Map a whole call's positional and keyword arguments onto slots
//!
//! # Example
//!
//! ```rust
//! use indexmap::IndexMap;
//! use rc_args::{reconcile, ResolveOptions, Slot};
//! use serde_json::json;
//!
//! let slots = [Slot::new("color").alias("c"), Slot::with_aliases("width", ["lw", "linewidth"])];
//! let mut kwargs = IndexMap::new();
//! kwargs.insert("linewidth".to_string(), json!(2));
//!
//! let resolved = reconcile(&slots, vec![json!("red")], kwargs, &ResolveOptions::default())?;
//! assert_eq!(resolved.get("color"), Some(&json!("red")));
//! assert_eq!(resolved.get("width"), Some(&json!(2)));
//! assert!(resolved.remaining().is_empty());
//! # Ok::<(), rc_args::ArgsError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod reconcile;
mod select;

pub use error::{ArgsError, ArgsResult};
pub use reconcile::{pop_aliased, pop_parameters, reconcile, ResolveOptions, Resolved, INTERNAL_PARAMETERS};
pub use select::{first_non_empty, AliasConflict, ArgValue, ConflictPolicy, Selection, Slot, Source};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
