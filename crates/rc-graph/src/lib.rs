//! rcschema Alias Graph
//!
//! Closes synonym groups and parent→child links into the table of keys to
//! refresh whenever a setting changes.
//!
//! # Core Concepts
//!
//! - [`AliasGraphBuilder`]: Mutable synonym and child tables
//! - [`extension`]: Host-version gated additions, applied to the builder
//! - [`AliasGraph`]: Read-only closure produced by [`AliasGraphBuilder::build`]
//!
//! # Example
//!
//! ```rust
//! use rc_graph::AliasGraphBuilder;
//! use rc_registry::{validate, OptionRegistry, RcOption};
//! use serde_json::json;
//!
//! let mut registry = OptionRegistry::new();
//! for key in ["grid.linewidth", "grid.width", "gridminor.linewidth"] {
//!     registry.register(RcOption::new(key, json!(0.6), validate::points(), ""))?;
//! }
//!
//! let mut builder = AliasGraphBuilder::new();
//! builder.add_synonym_group(["grid.linewidth", "grid.width"])?;
//! builder.add_children("grid.linewidth", ["gridminor.linewidth"]);
//! let graph = builder.build(&registry)?;
//!
//! assert_eq!(graph.children("grid.width"), ["grid.linewidth", "gridminor.linewidth"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod builder;
mod defaults;
mod error;
pub mod extension;
mod graph;

pub use builder::AliasGraphBuilder;
pub use error::{GraphError, GraphResult};
pub use extension::{ExtensionReport, Mutation, VersionGate};
pub use graph::AliasGraph;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
