//! rcschema Option Registry
//!
//! Named settings with defaults, validators and descriptions.
//!
//! # Core Concepts
//!
//! - [`OptionKey`]: Dotted, segment-checked setting name
//! - [`RcOption`]: Default value, validator and description for one key
//! - [`OptionRegistry`]: Keyed store of definitions in registration order
//! - [`Validator`]: Value → validated value rule, shared as [`SharedValidator`]
//!
//! # Example
//!
//! ```rust
//! use rc_registry::{validate, OptionRegistry, RcOption};
//! use serde_json::json;
//!
//! let mut registry = OptionRegistry::new();
//! registry.register(RcOption::new(
//!     "tick.len",
//!     json!("4pt"),
//!     validate::points(),
//!     "Length of major ticks.",
//! ))?;
//!
//! assert_eq!(registry.default_of("tick.len")?, &json!(4.0));
//! assert_eq!(registry.validate("tick.len", &json!("1em"))?, json!(9.0));
//! assert!(registry.validate("tick.len", &json!("long")).is_err());
//! # Ok::<(), rc_registry::RegistryError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod defaults;
mod error;
mod key;
mod option;
mod registry;
pub mod validate;

pub use error::{RegistryError, RegistryResult};
pub use key::{KeyError, OptionKey};
pub use option::RcOption;
pub use registry::OptionRegistry;
pub use validate::{SharedValidator, Validator};

/// JSON value type used for every setting value
pub use serde_json::Value as JsonValue;

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::{RegistryError, RegistryResult};
    pub use crate::key::OptionKey;
    pub use crate::option::RcOption;
    pub use crate::registry::OptionRegistry;
    pub use crate::validate::{self, SharedValidator, Validator};
    pub use crate::JsonValue;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
