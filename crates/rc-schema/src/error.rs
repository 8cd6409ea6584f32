//! Error types for schema assembly and access
//!
//! Construction errors from every table crate funnel into [`SchemaError`],
//! so a failed [`crate::SchemaBuilder::build`] aborts initialization with one
//! type.

use rc_args::ArgsError;
use rc_graph::GraphError;
use rc_migrate::MigrationError;
use rc_registry::RegistryError;

/// Schema errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// Registry lookup, registration or validation failed
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Alias graph construction failed
    #[error("alias graph construction failed: {0}")]
    Graph(#[from] GraphError),

    /// Key was removed, or the migration table is inconsistent
    #[error(transparent)]
    Migration(#[from] MigrationError),

    /// Argument reconciliation failed
    #[error(transparent)]
    Args(#[from] ArgsError),

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl SchemaError {
    /// Create configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if the error comes from a single bad call rather than a broken schema
    #[must_use]
    pub fn is_per_call(&self) -> bool {
        match self {
            Self::Registry(err) => {
                matches!(err, RegistryError::UnknownKey(_) | RegistryError::Validation { .. })
            }
            Self::Migration(err) => matches!(err, MigrationError::Removed { .. }),
            Self::Args(_) => true,
            Self::Graph(_) | Self::Config(_) => false,
        }
    }
}

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
