//! Error types for alias graph construction

use rc_registry::RegistryError;

/// Graph construction errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A synonym group or child link names an unregistered setting
    #[error("{context} references an unregistered setting: {source}")]
    UnknownReference {
        /// Group or link that holds the reference
        context: String,
        /// Registry lookup failure
        #[source]
        source: RegistryError,
    },

    /// Synonym group with fewer than two distinct keys
    #[error("synonym group {0:?} needs at least two distinct keys")]
    DegenerateGroup(Vec<String>),

    /// Registry mutation requested by a version gate failed
    #[error("version gate {threshold} failed: {source}")]
    Gate {
        /// Gate threshold version
        threshold: semver::Version,
        /// Registry failure
        #[source]
        source: RegistryError,
    },
}

impl GraphError {
    /// Create unknown reference error
    pub fn unknown_reference(context: impl Into<String>, source: RegistryError) -> Self {
        Self::UnknownReference {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
