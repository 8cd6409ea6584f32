//! Error types for argument resolution

/// Argument resolution errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    /// More positional arguments than declared slots
    #[error("expected up to {expected} positional arguments, got {got}")]
    TooManyPositional {
        /// Declared slots
        expected: usize,
        /// Supplied positional arguments
        got: usize,
    },

    /// Several keyword aliases of one slot were given under the strict policy
    #[error("conflicting keyword arguments for '{slot}': {}", .keys.join(", "))]
    ConflictingAliases {
        /// Slot name
        slot: String,
        /// Aliases that were all non-empty, in declared order
        keys: Vec<String>,
    },
}

/// Result type alias for argument resolution
pub type ArgsResult<T> = Result<T, ArgsError>;
