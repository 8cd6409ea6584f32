//! Error types for key migration

use std::fmt;

use semver::Version;

/// Migration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// Key was retired without a replacement
    #[error("setting '{key}' was removed in version {version}{}", Hint(.hint))]
    Removed {
        /// Retired key
        key: String,
        /// Suggested alternative, possibly empty
        hint: String,
        /// Release that removed the key
        version: Version,
    },

    /// Table is inconsistent with itself or with the registry
    #[error("migration table invariant violated: {0}")]
    Invariant(String),
}

impl MigrationError {
    /// Create invariant error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }
}

struct Hint<'a>(&'a str);

impl fmt::Display for Hint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, ". {}", self.0)
        }
    }
}

/// Result type alias for migration operations
pub type MigrationResult<T> = Result<T, MigrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_display_with_hint() {
        let err = MigrationError::Removed {
            key: "geogrid.latmax".to_string(),
            hint: "Please use ax.format(latmax=N) instead.".to_string(),
            version: Version::new(0, 6, 0),
        };
        assert_eq!(
            err.to_string(),
            "setting 'geogrid.latmax' was removed in version 0.6.0. Please use ax.format(latmax=N) instead."
        );
    }

    #[test]
    fn removed_display_without_hint() {
        let err = MigrationError::Removed {
            key: "rgbcycle".to_string(),
            hint: String::new(),
            version: Version::new(0, 6, 0),
        };
        assert_eq!(err.to_string(), "setting 'rgbcycle' was removed in version 0.6.0");
    }
}
