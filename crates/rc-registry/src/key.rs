//! Dotted option keys
//!
//! Provides [`OptionKey`] for hierarchical naming of settings.

use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Dotted name of a setting
///
/// Hierarchical structure using `.`-separated segments.
///
/// # Examples
/// - `grid.color` → `["grid", "color"]`
/// - `xtick.major.width` → `["xtick", "major", "width"]`
/// - `font.sans-serif` → `["font", "sans-serif"]`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionKey(String);

impl OptionKey {
    /// Parse and validate a key
    ///
    /// # Errors
    /// Returns [`KeyError`] if the key is empty or has a malformed segment
    pub fn parse(key: &str) -> Result<Self, KeyError> {
        key.parse()
    }

    /// Get the key as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterator over segments from namespace to leaf
    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Get number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// Always false: keys have at least one segment
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First segment, e.g. `grid` for `grid.color`
    #[inline]
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }

    /// Last segment, e.g. `color` for `grid.color`
    #[inline]
    #[must_use]
    pub fn leaf(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Get parent key (if more than one segment)
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.rfind('.').map(|idx| Self(self.0[..idx].to_string()))
    }

    /// Check if this key is a segment-wise prefix of another
    ///
    /// # Examples
    /// - `grid` is prefix of `grid.color`
    /// - `grid` is NOT prefix of `gridminor.color`
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other.0 == self.0
            || (other.0.starts_with(&self.0) && other.0.as_bytes().get(self.0.len()) == Some(&b'.'))
    }

    /// Append a segment, returning new key
    ///
    /// # Errors
    /// Returns [`KeyError`] if the segment is malformed
    pub fn child(&self, segment: &str) -> Result<Self, KeyError> {
        validate_segment(segment)?;
        Ok(Self(format!("{}.{}", self.0, segment)))
    }
}

fn validate_segment(segment: &str) -> Result<(), KeyError> {
    if segment.is_empty() {
        return Err(KeyError::EmptySegment);
    }
    if segment
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
    {
        return Err(KeyError::InvalidSegment(segment.to_string()));
    }
    Ok(())
}

impl Display for OptionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OptionKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeyError::Empty);
        }
        for segment in s.split('.') {
            validate_segment(segment)?;
        }
        Ok(Self(s.to_string()))
    }
}

impl AsRef<str> for OptionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for OptionKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for OptionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OptionKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors related to option keys
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// Key is the empty string
    #[error("option key is empty")]
    Empty,

    /// Empty segment in key
    #[error("option key contains empty segment")]
    EmptySegment,

    /// Invalid segment characters
    #[error("invalid segment: {0} (must be alphanumeric, underscore or hyphen)")]
    InvalidSegment(String),
}
