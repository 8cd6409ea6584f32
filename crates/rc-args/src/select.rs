//! First-non-empty selection among a positional value and keyword aliases

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{ArgsError, ArgsResult};

/// Values that can be "not given"
pub trait ArgValue {
    /// Whether the value counts as absent
    fn is_empty_arg(&self) -> bool;
}

impl ArgValue for JsonValue {
    fn is_empty_arg(&self) -> bool {
        self.is_null()
    }
}

impl<T> ArgValue for Option<T> {
    fn is_empty_arg(&self) -> bool {
        self.is_none()
    }
}

/// Logical parameter with keyword aliases
///
/// The primary name has the highest keyword priority, followed by the
/// aliases in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    name: String,
    aliases: Vec<String>,
}

impl Slot {
    /// Slot without aliases
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Slot with aliases in priority order
    pub fn with_aliases<I, S>(name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// Add an alias with lower priority than existing ones
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Primary name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Aliases in priority order
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Primary name followed by aliases
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// What to do when several keyword aliases are given at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Take the highest-priority alias and log a warning
    #[default]
    Warn,
    /// Fail with [`ArgsError::ConflictingAliases`]
    Strict,
}

/// Where the selected value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Positional argument
    Positional,
    /// Keyword argument with this name
    Keyword(String),
}

/// Record of an arbitrated conflict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasConflict {
    /// Slot name
    pub slot: String,
    /// Keyword that won
    pub chosen: String,
    /// All non-empty keywords, in declared order
    pub keys: Vec<String>,
}

/// Outcome of first-non-empty selection
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<V> {
    /// No candidate was given
    Empty,
    /// At most one keyword and possibly a positional value were given
    Unambiguous {
        /// Selected value
        value: V,
        /// Where it came from
        source: Source,
    },
    /// Several keywords were given; the highest-priority one won
    Arbitrated {
        /// Selected value
        value: V,
        /// Conflict record
        conflict: AliasConflict,
    },
}

impl<V> Selection<V> {
    /// Selected value, if any
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Empty => None,
            Self::Unambiguous { value, .. } | Self::Arbitrated { value, .. } => Some(value),
        }
    }

    /// Take the selected value
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Empty => None,
            Self::Unambiguous { value, .. } | Self::Arbitrated { value, .. } => Some(value),
        }
    }

    /// Conflict record, if arbitration happened
    pub fn conflict(&self) -> Option<&AliasConflict> {
        match self {
            Self::Arbitrated { conflict, .. } => Some(conflict),
            _ => None,
        }
    }
}

/// Pick the first non-empty candidate
///
/// `keywords` must be in declared priority order. A non-empty positional
/// value always wins, and the keywords are then ignored without arbitration.
/// Otherwise two or more non-empty keywords are a conflict, decided by
/// `policy`.
///
/// # Errors
/// Returns [`ArgsError::ConflictingAliases`] under [`ConflictPolicy::Strict`]
pub fn first_non_empty<V: ArgValue>(
    slot: &str,
    positional: Option<V>,
    keywords: Vec<(String, V)>,
    policy: ConflictPolicy,
) -> ArgsResult<Selection<V>> {
    if let Some(value) = positional.filter(|value| !value.is_empty_arg()) {
        return Ok(Selection::Unambiguous {
            value,
            source: Source::Positional,
        });
    }

    let mut given: Vec<(String, V)> = keywords
        .into_iter()
        .filter(|(_, value)| !value.is_empty_arg())
        .collect();

    if given.len() > 1 {
        let keys: Vec<String> = given.iter().map(|(key, _)| key.clone()).collect();
        if policy == ConflictPolicy::Strict {
            return Err(ArgsError::ConflictingAliases {
                slot: slot.to_string(),
                keys,
            });
        }
        let (chosen, value) = given.remove(0);
        tracing::warn!(
            slot,
            chosen = %chosen,
            keys = ?keys,
            "Got conflicting or duplicate keyword arguments; using the first"
        );
        return Ok(Selection::Arbitrated {
            value,
            conflict: AliasConflict {
                slot: slot.to_string(),
                chosen,
                keys,
            },
        });
    }

    Ok(match given.pop() {
        Some((key, value)) => Selection::Unambiguous {
            value,
            source: Source::Keyword(key),
        },
        None => Selection::Empty,
    })
}
