//! Closed alias graph

use std::collections::{BTreeMap, BTreeSet};

/// Read-only closure of the synonym and child tables
///
/// For each key, [`children`](Self::children) lists every other key that must
/// be refreshed when it changes, sorted and duplicate-free.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasGraph {
    children: BTreeMap<String, Vec<String>>,
    synonyms: BTreeMap<String, Vec<String>>,
    passes: usize,
}

impl AliasGraph {
    pub(crate) fn new(
        children: BTreeMap<String, BTreeSet<String>>,
        synonyms: BTreeMap<String, BTreeSet<String>>,
        passes: usize,
    ) -> Self {
        Self {
            children: flatten(children),
            synonyms: flatten(synonyms),
            passes,
        }
    }

    /// Keys to refresh when `key` changes; empty if none
    #[must_use]
    pub fn children(&self, key: &str) -> &[String] {
        self.children.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Other members of the equivalence class of `key`
    #[must_use]
    pub fn synonyms_of(&self, key: &str) -> &[String] {
        self.synonyms.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Check if two distinct keys denote the same setting
    #[must_use]
    pub fn are_synonyms(&self, a: &str, b: &str) -> bool {
        self.synonyms_of(a).iter().any(|key| key == b)
    }

    /// Keys with at least one child
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Parent keys with their children, sorted by parent
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.children
            .iter()
            .map(|(key, children)| (key.as_str(), children.as_slice()))
    }

    /// Get number of parent keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if no key has children
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Closure passes until the fixed point
    #[inline]
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }
}

fn flatten(sets: BTreeMap<String, BTreeSet<String>>) -> BTreeMap<String, Vec<String>> {
    sets.into_iter()
        .map(|(key, set)| (key, set.into_iter().collect()))
        .collect()
}
