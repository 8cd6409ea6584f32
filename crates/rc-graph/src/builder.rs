//! Alias graph builder
//!
//! Collects synonym groups and parent→child links, then closes them into a
//! read-only [`AliasGraph`]. The builder is the only mutable stage:
//! [`AliasGraphBuilder::build`] consumes it.

use std::collections::{BTreeMap, BTreeSet};

use rc_registry::OptionRegistry;

use crate::error::{GraphError, GraphResult};
use crate::graph::AliasGraph;

/// Declarative synonym and child tables awaiting closure
///
/// # Example
///
/// ```rust,ignore
/// let mut builder = AliasGraphBuilder::new();
/// builder.add_synonym_group(["grid.linewidth", "grid.width"])?;
/// builder.add_children("meta.width", ["grid.linewidth", "axes.linewidth"]);
/// let graph = builder.build(&registry)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct AliasGraphBuilder {
    children: BTreeMap<String, BTreeSet<String>>,
    groups: Vec<BTreeSet<String>>,
}

impl AliasGraphBuilder {
    /// Create empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create builder holding the built-in child table and synonym groups
    ///
    /// # Errors
    /// Returns [`GraphError::DegenerateGroup`] if a built-in group is malformed
    pub fn with_defaults() -> GraphResult<Self> {
        let mut builder = Self::new();
        for (parent, children) in crate::defaults::CHILDREN {
            builder.add_children(parent, children.iter().copied());
        }
        for group in crate::defaults::SYNONYMS {
            builder.add_synonym_group(group.iter().copied())?;
        }
        Ok(builder)
    }

    /// Declare keys mutually interchangeable
    ///
    /// # Errors
    /// Returns [`GraphError::DegenerateGroup`] if fewer than two distinct keys are given
    pub fn add_synonym_group<I, S>(&mut self, keys: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let group: BTreeSet<String> = keys.into_iter().map(Into::into).collect();
        if group.len() < 2 {
            return Err(GraphError::DegenerateGroup(group.into_iter().collect()));
        }
        self.groups.push(group);
        Ok(())
    }

    /// Set the children of `parent`, replacing any previous declaration
    pub fn add_children<I, S>(&mut self, parent: &str, children: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.insert(
            parent.to_string(),
            children.into_iter().map(Into::into).collect(),
        );
    }

    /// Append children to `parent`, creating the entry if needed
    pub fn extend_children<I, S>(&mut self, parent: &str, children: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children_mut(parent)
            .extend(children.into_iter().map(Into::into));
    }

    /// Mutable child set of `parent`, created empty if absent
    pub fn children_mut(&mut self, parent: &str) -> &mut BTreeSet<String> {
        self.children.entry(parent.to_string()).or_default()
    }

    /// Declared children of `parent`
    #[must_use]
    pub fn children(&self, parent: &str) -> Option<&BTreeSet<String>> {
        self.children.get(parent)
    }

    /// Declared synonym groups
    #[must_use]
    pub fn synonym_groups(&self) -> &[BTreeSet<String>] {
        &self.groups
    }

    /// Check every referenced key against the registry
    fn check_references(&self, registry: &OptionRegistry) -> GraphResult<()> {
        for (parent, children) in &self.children {
            let context = format!("children of '{parent}'");
            for key in std::iter::once(parent).chain(children) {
                registry
                    .lookup(key)
                    .map_err(|source| GraphError::unknown_reference(context.clone(), source))?;
            }
        }
        for group in &self.groups {
            for key in group {
                registry.lookup(key).map_err(|source| {
                    GraphError::unknown_reference(format!("synonym group {group:?}"), source)
                })?;
            }
        }
        Ok(())
    }

    /// Close the tables and produce the read-only graph
    ///
    /// Each pass sets, for every key `k` of every group `G`,
    /// `children(k) = (G ∪ children(k) ∪ children(j) for j in G) − {k}`, and
    /// `synonyms(k)` likewise from the group alone. Passes repeat until the
    /// total size of all sets stops changing. A parent listed among its own
    /// children is dropped from that set.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownReference`] if any key is not registered
    pub fn build(self, registry: &OptionRegistry) -> GraphResult<AliasGraph> {
        self.check_references(registry)?;

        let Self {
            mut children,
            groups,
        } = self;
        for (parent, set) in &mut children {
            set.remove(parent);
        }
        let mut synonyms: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        let mut passes = 0;
        loop {
            let before = cardinality(&children) + cardinality(&synonyms);
            for group in &groups {
                for key in group {
                    let mut closed = group.clone();
                    let mut equivalent = group.clone();
                    for member in group {
                        if let Some(set) = children.get(member) {
                            closed.extend(set.iter().cloned());
                        }
                        if let Some(set) = synonyms.get(member) {
                            equivalent.extend(set.iter().cloned());
                        }
                    }
                    closed.remove(key);
                    equivalent.remove(key);
                    children.insert(key.clone(), closed);
                    synonyms.insert(key.clone(), equivalent);
                }
            }
            passes += 1;
            let after = cardinality(&children) + cardinality(&synonyms);
            tracing::trace!(pass = passes, size = after, "Closure pass");
            if after == before {
                break;
            }
        }

        children.retain(|_, set| !set.is_empty());
        tracing::debug!(
            parents = children.len(),
            groups = groups.len(),
            passes,
            "Closed alias graph"
        );
        Ok(AliasGraph::new(children, synonyms, passes))
    }
}

fn cardinality(sets: &BTreeMap<String, BTreeSet<String>>) -> usize {
    sets.values().map(BTreeSet::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rc_test_utils::registry_with_keys;

    fn keys(graph: &AliasGraph, key: &str) -> Vec<String> {
        graph.children(key).to_vec()
    }

    #[test]
    fn degenerate_groups_rejected() {
        let mut builder = AliasGraphBuilder::new();
        assert!(matches!(
            builder.add_synonym_group(["margin"]),
            Err(GraphError::DegenerateGroup(_))
        ));
        assert!(matches!(
            builder.add_synonym_group(["margin", "margin"]),
            Err(GraphError::DegenerateGroup(_))
        ));
        assert!(builder.synonym_groups().is_empty());
    }

    #[test]
    fn group_members_become_children_of_each_other() {
        let registry = registry_with_keys(&["grid.linewidth", "grid.width"]);
        let mut builder = AliasGraphBuilder::new();
        builder
            .add_synonym_group(["grid.linewidth", "grid.width"])
            .unwrap();
        let graph = builder.build(&registry).unwrap();
        assert_eq!(keys(&graph, "grid.linewidth"), vec!["grid.width"]);
        assert_eq!(keys(&graph, "grid.width"), vec!["grid.linewidth"]);
    }

    #[test]
    fn synonyms_share_children() {
        let registry = registry_with_keys(&[
            "grid.linewidth",
            "grid.width",
            "gridminor.linewidth",
        ]);
        let mut builder = AliasGraphBuilder::new();
        builder.add_children("grid.linewidth", ["gridminor.linewidth"]);
        builder
            .add_synonym_group(["grid.linewidth", "grid.width"])
            .unwrap();
        let graph = builder.build(&registry).unwrap();
        assert_eq!(
            keys(&graph, "grid.width"),
            vec!["grid.linewidth", "gridminor.linewidth"]
        );
        assert_eq!(
            keys(&graph, "grid.linewidth"),
            vec!["grid.width", "gridminor.linewidth"]
        );
        assert_eq!(graph.synonyms_of("grid.width"), ["grid.linewidth"]);
    }

    #[test]
    fn plain_links_are_not_expanded_transitively() {
        let registry = registry_with_keys(&["meta.width", "tick.width", "xtick.major.width"]);
        let mut builder = AliasGraphBuilder::new();
        builder.add_children("meta.width", ["tick.width"]);
        builder.add_children("tick.width", ["xtick.major.width"]);
        let graph = builder.build(&registry).unwrap();
        assert_eq!(keys(&graph, "meta.width"), vec!["tick.width"]);
        assert_eq!(graph.passes(), 1);
    }

    #[test]
    fn self_references_are_dropped() {
        let registry = registry_with_keys(&["tick.dir", "xtick.direction"]);
        let mut builder = AliasGraphBuilder::new();
        builder.add_children("tick.dir", ["tick.dir", "xtick.direction"]);
        let graph = builder.build(&registry).unwrap();
        assert_eq!(keys(&graph, "tick.dir"), vec!["xtick.direction"]);
    }

    #[test]
    fn parent_with_only_itself_has_no_children() {
        let registry = registry_with_keys(&["tick.dir"]);
        let mut builder = AliasGraphBuilder::new();
        builder.add_children("tick.dir", ["tick.dir"]);
        let graph = builder.build(&registry).unwrap();
        assert!(graph.children("tick.dir").is_empty());
        assert!(graph.is_empty());
    }

    #[test]
    fn overlapping_groups_are_transitive() {
        let registry = registry_with_keys(&["a", "b", "c"]);
        let mut builder = AliasGraphBuilder::new();
        builder.add_synonym_group(["a", "b"]).unwrap();
        builder.add_synonym_group(["b", "c"]).unwrap();
        let graph = builder.build(&registry).unwrap();
        assert_eq!(keys(&graph, "a"), vec!["b", "c"]);
        assert_eq!(keys(&graph, "c"), vec!["a", "b"]);
        assert_eq!(graph.synonyms_of("a"), ["b", "c"]);
        assert!(graph.passes() > 1);
    }

    #[test]
    fn unknown_child_is_fatal() {
        let registry = registry_with_keys(&["tick.color", "xtick.color"]);
        let mut builder = AliasGraphBuilder::new();
        builder.add_children("tick.color", ["xtick.color", "ztick.color"]);
        let err = builder.build(&registry).unwrap_err();
        match err {
            GraphError::UnknownReference { context, source } => {
                assert_eq!(context, "children of 'tick.color'");
                assert_eq!(
                    source,
                    rc_registry::RegistryError::UnknownKey("ztick.color".to_string())
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_group_member_is_fatal() {
        let registry = registry_with_keys(&["margin"]);
        let mut builder = AliasGraphBuilder::new();
        builder.add_synonym_group(["margin", "axes.margin"]).unwrap();
        assert!(matches!(
            builder.build(&registry),
            Err(GraphError::UnknownReference { .. })
        ));
    }

    #[test]
    fn extend_and_replace_children() {
        let mut builder = AliasGraphBuilder::new();
        builder.add_children("meta.color", ["axes.edgecolor"]);
        builder.extend_children("meta.color", ["xtick.labelcolor"]);
        assert_eq!(builder.children("meta.color").unwrap().len(), 2);
        builder.add_children("meta.color", ["hatch.color"]);
        assert_eq!(builder.children("meta.color").unwrap().len(), 1);
        builder.children_mut("tick.color").insert("xtick.color".to_string());
        assert!(builder.children("tick.color").is_some());
    }
}
