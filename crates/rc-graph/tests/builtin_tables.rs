//! Built-in alias tables resolved against host versions

use pretty_assertions::assert_eq;
use rc_graph::{extension, AliasGraph, AliasGraphBuilder};
use rc_registry::OptionRegistry;
use semver::Version;

fn built_in(host: &str) -> (OptionRegistry, AliasGraph) {
    let mut registry = OptionRegistry::with_defaults().unwrap();
    let mut builder = AliasGraphBuilder::with_defaults().unwrap();
    extension::extend(&Version::parse(host).unwrap(), &mut registry, &mut builder).unwrap();
    let graph = builder.build(&registry).unwrap();
    (registry, graph)
}

#[test]
fn builds_for_every_supported_host() {
    for host in ["3.1.0", "3.2.0", "3.3.4", "3.4.0", "3.8.0"] {
        let (registry, graph) = built_in(host);
        for (parent, children) in graph.iter() {
            assert!(registry.contains(parent), "{parent} on {host}");
            for child in children {
                assert!(registry.contains(child), "{child} on {host}");
            }
        }
    }
}

#[test]
fn synonym_children_are_symmetric() {
    let (_, graph) = built_in("3.8.0");
    for (key, _) in graph.iter() {
        for synonym in graph.synonyms_of(key) {
            assert!(graph.children(synonym).iter().any(|child| child == key));
            assert!(graph.are_synonyms(synonym, key));
        }
    }
}

#[test]
fn cmap_group_has_three_members() {
    let (_, graph) = built_in("3.8.0");
    assert_eq!(graph.children("cmap"), ["cmap.sequential", "image.cmap"]);
    assert_eq!(graph.synonyms_of("image.cmap"), ["cmap", "cmap.sequential"]);
}

#[test]
fn meta_synonym_inherits_children() {
    let (_, graph) = built_in("3.8.0");
    let edge = graph.children("meta.edgecolor");
    assert!(edge.iter().any(|key| key == "meta.color"));
    assert!(edge.iter().any(|key| key == "xtick.labelcolor"));
    assert!(edge.iter().any(|key| key == "hatch.color"));
    assert_eq!(graph.children("meta.color").len(), edge.len());
}

#[test]
fn grid_width_synonyms_share_minor_child() {
    let (_, graph) = built_in("3.8.0");
    assert_eq!(
        graph.children("grid.width"),
        ["grid.linewidth", "gridminor.linewidth"]
    );
}

#[test]
fn title_color_child_only_on_new_hosts() {
    let (_, old) = built_in("3.1.0");
    assert!(old.children("title.color").is_empty());
    let (_, new) = built_in("3.2.0");
    assert_eq!(new.children("title.color"), ["axes.titlecolor"]);
}

#[test]
fn tick_labelcolor_is_synonym_of_grid_labelcolor() {
    let (_, old) = built_in("3.3.0");
    assert_eq!(old.children("tick.labelcolor"), ["grid.labelcolor"]);
    let (_, new) = built_in("3.4.0");
    assert_eq!(
        new.children("tick.labelcolor"),
        ["grid.labelcolor", "xtick.labelcolor", "ytick.labelcolor"]
    );
}
