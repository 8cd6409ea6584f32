//! Testing utilities for rcschema workspace
//!
//! Toy registries, keyword maps and proptest strategies for synonym tables.

#![allow(missing_docs)]

use indexmap::IndexMap;
use proptest::prelude::*;
use rc_registry::{validate, JsonValue, OptionRegistry, RcOption};
use serde_json::json;

/// Registry where every key accepts any value and defaults to null
pub fn registry_with_keys<S: AsRef<str>>(keys: &[S]) -> OptionRegistry {
    let mut registry = OptionRegistry::new();
    for key in keys {
        registry
            .register(RcOption::new(
                key.as_ref(),
                JsonValue::Null,
                validate::from_fn("any", |value| Ok(value.clone())),
                "",
            ))
            .unwrap();
    }
    registry
}

/// Small registry shaped like a plotting library's line settings
pub fn line_registry() -> OptionRegistry {
    let mut registry = OptionRegistry::new();
    let options = [
        RcOption::new("meta.color", json!("black"), validate::color(), "Color of everything."),
        RcOption::new("meta.edgecolor", json!("black"), validate::color(), "Synonym."),
        RcOption::new("axes.edgecolor", json!("black"), validate::color(), "Axes edges."),
        RcOption::new("tick.color", json!("black"), validate::color(), "Tick color."),
        RcOption::new("xtick.color", json!("black"), validate::color(), "X tick color."),
        RcOption::new("ytick.color", json!("black"), validate::color(), "Y tick color."),
        RcOption::new("line.width", json!(1.5), validate::points(), "Line width."),
        RcOption::new("line.lw", json!(1.5), validate::points(), "Synonym."),
        RcOption::new(
            "tick.dir",
            json!("out"),
            validate::belongs([json!("in"), json!("out"), json!("inout")]),
            "Tick direction.",
        ),
    ];
    for option in options {
        registry.register(option).unwrap();
    }
    registry
}

/// Keys `k0` .. `k{n-1}`
pub fn toy_keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("k{i}")).collect()
}

/// Keyword map from literal pairs, preserving order
pub fn kwargs<const N: usize>(pairs: [(&str, JsonValue); N]) -> IndexMap<String, JsonValue> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Random synonym groups over `k0` .. `k{universe-1}`, each with two or more distinct keys
pub fn synonym_groups(universe: usize) -> impl Strategy<Value = Vec<Vec<String>>> {
    let group = proptest::collection::btree_set(0..universe, 2..=4)
        .prop_map(|members| {
            members
                .into_iter()
                .map(|i| format!("k{i}"))
                .collect::<Vec<String>>()
        });
    proptest::collection::vec(group, 0..6)
}

/// Random parent → children links over `k0` .. `k{universe-1}`
pub fn child_links(universe: usize) -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    let link = (
        0..universe,
        proptest::collection::vec(0..universe, 1..4),
    )
        .prop_map(|(parent, children)| {
            (
                format!("k{parent}"),
                children
                    .into_iter()
                    .map(|i| format!("k{i}"))
                    .collect::<Vec<String>>(),
            )
        });
    proptest::collection::vec(link, 0..6)
}
