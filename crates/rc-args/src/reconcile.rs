//! Positional and keyword reconciliation against declared slots

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ArgsError, ArgsResult};
use crate::select::{first_non_empty, AliasConflict, ArgValue, ConflictPolicy, Slot};

/// Parameters that only matter to the plotting layer's own parsing and never
/// reach a downstream call
pub const INTERNAL_PARAMETERS: &[&str] = &[
    "inbounds",
    "default_cmap",
    "default_discrete",
    "plot_contours",
    "plot_lines",
    "skip_autolev",
    "to_centers",
];

/// Options for [`reconcile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Return surplus positional values instead of failing
    pub allow_extra: bool,
    /// How to treat several keyword aliases of one slot
    pub policy: ConflictPolicy,
}

impl ResolveOptions {
    /// Allow surplus positional values
    #[must_use]
    pub fn allow_extra(mut self) -> Self {
        self.allow_extra = true;
        self
    }

    /// Set the conflict policy
    #[must_use]
    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Output of [`reconcile`]
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<V> {
    values: IndexMap<String, Option<V>>,
    remaining: IndexMap<String, V>,
    extra: Vec<V>,
    conflicts: Vec<AliasConflict>,
}

impl<V> Resolved<V> {
    /// Value of a slot; `None` if the slot is unknown or nothing was given
    pub fn get(&self, slot: &str) -> Option<&V> {
        self.values.get(slot).and_then(Option::as_ref)
    }

    /// One entry per declared slot, in declared order
    #[must_use]
    pub fn values(&self) -> &IndexMap<String, Option<V>> {
        &self.values
    }

    /// Keyword arguments that matched no slot
    #[must_use]
    pub fn remaining(&self) -> &IndexMap<String, V> {
        &self.remaining
    }

    /// Surplus positional values, only filled when allowed
    #[must_use]
    pub fn extra(&self) -> &[V] {
        &self.extra
    }

    /// Conflicts arbitrated under [`ConflictPolicy::Warn`]
    #[must_use]
    pub fn conflicts(&self) -> &[AliasConflict] {
        &self.conflicts
    }

    /// Split into slot values, remaining keywords and surplus positionals
    #[allow(clippy::type_complexity)]
    pub fn into_parts(self) -> (IndexMap<String, Option<V>>, IndexMap<String, V>, Vec<V>) {
        (self.values, self.remaining, self.extra)
    }
}

/// Map positional and keyword arguments onto `slots`
///
/// Positional values fill slots in declared order; a missing or empty
/// positional falls back to the slot's keywords. Every slot key is removed
/// from the keyword map whether or not it was used, so `remaining` only
/// holds keywords that belong to no slot.
///
/// # Errors
/// - [`ArgsError::TooManyPositional`] if there are more positional values
///   than slots and `allow_extra` is off
/// - [`ArgsError::ConflictingAliases`] under [`ConflictPolicy::Strict`]
pub fn reconcile<V: ArgValue>(
    slots: &[Slot],
    positional: Vec<V>,
    mut kwargs: IndexMap<String, V>,
    options: &ResolveOptions,
) -> ArgsResult<Resolved<V>> {
    if positional.len() > slots.len() && !options.allow_extra {
        return Err(ArgsError::TooManyPositional {
            expected: slots.len(),
            got: positional.len(),
        });
    }

    let mut positional = positional.into_iter();
    let mut values = IndexMap::with_capacity(slots.len());
    let mut conflicts = Vec::new();
    for slot in slots {
        let keywords = take_keys(&mut kwargs, slot);
        let selection = first_non_empty(slot.name(), positional.next(), keywords, options.policy)?;
        if let Some(conflict) = selection.conflict() {
            conflicts.push(conflict.clone());
        }
        values.insert(slot.name().to_string(), selection.into_value());
    }

    Ok(Resolved {
        values,
        remaining: kwargs,
        extra: positional.collect(),
        conflicts,
    })
}

/// Pop aliased properties into a map keyed by slot name
///
/// Only slots with a non-empty value appear in the output.
///
/// # Errors
/// Returns [`ArgsError::ConflictingAliases`] under [`ConflictPolicy::Strict`]
pub fn pop_aliased<V: ArgValue>(
    kwargs: &mut IndexMap<String, V>,
    specs: &[Slot],
    policy: ConflictPolicy,
) -> ArgsResult<IndexMap<String, V>> {
    let mut output = IndexMap::new();
    for slot in specs {
        let keywords = take_keys(kwargs, slot);
        if let Some(value) = first_non_empty(slot.name(), None, keywords, policy)?.into_value() {
            output.insert(slot.name().to_string(), value);
        }
    }
    Ok(output)
}

/// Pop the named parameters of a downstream call out of `kwargs`
///
/// Empty values are dropped. With `ignore_internal`, names in
/// [`INTERNAL_PARAMETERS`] are still removed from `kwargs` but left out of
/// the output.
pub fn pop_parameters<V: ArgValue>(
    kwargs: &mut IndexMap<String, V>,
    params: &[&str],
    ignore_internal: bool,
) -> IndexMap<String, V> {
    let mut output = IndexMap::new();
    for &param in params {
        let Some(value) = kwargs.shift_remove(param) else {
            continue;
        };
        if ignore_internal && INTERNAL_PARAMETERS.contains(&param) {
            continue;
        }
        if !value.is_empty_arg() {
            output.insert(param.to_string(), value);
        }
    }
    output
}

fn take_keys<V>(kwargs: &mut IndexMap<String, V>, slot: &Slot) -> Vec<(String, V)> {
    slot.keys()
        .filter_map(|key| kwargs.shift_remove_entry(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rc_test_utils::kwargs;
    use serde_json::{json, Value as JsonValue};

    fn plot_slots() -> Vec<Slot> {
        vec![
            Slot::new("color").alias("c"),
            Slot::new("width").alias("lw").alias("linewidth"),
        ]
    }

    #[test]
    fn positional_and_keyword_fill_slots() {
        let resolved = reconcile(
            &plot_slots(),
            vec![json!("red")],
            kwargs([("linewidth", json!(2))]),
            &ResolveOptions::default(),
        )
        .unwrap();
        assert_eq!(resolved.get("color"), Some(&json!("red")));
        assert_eq!(resolved.get("width"), Some(&json!(2)));
        assert!(resolved.remaining().is_empty());
        assert!(resolved.extra().is_empty());
        assert!(resolved.conflicts().is_empty());
    }

    #[test]
    fn missing_slots_are_none() {
        let resolved = reconcile::<JsonValue>(
            &plot_slots(),
            Vec::new(),
            kwargs([("alpha", json!(0.5))]),
            &ResolveOptions::default(),
        )
        .unwrap();
        assert_eq!(resolved.values().len(), 2);
        assert_eq!(resolved.values()["color"], None);
        assert_eq!(resolved.get("width"), None);
        assert_eq!(resolved.remaining(), &kwargs([("alpha", json!(0.5))]));
    }

    #[test]
    fn conflicting_aliases_use_declared_order() {
        let resolved = reconcile::<JsonValue>(
            &plot_slots(),
            Vec::new(),
            kwargs([("c", json!("red")), ("color", json!("blue"))]),
            &ResolveOptions::default(),
        )
        .unwrap();
        assert_eq!(resolved.get("color"), Some(&json!("blue")));
        assert_eq!(resolved.conflicts().len(), 1);
        assert_eq!(resolved.conflicts()[0].chosen, "color");
        assert_eq!(resolved.conflicts()[0].keys, vec!["color", "c"]);
    }

    #[test]
    fn strict_policy_rejects_conflicts() {
        let options = ResolveOptions::default().with_policy(ConflictPolicy::Strict);
        let err = reconcile::<JsonValue>(
            &plot_slots(),
            Vec::new(),
            kwargs([("lw", json!(1)), ("linewidth", json!(2))]),
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, ArgsError::ConflictingAliases { ref slot, .. } if slot == "width"));
    }

    #[test]
    fn positional_settles_slot_even_under_strict() {
        let options = ResolveOptions::default().with_policy(ConflictPolicy::Strict);
        let resolved = reconcile(
            &plot_slots(),
            vec![json!("green")],
            kwargs([("color", json!("blue")), ("c", json!("red"))]),
            &options,
        )
        .unwrap();
        assert_eq!(resolved.get("color"), Some(&json!("green")));
        assert!(resolved.conflicts().is_empty());
        assert!(resolved.remaining().is_empty());
    }

    #[test]
    fn too_many_positional() {
        let err = reconcile(
            &plot_slots(),
            vec![json!("red"), json!(2), json!("extra")],
            IndexMap::new(),
            &ResolveOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, ArgsError::TooManyPositional { expected: 2, got: 3 });
    }

    #[test]
    fn surplus_positionals_returned_when_allowed() {
        let resolved = reconcile(
            &plot_slots(),
            vec![json!("red"), json!(2), json!("extra")],
            IndexMap::new(),
            &ResolveOptions::default().allow_extra(),
        )
        .unwrap();
        assert_eq!(resolved.extra(), &[json!("extra")]);
        let (values, remaining, extra) = resolved.into_parts();
        assert_eq!(values["width"], Some(json!(2)));
        assert!(remaining.is_empty());
        assert_eq!(extra.len(), 1);
    }

    #[test]
    fn null_positional_defers_to_keyword() {
        let resolved = reconcile(
            &plot_slots(),
            vec![json!(null), json!(null)],
            kwargs([("c", json!("k")), ("width", json!(null))]),
            &ResolveOptions::default(),
        )
        .unwrap();
        assert_eq!(resolved.get("color"), Some(&json!("k")));
        assert_eq!(resolved.get("width"), None);
        assert!(resolved.remaining().is_empty());
    }

    #[test]
    fn pop_aliased_keeps_non_empty() {
        let mut kw = kwargs([
            ("lw", json!(1.5)),
            ("c", json!(null)),
            ("zorder", json!(3)),
        ]);
        let popped = pop_aliased(&mut kw, &plot_slots(), ConflictPolicy::Warn).unwrap();
        assert_eq!(popped, kwargs([("width", json!(1.5))]));
        assert_eq!(kw, kwargs([("zorder", json!(3))]));
    }

    #[test]
    fn pop_parameters_skips_internal() {
        let mut kw = kwargs([
            ("levels", json!(10)),
            ("inbounds", json!(true)),
            ("extend", json!(null)),
            ("cmap", json!("viridis")),
        ]);
        let popped = pop_parameters(&mut kw, &["levels", "inbounds", "extend"], true);
        assert_eq!(popped, kwargs([("levels", json!(10))]));
        assert_eq!(kw, kwargs([("cmap", json!("viridis"))]));

        let mut kw = kwargs([("inbounds", json!(false))]);
        let popped = pop_parameters(&mut kw, &["inbounds"], false);
        assert_eq!(popped, kwargs([("inbounds", json!(false))]));
    }

    proptest! {
        #[test]
        fn unrelated_keywords_survive(n in 0usize..3, extra in proptest::collection::btree_set("[a-b]{1,3}", 0..4)) {
            let positional: Vec<JsonValue> = (0..n).map(|i| json!(i)).collect();
            let mut kw = IndexMap::new();
            for key in &extra {
                kw.insert(format!("x_{key}"), json!(key));
            }
            let resolved = reconcile(&plot_slots(), positional, kw.clone(), &ResolveOptions::default()).unwrap();
            prop_assert_eq!(resolved.remaining(), &kw);
            prop_assert_eq!(resolved.values().len(), 2);
            prop_assert_eq!(resolved.values().values().filter(|v| v.is_some()).count(), n);
        }
    }
}
