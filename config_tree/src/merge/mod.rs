//! Deep and shallow merging of configuration mappings.
//!
//! Merges consume their destination and hand it back, so every merge chain
//! owns its accumulator exclusively.

use serde_json::Value;

use crate::Mapping;

/// Overlay `layer` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - Objects merge recursively into object targets.
/// - Any other combination, including an object landing on a scalar or a
///   scalar landing on an object, replaces `target` with `layer`.
/// - Arrays replace wholesale; they are never concatenated.
///
/// # Examples
///
/// ```rust
/// use config_tree::merge_value;
/// use serde_json::json;
///
/// let mut acc = json!({"a": 1, "b": {"x": 1}});
/// merge_value(&mut acc, json!({"b": {"y": 2}, "c": 3}));
/// assert_eq!(acc, json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3}));
///
/// merge_value(&mut acc, json!({"b": [1, 2, 3]}));
/// assert_eq!(acc["b"], json!([1, 2, 3]));
/// ```
pub fn merge_value(target: &mut Value, layer: Value) {
    match (target, layer) {
        (Value::Object(existing), Value::Object(incoming)) => merge_deep_into(existing, incoming),
        (slot, replacement) => *slot = replacement,
    }
}

/// Merge `source` into `destination` in place, recursing wherever both
/// sides hold a mapping at the same key.
pub fn merge_deep_into(destination: &mut Mapping, source: Mapping) {
    for (key, value) in source {
        match destination.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                destination.insert(key, value);
            }
        }
    }
}

/// Deep-merge `source` into `destination` and return the result.
///
/// Keys missing from `destination` are moved across. Where both sides hold
/// a mapping the two are merged recursively; in every other collision the
/// source value wins.
///
/// # Examples
///
/// ```rust
/// use config_tree::{Mapping, merge_deep};
/// use serde_json::{Value, json};
///
/// fn mapping(value: Value) -> Mapping {
///     value.as_object().cloned().unwrap_or_default()
/// }
///
/// let merged = merge_deep(mapping(json!({"a": {"b": 1}})), mapping(json!({"a": {"c": 2}})));
/// assert_eq!(Value::Object(merged), json!({"a": {"b": 1, "c": 2}}));
/// ```
#[must_use]
pub fn merge_deep(mut destination: Mapping, source: Mapping) -> Mapping {
    merge_deep_into(&mut destination, source);
    destination
}

/// Deep-merge every mapping in order, starting from an empty mapping.
///
/// Later mappings take precedence over earlier ones at every leaf.
#[must_use]
pub fn merge_many_deep<I>(mappings: I) -> Mapping
where
    I: IntoIterator<Item = Mapping>,
{
    mappings.into_iter().fold(Mapping::new(), merge_deep)
}

/// Overwrite top-level keys of `destination` with those of `source`.
///
/// Unlike [`merge_deep`], nested mappings are replaced wholesale.
///
/// # Examples
///
/// ```rust
/// use config_tree::{Mapping, merge_shallow};
/// use serde_json::{Value, json};
///
/// fn mapping(value: Value) -> Mapping {
///     value.as_object().cloned().unwrap_or_default()
/// }
///
/// let merged = merge_shallow(mapping(json!({"a": {"x": 1}})), mapping(json!({"a": {"y": 2}})));
/// assert_eq!(Value::Object(merged), json!({"a": {"y": 2}}));
/// ```
#[must_use]
pub fn merge_shallow(mut destination: Mapping, source: Mapping) -> Mapping {
    destination.extend(source);
    destination
}
