//! Build nested mappings from segmented key paths.

use std::sync::Arc;

use serde_json::Value;

use crate::coerce::coerce_key_or_zero;
use crate::{DataType, Mapping, TreeError, TreeResult, coerce};

/// Separator used for dotted keys such as `db.host`.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Split a dotted `key` into path segments.
///
/// An empty `separator` yields the whole key as a single segment.
///
/// # Examples
///
/// ```rust
/// use config_tree::split_key;
///
/// assert_eq!(split_key("db.primary.host", "."), vec!["db", "primary", "host"]);
/// assert_eq!(split_key("port", "."), vec!["port"]);
/// ```
#[must_use]
pub fn split_key<'a>(key: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return vec![key];
    }
    key.split(separator).collect()
}

/// Build a single-branch mapping addressing `path`, storing `raw` coerced by
/// `data_type` at the leaf.
///
/// # Errors
///
/// Returns [`TreeError::EmptyPath`] when `path` has no segments, or
/// [`TreeError::Coercion`] when `raw` is not valid for `data_type`.
///
/// # Examples
///
/// ```rust
/// use config_tree::{DataType, build_map};
/// use serde_json::{Value, json};
///
/// let tree = build_map(&["server", "port"], "8080", DataType::Int)?;
/// assert_eq!(Value::Object(tree), json!({"server": {"port": 8080}}));
///
/// assert!(build_map(&["server", "port"], "http", DataType::Int).is_err());
/// # Ok::<_, std::sync::Arc<config_tree::TreeError>>(())
/// ```
pub fn build_map<S: AsRef<str>>(path: &[S], raw: &str, data_type: DataType) -> TreeResult<Mapping> {
    if path.is_empty() {
        return Err(Arc::new(TreeError::EmptyPath));
    }
    let leaf = coerce(raw, data_type)
        .map_err(|source| Arc::new(TreeError::coercion(join_path(path), source)))?;
    nest(path, leaf)
}

/// Build a single-branch mapping addressing `path`, falling back to the zero
/// value of `data_type` when `raw` does not coerce.
///
/// Fallbacks are reported as `tracing` warnings carrying the dotted key.
///
/// # Errors
///
/// Returns [`TreeError::EmptyPath`] when `path` has no segments.
///
/// # Examples
///
/// ```rust
/// use config_tree::{DataType, build_map_lenient};
/// use serde_json::{Value, json};
///
/// let tree = build_map_lenient(&["x"], "abc", DataType::Int)?;
/// assert_eq!(Value::Object(tree), json!({"x": 0}));
/// # Ok::<_, std::sync::Arc<config_tree::TreeError>>(())
/// ```
pub fn build_map_lenient<S: AsRef<str>>(
    path: &[S],
    raw: &str,
    data_type: DataType,
) -> TreeResult<Mapping> {
    if path.is_empty() {
        return Err(Arc::new(TreeError::EmptyPath));
    }
    let leaf = coerce_key_or_zero(&join_path(path), raw, data_type);
    nest(path, leaf)
}

/// Split `key` on `separator` and build the mapping it addresses.
///
/// # Errors
///
/// Propagates the errors of [`build_map`].
pub fn build_map_from_key(
    key: &str,
    separator: &str,
    raw: &str,
    data_type: DataType,
) -> TreeResult<Mapping> {
    build_map(&split_key(key, separator), raw, data_type)
}

/// Wrap `leaf` in one single-key mapping per segment, innermost last.
fn nest<S: AsRef<str>>(path: &[S], leaf: Value) -> TreeResult<Mapping> {
    let Some((last, parents)) = path.split_last() else {
        return Err(Arc::new(TreeError::EmptyPath));
    };
    let mut tree = Mapping::new();
    tree.insert(last.as_ref().to_owned(), leaf);
    for segment in parents.iter().rev() {
        let mut parent = Mapping::new();
        parent.insert(segment.as_ref().to_owned(), Value::Object(tree));
        tree = parent;
    }
    Ok(tree)
}

fn join_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(|segment| segment.as_ref())
        .collect::<Vec<&str>>()
        .join(DEFAULT_SEPARATOR)
}
