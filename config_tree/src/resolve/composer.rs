//! Layer composition in precedence order.

use crate::{Mapping, merge_deep, merge_shallow};

/// Where a layer came from.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum LayerOrigin {
    /// Built-in default values.
    Defaults,
    /// A document read from a named source.
    Source {
        /// Name of the document within its source.
        name: String,
    },
    /// Values resolved from flat configuration records.
    Entries,
    /// Explicit overrides supplied by the caller.
    Overrides,
}

/// One mapping in a composition, tagged with its origin.
#[derive(Clone, Debug)]
pub struct TreeLayer {
    origin: LayerOrigin,
    tree: Mapping,
    shallow: bool,
}

impl TreeLayer {
    /// Construct a layer that deep-merges over earlier layers.
    #[must_use]
    pub const fn new(origin: LayerOrigin, tree: Mapping) -> Self {
        Self {
            origin,
            tree,
            shallow: false,
        }
    }

    /// Construct a layer whose top-level keys replace earlier values outright.
    #[must_use]
    pub const fn shallow(origin: LayerOrigin, tree: Mapping) -> Self {
        Self {
            origin,
            tree,
            shallow: true,
        }
    }

    /// Returns the origin of the layer.
    #[must_use]
    pub const fn origin(&self) -> &LayerOrigin {
        &self.origin
    }

    /// Borrow the layer's mapping.
    #[must_use]
    pub const fn tree(&self) -> &Mapping {
        &self.tree
    }

    /// Whether the layer is applied with a shallow merge.
    #[must_use]
    pub const fn is_shallow(&self) -> bool {
        self.shallow
    }

    /// Consume the layer and return its mapping.
    #[must_use]
    pub fn into_tree(self) -> Mapping {
        self.tree
    }
}

/// Builder that accumulates [`TreeLayer`]s and folds them in push order.
///
/// ```rust
/// use config_tree::{LayerOrigin, TreeComposer};
/// use serde_json::{Value, json};
///
/// fn mapping(value: Value) -> config_tree::Mapping {
///     value.as_object().cloned().unwrap_or_default()
/// }
///
/// let mut composer = TreeComposer::new();
/// composer.push_defaults(mapping(json!({"log": {"level": "info", "json": false}})));
/// composer.push_source("app.json", mapping(json!({"log": {"json": true}})));
/// composer.push_shallow_override(mapping(json!({"log": {"level": "debug"}})));
/// assert_eq!(Value::Object(composer.compose()), json!({"log": {"level": "debug"}}));
/// ```
#[derive(Debug, Default)]
pub struct TreeComposer {
    layers: Vec<TreeLayer>,
}

impl TreeComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Create a composer with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
        }
    }

    /// Push a defaults layer.
    pub fn push_defaults(&mut self, tree: Mapping) {
        self.push_layer(TreeLayer::new(LayerOrigin::Defaults, tree));
    }

    /// Push a layer read from the document `name`.
    pub fn push_source(&mut self, name: impl Into<String>, tree: Mapping) {
        self.push_layer(TreeLayer::new(LayerOrigin::Source { name: name.into() }, tree));
    }

    /// Push a layer resolved from configuration records.
    pub fn push_entries(&mut self, tree: Mapping) {
        self.push_layer(TreeLayer::new(LayerOrigin::Entries, tree));
    }

    /// Push overrides that replace whole top-level values.
    pub fn push_shallow_override(&mut self, tree: Mapping) {
        self.push_layer(TreeLayer::shallow(LayerOrigin::Overrides, tree));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: TreeLayer) {
        self.layers.push(layer);
    }

    /// Number of accumulated layers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layers have been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Consume the composer and return the accumulated layers.
    #[must_use]
    pub fn layers(self) -> Vec<TreeLayer> {
        self.layers
    }

    /// Fold every layer over an empty mapping in push order.
    #[must_use]
    pub fn compose(self) -> Mapping {
        self.layers.into_iter().fold(Mapping::new(), |acc, layer| {
            tracing::debug!(origin = ?layer.origin, shallow = layer.shallow, "applying layer");
            if layer.shallow {
                merge_shallow(acc, layer.tree)
            } else {
                merge_deep(acc, layer.tree)
            }
        })
    }
}

impl IntoIterator for TreeComposer {
    type Item = TreeLayer;
    type IntoIter = std::vec::IntoIter<TreeLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}
