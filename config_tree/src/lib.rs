//! Core crate for building and merging nested configuration trees.
//!
//! Configuration values frequently arrive as flat records: a dotted key such
//! as `db.host`, a raw string, and a declared [`DataType`]. This crate turns
//! those records into nested [`Mapping`]s and combines them, with later
//! layers overriding earlier ones at the leaves while nested structure is
//! preserved.
//!
//! # Example
//!
//! ```rust
//! use config_tree::{DataType, build_map_lenient, merge_many_deep};
//! use serde_json::json;
//!
//! let host = build_map_lenient(&["db", "host"], "localhost", DataType::String)?;
//! let port = build_map_lenient(&["db", "port"], "5432", DataType::Int)?;
//! let tree = merge_many_deep([host, port]);
//! assert_eq!(
//!     serde_json::Value::Object(tree),
//!     json!({"db": {"host": "localhost", "port": 5432}})
//! );
//! # Ok::<_, std::sync::Arc<config_tree::TreeError>>(())
//! ```

mod build;
mod coerce;
mod data_type;
mod error;
mod extract;
mod merge;
pub mod model;
mod resolve;
mod result_ext;
pub mod source;

/// A single layer of nested configuration.
pub type Mapping = serde_json::Map<String, serde_json::Value>;

/// Convenience alias for results returned by this crate.
///
/// Errors are shared behind an [`std::sync::Arc`] so aggregated failures can
/// reference the same underlying error without cloning it.
pub type TreeResult<T> = Result<T, std::sync::Arc<TreeError>>;

pub use build::{DEFAULT_SEPARATOR, build_map, build_map_from_key, build_map_lenient, split_key};
pub use coerce::{CoercionError, CoercionReason, coerce, coerce_or_zero};
pub use data_type::{DataType, UnknownDataType};
pub use error::{AggregatedErrors, TreeError};
pub use extract::{TreeProvider, from_tree};
pub use merge::{merge_deep, merge_deep_into, merge_many_deep, merge_shallow, merge_value};
pub use resolve::{CoercionPolicy, ConfigEntry, LayerOrigin, TreeComposer, TreeLayer, resolve_entries};
pub use result_ext::TreeResultExt;
