//! Resolution of flat configuration records into merged trees.
//!
//! Records carry a dotted key, a raw string, and a [`crate::DataType`].
//! [`resolve_entries`] turns a batch of records into a single mapping, and
//! [`TreeComposer`] folds whole mappings from several origins in precedence
//! order.
//!
//! # Example
//!
//! ```rust
//! use config_tree::{CoercionPolicy, ConfigEntry, DataType, TreeComposer, resolve_entries};
//! use serde_json::{Value, json};
//!
//! let entries = vec![
//!     ConfigEntry::new("server.host", "0.0.0.0", DataType::String),
//!     ConfigEntry::new("server.port", "8080", DataType::Int),
//! ];
//! let resolved = resolve_entries(&entries, ".", CoercionPolicy::Strict)?;
//!
//! let mut composer = TreeComposer::new();
//! composer.push_defaults(json!({"server": {"port": 80, "tls": false}}).as_object().cloned().unwrap_or_default());
//! composer.push_entries(resolved);
//! assert_eq!(
//!     Value::Object(composer.compose()),
//!     json!({"server": {"host": "0.0.0.0", "port": 8080, "tls": false}})
//! );
//! # Ok::<_, std::sync::Arc<config_tree::TreeError>>(())
//! ```

mod composer;
mod entry;

pub use composer::{LayerOrigin, TreeComposer, TreeLayer};
pub use entry::{CoercionPolicy, ConfigEntry, resolve_entries};
