//! Primary error enum for tree construction and loading flows.

use thiserror::Error;

use super::aggregate::AggregatedErrors;
use crate::CoercionError;

/// Errors that can occur while building or loading configuration trees.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TreeError {
    /// A key path had no segments.
    #[error("key path must contain at least one segment")]
    EmptyPath,

    /// A raw value could not be coerced to its declared type.
    #[error("Invalid value for '{key}': {source}")]
    Coercion {
        /// Dotted key whose value failed to coerce.
        key: String,
        /// Underlying coercion failure.
        #[source]
        source: CoercionError,
    },

    /// A source could not produce the requested document.
    #[error("Failed to read '{name}' from source: {source}")]
    Source {
        /// Document name requested from the source.
        name: String,
        /// Underlying I/O or transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A document was read but could not be parsed into a mapping.
    #[error("Failed to parse '{name}': {source}")]
    Parse {
        /// Document name that failed to parse.
        name: String,
        /// Underlying format error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The document extension is unknown or its format feature is disabled.
    #[error("Unsupported configuration format for '{name}'")]
    UnsupportedFormat {
        /// Document name whose format was not recognised.
        name: String,
    },

    /// A merged tree did not match the requested target type.
    #[error("Failed to deserialise configuration tree: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Multiple errors occurred while resolving configuration.
    #[error("multiple configuration errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
