//! Error types produced while building, loading, and extracting trees.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::TreeError;
