//! Failures collected while resolving many configuration records at once.

use std::{error::Error, fmt, sync::Arc};

use super::TreeError;

/// Every failure from one resolution pass, in record order.
///
/// # Examples
///
/// ```
/// use config_tree::{CoercionPolicy, ConfigEntry, DataType, TreeError, resolve_entries};
///
/// let entries = [
///     ConfigEntry::new("db.port", "five", DataType::Int),
///     ConfigEntry::new("debug", "maybe", DataType::Bool),
/// ];
/// let err = resolve_entries(&entries, ".", CoercionPolicy::Strict).unwrap_err();
/// if let TreeError::Aggregate(failures) = err.as_ref() {
///     assert_eq!(failures.keys().collect::<Vec<_>>(), ["db.port", "debug"]);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<Arc<TreeError>>);

impl AggregatedErrors {
    /// Collect `failures` in the order they were produced.
    #[must_use]
    pub const fn new(failures: Vec<Arc<TreeError>>) -> Self {
        Self(failures)
    }

    /// Iterate over the collected failures.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &TreeError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Dotted keys of the records that failed to coerce.
    #[must_use = "iterators should be consumed to inspect keys"]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(TreeError::key)
    }

    /// Number of failures.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no failure was collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut failures = self.iter();
        if let Some(first) = failures.next() {
            write!(f, "  - {first}")?;
        }
        for failure in failures {
            write!(f, "\n  - {failure}")?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}
