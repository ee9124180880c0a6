//! Constructors and accessors for `TreeError`.

use std::error::Error;
use std::sync::Arc;

use super::{AggregatedErrors, TreeError};
use crate::CoercionError;

impl TreeError {
    /// Combine the failures of one resolution pass.
    ///
    /// Returns `None` for no failures and the failure itself when there is
    /// exactly one; several failures become [`Self::Aggregate`].
    #[must_use]
    pub fn from_failures(mut failures: Vec<Arc<Self>>) -> Option<Arc<Self>> {
        if failures.len() > 1 {
            return Some(Arc::new(Self::Aggregate(Box::new(AggregatedErrors::new(
                failures,
            )))));
        }
        failures.pop()
    }

    /// Dotted key the failure refers to, when it concerns a single value.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Coercion { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }

    /// Construct a coercion error for the dotted `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_tree::{DataType, TreeError, coerce};
    /// let source = coerce("abc", DataType::Int).unwrap_err();
    /// let e = TreeError::coercion("server.port", source);
    /// assert!(matches!(e, TreeError::Coercion { .. }));
    /// ```
    #[must_use]
    pub fn coercion(key: impl Into<String>, source: CoercionError) -> Self {
        Self::Coercion {
            key: key.into(),
            source,
        }
    }

    /// Construct a source read error for the document `name`.
    #[must_use]
    pub fn read(name: impl Into<String>, err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Source {
            name: name.into(),
            source: err.into(),
        }
    }

    /// Construct a parse error for the document `name`.
    #[must_use]
    pub fn parse(name: impl Into<String>, err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Parse {
            name: name.into(),
            source: err.into(),
        }
    }
}
