//! Attach document names to foreign read and parse errors.
//!
//! # Examples
//!
//! ```
//! use config_tree::{TreeError, TreeResult, TreeResultExt};
//!
//! fn load(name: &str, text: &str) -> TreeResult<serde_json::Value> {
//!     serde_json::from_str(text).parse_context(name)
//! }
//!
//! let err = load("app.json", "{").unwrap_err();
//! assert!(matches!(err.as_ref(), TreeError::Parse { name, .. } if name == "app.json"));
//! ```

use std::error::Error;
use std::sync::Arc;

use crate::{TreeError, TreeResult};

/// Maps any `Result<T, E>` into a [`TreeResult`] naming the document involved.
pub trait TreeResultExt<T> {
    /// Report the failure as [`TreeError::Source`] for the document `name`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying error wrapped with `name`.
    fn read_context(self, name: impl Into<String>) -> TreeResult<T>;

    /// Report the failure as [`TreeError::Parse`] for the document `name`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying error wrapped with `name`.
    fn parse_context(self, name: impl Into<String>) -> TreeResult<T>;
}

impl<T, E> TreeResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    fn read_context(self, name: impl Into<String>) -> TreeResult<T> {
        self.map_err(|err| Arc::new(TreeError::read(name, err)))
    }

    fn parse_context(self, name: impl Into<String>) -> TreeResult<T> {
        self.map_err(|err| Arc::new(TreeError::parse(name, err)))
    }
}
