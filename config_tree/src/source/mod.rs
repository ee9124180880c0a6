//! Named configuration documents and the sources that serve them.
//!
//! A [`Source`] returns the raw bytes of a document by name, the same
//! contract an object-store reader fulfils. [`DirSource`] serves documents
//! from a capability-scoped local directory and [`MemorySource`] from an
//! in-memory table. [`load_mapping`] reads a document and parses it into a
//! [`crate::Mapping`] according to its extension.

mod dir;
mod format;
mod memory;

pub use dir::DirSource;
pub use format::{load_mapping, parse_mapping};
pub use memory::MemorySource;

use crate::TreeResult;

/// A provider of named configuration documents.
pub trait Source {
    /// Read the document called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TreeError::Source`] when the document cannot be read.
    fn read_file(&self, name: &str) -> TreeResult<Vec<u8>>;
}

impl<S: Source + ?Sized> Source for &S {
    fn read_file(&self, name: &str) -> TreeResult<Vec<u8>> {
        (**self).read_file(name)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn read_file(&self, name: &str) -> TreeResult<Vec<u8>> {
        (**self).read_file(name)
    }
}

/// Location options shared by sources.
///
/// `dir` is the prefix under which documents live. When `project_name` is
/// set, everything in `dir` before the first `"{project_name}/"` is dropped,
/// so `deploy/v2/shop/config` with project `shop` becomes `shop/config`.
/// A project name that does not occur in `dir` leaves it unchanged.
///
/// # Examples
///
/// ```rust
/// use config_tree::source::SourceOptions;
///
/// let options = SourceOptions::new()
///     .with_dir("deploy/v2/shop/config")
///     .with_project_name("shop");
/// assert_eq!(options.dir(), "shop/config");
/// assert_eq!(options.object_key("app.json"), "shop/config/app.json");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SourceOptions {
    dir: String,
    project_name: Option<String>,
}

impl SourceOptions {
    /// Create options rooted at the source's top level.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dir: String::new(),
            project_name: None,
        }
    }

    /// Set the directory prefix.
    #[must_use]
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Set the project name used to trim the directory prefix.
    #[must_use]
    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = Some(project_name.into());
        self
    }

    /// Directory prefix after project trimming.
    #[must_use]
    pub fn dir(&self) -> &str {
        let Some(project) = self.project_name.as_deref().filter(|p| !p.is_empty()) else {
            return &self.dir;
        };
        let needle = format!("{project}/");
        self.dir
            .find(&needle)
            .and_then(|start| self.dir.get(start..))
            .unwrap_or(&self.dir)
    }

    /// Full key of the document `name` under the directory prefix.
    #[must_use]
    pub fn object_key(&self, name: &str) -> String {
        let dir = self.dir().trim_end_matches('/');
        if dir.is_empty() {
            name.to_owned()
        } else {
            format!("{dir}/{name}")
        }
    }
}

#[cfg(test)]
mod tests;
