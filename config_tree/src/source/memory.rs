//! In-memory source for embedded documents and tests.

use std::collections::BTreeMap;
use std::io;

use super::{Source, SourceOptions};
use crate::{TreeResult, TreeResultExt};

/// Serves documents from an in-memory table keyed by full object key.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    documents: BTreeMap<String, Vec<u8>>,
    options: SourceOptions,
}

impl MemorySource {
    /// Create an empty source resolving names through `options`.
    #[must_use]
    pub const fn new(options: SourceOptions) -> Self {
        Self {
            documents: BTreeMap::new(),
            options,
        }
    }

    /// Store `contents` under the document `name`.
    #[must_use]
    pub fn with_document(mut self, name: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(name, contents);
        self
    }

    /// Store `contents` under the document `name`, replacing any previous entry.
    pub fn insert(&mut self, name: &str, contents: impl Into<Vec<u8>>) {
        self.documents
            .insert(self.options.object_key(name), contents.into());
    }
}

impl Source for MemorySource {
    fn read_file(&self, name: &str) -> TreeResult<Vec<u8>> {
        let key = self.options.object_key(name);
        self.documents
            .get(&key)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such document"))
            .read_context(key)
    }
}
