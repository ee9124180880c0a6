//! Local directory source backed by `cap-std`.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};

use super::{Source, SourceOptions};
use crate::{TreeResult, TreeResultExt};

/// Serves documents from a directory opened through `cap-std`.
///
/// Documents resolve to `{dir}/{name}` relative to the root directory, and
/// the capability handle refuses paths that escape the root.
#[derive(Debug)]
pub struct DirSource {
    root: Dir,
    options: SourceOptions,
}

impl DirSource {
    /// Open `root` and serve documents below it using `options`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TreeError::Source`] when `root` cannot be opened.
    pub fn open(root: &Utf8Path, options: SourceOptions) -> TreeResult<Self> {
        let dir = Dir::open_ambient_dir(root, ambient_authority())
            .read_context(root.as_str())?;
        Ok(Self::from_dir(dir, options))
    }

    /// Wrap an already opened directory handle.
    #[must_use]
    pub const fn from_dir(root: Dir, options: SourceOptions) -> Self {
        Self { root, options }
    }

    /// Options used to locate documents.
    #[must_use]
    pub const fn options(&self) -> &SourceOptions {
        &self.options
    }
}

impl Source for DirSource {
    fn read_file(&self, name: &str) -> TreeResult<Vec<u8>> {
        let key = self.options.object_key(name);
        tracing::debug!(key = %key, "reading configuration document");
        self.root.read(&key).read_context(key)
    }
}
