//! Fixed-list walker for testing.

use std::path::{Path, PathBuf};

use geoseed_core::{application::ports::DirectoryWalker, error::GeoseedResult};

/// Test walker that serves a fixed list of paths.
///
/// `walk` returns the subset of the configured paths that live under the
/// requested root, which is enough to drive the inventory service against a
/// [`crate::MemoryFilesystem`].
#[derive(Debug, Clone, Default)]
pub struct StaticWalker {
    paths: Vec<PathBuf>,
}

impl StaticWalker {
    /// Create a walker over the given paths.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl DirectoryWalker for StaticWalker {
    fn walk(&self, root: &Path) -> GeoseedResult<Vec<PathBuf>> {
        Ok(self
            .paths
            .iter()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }
}
