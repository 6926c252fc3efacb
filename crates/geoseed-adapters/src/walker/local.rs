//! Recursive directory traversal via the `walkdir` crate.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use geoseed_core::{
    application::{ApplicationError, ports::DirectoryWalker},
    error::GeoseedResult,
};

/// Production walker backed by `walkdir`.
#[derive(Debug, Clone, Copy)]
pub struct WalkdirWalker {
    follow_links: bool,
}

impl WalkdirWalker {
    /// Create a walker; `follow_links` controls symlink traversal.
    pub fn new(follow_links: bool) -> Self {
        Self { follow_links }
    }
}

impl Default for WalkdirWalker {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DirectoryWalker for WalkdirWalker {
    fn walk(&self, root: &Path) -> GeoseedResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(self.follow_links) {
            let entry = entry.map_err(|e| ApplicationError::WalkFailed {
                path: root.to_path_buf(),
                reason: e.to_string(),
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        debug!(root = %root.display(), count = files.len(), "Walk finished");
        Ok(files)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
