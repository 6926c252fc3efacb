//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};

use geoseed_core::{
    application::ports::{FileStat, Filesystem},
    error::GeoseedResult,
};

/// Production filesystem implementation using `std::fs`.
///
/// `std::fs::write` opens, writes, and closes the handle on every path
/// through the call, so writes never leak open descriptors.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GeoseedResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> GeoseedResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> GeoseedResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn metadata(&self, path: &Path) -> GeoseedResult<FileStat> {
        let meta = std::fs::metadata(path).map_err(|e| map_io_error(path, e, "stat file"))?;
        let modified = meta
            .modified()
            .map(DateTime::<Utc>::from)
            .map_err(|e| map_io_error(path, e, "read modification time"))?;
        Ok(FileStat {
            size: meta.len(),
            modified,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> geoseed_core::error::GeoseedError {
    use geoseed_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("a.bin");

        fs.write_file(&path, b"\x00\x01geo").unwrap();
        assert_eq!(fs.read_file(&path).unwrap(), b"\x00\x01geo");
        assert_eq!(fs.metadata(&path).unwrap().size, 5);
    }

    #[test]
    fn create_dir_all_is_a_noop_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));
    }

    #[test]
    fn create_dir_over_regular_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        assert!(fs.create_dir_all(&blocker).is_err());
    }

    #[test]
    fn metadata_on_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.metadata(&dir.path().join("nope.tif")).is_err());
    }
}
