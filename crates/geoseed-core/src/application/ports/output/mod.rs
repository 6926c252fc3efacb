//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `geoseed-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::GeoseedResult;

/// Filesystem-level metadata for a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub modified: DateTime<Utc>,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `geoseed_adapters::filesystem::LocalFilesystem` (production)
/// - `geoseed_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `write_file` takes bytes, not text: the raster placeholder is a byte
///   sequence (an empty one), and the GeoJSON fixture is written as UTF-8
///   bytes by the caller.
/// - There is no truncate/append distinction: writes always replace the
///   whole file, which is what makes seeding idempotent.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GeoseedResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &[u8]) -> GeoseedResult<()>;

    /// Read a file's full content.
    fn read_file(&self, path: &Path) -> GeoseedResult<Vec<u8>>;

    /// Size and modification time of a file.
    fn metadata(&self, path: &Path) -> GeoseedResult<FileStat>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for recursive directory enumeration.
///
/// Implemented by:
/// - `geoseed_adapters::walker::WalkdirWalker` (production)
/// - `geoseed_adapters::walker::StaticWalker` (testing)
///
/// The walker returns *all* regular files under the root; filtering by
/// extension is domain logic and stays in the inventory service.
pub trait DirectoryWalker: Send + Sync {
    /// List all regular files under `root`, recursively.
    fn walk(&self, root: &Path) -> GeoseedResult<Vec<PathBuf>>;
}
