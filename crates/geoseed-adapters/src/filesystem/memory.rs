//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use chrono::{DateTime, Utc};

use geoseed_core::application::ApplicationError;
use geoseed_core::application::ports::{FileStat, Filesystem};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, StoredFile>,
    directories: HashSet<PathBuf>,
}

#[derive(Debug, Clone)]
struct StoredFile {
    content: Vec<u8>,
    modified: DateTime<Utc>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content without going through the port (testing helper).
    pub fn content_of(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).map(|f| f.content.clone())
    }

    /// List all file paths.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Insert a file directly, without going through the port (testing
    /// helper).  Also useful to place a regular file where a directory is
    /// about to be created.
    pub fn plant_file(&self, path: &Path, content: &[u8]) {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(
            path.to_path_buf(),
            StoredFile {
                content: content.to_vec(),
                modified: Utc::now(),
            },
        );
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }

    fn lock_error() -> geoseed_core::error::GeoseedError {
        geoseed_core::error::GeoseedError::Internal {
            message: "memory filesystem lock poisoned".into(),
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> geoseed_core::error::GeoseedResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;

        // A regular file in the way fails exactly like the real filesystem.
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: format!("'{}' exists and is not a directory", current.display()),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> geoseed_core::error::GeoseedResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(
            path.to_path_buf(),
            StoredFile {
                content: content.to_vec(),
                modified: Utc::now(),
            },
        );
        Ok(())
    }

    fn read_file(&self, path: &Path) -> geoseed_core::error::GeoseedResult<Vec<u8>> {
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;
        inner
            .files
            .get(path)
            .map(|f| f.content.clone())
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "No such file".into(),
                }
                .into()
            })
    }

    fn metadata(&self, path: &Path) -> geoseed_core::error::GeoseedResult<FileStat> {
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;
        inner
            .files
            .get(path)
            .map(|f| FileStat {
                size: f.content.len() as u64,
                modified: f.modified,
            })
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "No such file".into(),
                }
                .into()
            })
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}
