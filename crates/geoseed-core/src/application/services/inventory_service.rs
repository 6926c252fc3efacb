//! Inventory Service - scans a workspace for geodata files.
//!
//! Workflow:
//! 1. Walk the root recursively (via the `DirectoryWalker` port)
//! 2. Keep files whose extension classifies as geodata
//! 3. Stat each file; probe `.geojson` content for a summary
//!
//! Probe failures (unreadable file, malformed JSON) are recorded on the
//! entry and never abort the scan. Files that vanish between the walk and
//! the stat are skipped with a warning.

use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{DirectoryWalker, Filesystem},
    },
    domain::{EntryStatus, GeoFileEntry, GeoFileKind, describe_geojson},
    error::GeoseedResult,
};

/// Main inventory service.
pub struct InventoryService {
    filesystem: Box<dyn Filesystem>,
    walker: Box<dyn DirectoryWalker>,
}

impl InventoryService {
    /// Create a new inventory service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, walker: Box<dyn DirectoryWalker>) -> Self {
        Self { filesystem, walker }
    }

    /// Scan `root` and return one entry per geodata file, sorted by path.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn scan(&self, root: &Path) -> GeoseedResult<Vec<GeoFileEntry>> {
        if !self.filesystem.exists(root) {
            return Err(ApplicationError::ScanRootNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        let mut entries = Vec::new();
        for path in self.walker.walk(root)? {
            let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            let Some(kind) = GeoFileKind::from_extension(extension) else {
                continue;
            };

            let stat = match self.filesystem.metadata(&path) {
                Ok(stat) => stat,
                Err(e) => {
                    // Raced with a delete; not worth failing the whole scan.
                    warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            let (detail, status) = match kind {
                GeoFileKind::GeoJson => self.probe_geojson(&path),
                // No GDAL, so rasters and shapefiles are stat-only.
                GeoFileKind::GeoTiff | GeoFileKind::Shapefile => (None, EntryStatus::Ok),
            };

            entries.push(GeoFileEntry {
                extension: format!(".{}", extension.to_ascii_lowercase()),
                path,
                size: stat.size,
                modified: stat.modified,
                kind,
                detail,
                status,
            });
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(count = entries.len(), "Scan finished");
        Ok(entries)
    }

    /// Read and summarize a GeoJSON file; failures land on the entry status.
    fn probe_geojson(&self, path: &Path) -> (Option<String>, EntryStatus) {
        let content = match self.filesystem.read_file(path) {
            Ok(content) => content,
            Err(e) => return (None, EntryStatus::Error(e.to_string())),
        };
        match describe_geojson(&content) {
            Ok(summary) => (Some(summary), EntryStatus::Ok),
            Err(e) => (None, EntryStatus::Error(e.to_string())),
        }
    }
}
