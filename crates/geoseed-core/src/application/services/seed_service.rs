//! Seed Service - writes the sample fixture files.
//!
//! This service implements the generator contract:
//! 1. Ensure the output directory exists (parents included)
//! 2. Write `sample.geojson` (the fixed compact document)
//! 3. Write `sample.tif` (zero bytes)
//!
//! The sequence is linear and idempotent: re-running against the same
//! directory overwrites both files with identical content. There is no
//! partial-write cleanup - if the second write fails, the first file stays
//! on disk and the error propagates.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{SAMPLE_GEOJSON, SAMPLE_TIF, SampleDocument},
    error::{GeoseedError, GeoseedResult},
};

/// What a seed run wrote, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    /// The resolved output directory.
    pub directory: PathBuf,
    /// Paths of the written files, in write order.
    pub written: Vec<PathBuf>,
}

/// Main seeding service.
pub struct SeedService {
    filesystem: Box<dyn Filesystem>,
}

impl SeedService {
    /// Create a new seed service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Seed the fixture files into `output_dir`.
    ///
    /// Creates the directory (and missing parents) first; creation is a
    /// no-op when it already exists.
    #[instrument(skip_all, fields(output_dir = %output_dir.display()))]
    pub fn seed(&self, output_dir: &Path) -> GeoseedResult<SeedReport> {
        info!("Seeding sample data");

        self.filesystem.create_dir_all(output_dir)?;

        let document = SampleDocument::origin_point();
        let content = document.to_compact_json().map_err(GeoseedError::Domain)?;

        let geojson_path = output_dir.join(SAMPLE_GEOJSON);
        self.filesystem
            .write_file(&geojson_path, content.as_bytes())?;

        let raster_path = output_dir.join(SAMPLE_TIF);
        self.filesystem.write_file(&raster_path, &[])?;

        info!(
            geojson = %geojson_path.display(),
            raster = %raster_path.display(),
            "Sample data written"
        );

        Ok(SeedReport {
            directory: output_dir.to_path_buf(),
            written: vec![geojson_path, raster_path],
        })
    }
}
