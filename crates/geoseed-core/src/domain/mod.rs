//! Domain layer - pure business logic.
//!
//! Everything here is synchronous and free of I/O. The two concepts geoseed
//! deals in live side by side:
//!
//! - **Sample artifacts** ([`sample`]): the fixed fixture files the seeder
//!   writes - a minimal GeoJSON document and a raster placeholder.
//! - **Inventory entries** ([`inventory`]): the classification and metadata
//!   model for geodata files found in a workspace.
//!
//! Design rules:
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Reading and writing files is the adapters' job
//! - **No CLI knowledge**: Presentation lives in `geoseed-cli`

pub mod error;
pub mod inventory;
pub mod sample;

pub use error::{DomainError, ErrorCategory};
pub use inventory::{EntryStatus, GeoFileEntry, GeoFileKind, describe_geojson};
pub use sample::{SAMPLE_GEOJSON, SAMPLE_TIF, SampleDocument};
