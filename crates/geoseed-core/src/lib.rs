//! Geoseed Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the geoseed
//! geodata fixture tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          geoseed-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (SeedService, InventoryService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: Filesystem, Walker)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    geoseed-adapters (Infrastructure)    │
//! │  (LocalFilesystem, WalkdirWalker, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (SampleDocument, GeoFileEntry, ...)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use geoseed_core::application::SeedService;
//!
//! // Seed the two fixture files into a target directory
//! // (with an injected filesystem adapter).
//! let service = SeedService::new(filesystem);
//! let report = service.seed("./out".as_ref()).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InventoryService, SeedReport, SeedService,
        ports::{DirectoryWalker, FileStat, Filesystem},
    };
    pub use crate::domain::{
        EntryStatus, GeoFileEntry, GeoFileKind, SAMPLE_GEOJSON, SAMPLE_TIF, SampleDocument,
    };
    pub use crate::error::{GeoseedError, GeoseedResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
