//! Infrastructure adapters for geoseed.
//!
//! This crate implements the ports defined in `geoseed_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod walker;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use walker::{StaticWalker, WalkdirWalker};
