//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "seed a fixture directory" or "inventory a
//! workspace".

pub mod inventory_service;
pub mod seed_service;

pub use inventory_service::InventoryService;
pub use seed_service::{SeedReport, SeedService};
