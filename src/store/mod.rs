//! Inventory Stores
//!
//! Flat collections (products, storage locations, team roster) persisted as
//! one JSON blob each under a fixed key, over a pluggable
//! [`StorageBackend`]. Reads of missing or corrupt blobs degrade to the
//! empty collection; every mutation rewrites the whole blob.

pub mod backend;
pub mod errors;
pub mod locations;
pub mod models;
pub mod products;
pub mod team;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use errors::StoreError;
pub use locations::LocationStore;
pub use models::{DEFAULT_CATEGORY, LocationKind, Product, StorageLocation, TeamMember};
pub use products::ProductStore;
pub use team::TeamStore;
