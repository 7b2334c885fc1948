//! Storage Location Store

use tracing::debug;
use uuid::Uuid;

use crate::store::{
    backend::{StorageBackend, read_collection, write_collection},
    errors::StoreError,
    models::StorageLocation,
};

/// Storage key for the location list.
pub const LOCATIONS_KEY: &str = "locations";

/// Repository over the storage-location list.
#[derive(Debug, Clone)]
pub struct LocationStore<B> {
    backend: B,
}

impl<B: StorageBackend> LocationStore<B> {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the full location list. Missing or unparseable blobs read as
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backend cannot be read.
    pub fn get_all(&self) -> Result<Vec<StorageLocation>, StoreError> {
        read_collection(&self.backend, LOCATIONS_KEY)
    }

    /// Insert or update a location, keyed by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Serialize`] if the
    /// write-back fails.
    pub fn save(&mut self, location: StorageLocation) -> Result<(), StoreError> {
        let mut locations = self.get_all()?;

        if let Some(existing) = locations.iter_mut().find(|l| l.id == location.id) {
            *existing = location;
        } else {
            locations.push(location);
        }

        self.replace_all(locations)
    }

    /// Delete the location with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has that id, and
    /// [`StoreError::Io`] or [`StoreError::Serialize`] if the write-back
    /// fails.
    pub fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let mut locations = self.get_all()?;
        let before = locations.len();

        locations.retain(|l| l.id != id);

        if locations.len() == before {
            return Err(StoreError::NotFound(id));
        }

        self.replace_all(locations)
    }

    /// Replace the entire list in one write (manifest import path).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Serialize`] if the
    /// write-back fails.
    pub fn replace_all(&mut self, locations: Vec<StorageLocation>) -> Result<(), StoreError> {
        debug!(count = locations.len(), "writing location list");
        write_collection(&mut self.backend, LOCATIONS_KEY, &locations)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::store::{LocationKind, MemoryBackend, StorageLocation};

    use super::LocationStore;

    #[test]
    fn save_upserts_by_id() -> TestResult {
        let mut store = LocationStore::new(MemoryBackend::new());

        let mut van = StorageLocation::new("Van 2", LocationKind::Vehicle);
        store.save(van.clone())?;

        van.name = "Van 2 (North)".to_owned();
        store.save(van.clone())?;

        let all = store.get_all()?;
        assert_eq!(all, vec![van]);
        Ok(())
    }

    #[test]
    fn delete_removes_the_location() -> TestResult {
        let mut store = LocationStore::new(MemoryBackend::new());

        let yard = StorageLocation::new("Main Yard", LocationKind::Warehouse);
        store.save(yard.clone())?;
        store.delete(yard.id)?;

        assert!(store.get_all()?.is_empty());
        Ok(())
    }
}
