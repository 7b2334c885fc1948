//! Product Store
//!
//! Flat product collection persisted as one JSON array under a fixed key.
//! Every mutation rewrites the whole blob; collections are expected to stay
//! small (single-location inventories).

use tracing::debug;
use uuid::Uuid;

use crate::store::{
    backend::{StorageBackend, read_collection, write_collection},
    errors::StoreError,
    models::Product,
};

/// Storage key for the product collection.
pub const PRODUCTS_KEY: &str = "products";

/// Repository over the product collection.
#[derive(Debug, Clone)]
pub struct ProductStore<B> {
    backend: B,
}

impl<B: StorageBackend> ProductStore<B> {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the full product collection.
    ///
    /// A missing blob, or one that fails to parse, reads as the empty
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backend cannot be read.
    pub fn get_all(&self) -> Result<Vec<Product>, StoreError> {
        read_collection(&self.backend, PRODUCTS_KEY)
    }

    /// Find the first product whose `sku` matches exactly.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backend cannot be read.
    pub fn get_by_sku(&self, sku: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.get_all()?.into_iter().find(|p| p.sku == sku))
    }

    /// Insert or update a product, keyed by `sku`.
    ///
    /// An existing record with the same `sku` is replaced in place,
    /// preserving its position in the collection; otherwise the product is
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Serialize`] if the
    /// write-back fails.
    pub fn save(&mut self, mut product: Product) -> Result<(), StoreError> {
        product.touch();

        let mut products = self.get_all()?;

        if let Some(existing) = products.iter_mut().find(|p| p.sku == product.sku) {
            debug!(sku = %product.sku, "replacing existing product");
            *existing = product;
        } else {
            debug!(sku = %product.sku, "appending new product");
            products.push(product);
        }

        self.replace_all(products)
    }

    /// Delete the product with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has that id, and
    /// [`StoreError::Io`] or [`StoreError::Serialize`] if the write-back
    /// fails.
    pub fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let mut products = self.get_all()?;
        let before = products.len();

        products.retain(|p| p.id != id);

        if products.len() == before {
            return Err(StoreError::NotFound(id));
        }

        self.replace_all(products)
    }

    /// Replace the entire collection in one write. Used by the manifest
    /// import path and the bulk merger.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Serialize`] if the
    /// write-back fails.
    pub fn replace_all(&mut self, products: Vec<Product>) -> Result<(), StoreError> {
        debug!(count = products.len(), "writing product collection");
        write_collection(&mut self.backend, PRODUCTS_KEY, &products)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::store::{MemoryBackend, Product, StoreError};

    use super::ProductStore;

    fn store() -> ProductStore<MemoryBackend> {
        ProductStore::new(MemoryBackend::new())
    }

    #[test]
    fn save_then_get_all_round_trips() -> anyhow::Result<()> {
        let mut store = store();

        let mut product = Product::new("TC-1", "Hammer");
        product.quantity = 3;
        store.save(product.clone())?;

        let all = store.get_all()?;
        assert_eq!(all.len(), 1);

        let stored = store.get_by_sku("TC-1")?.context("missing TC-1")?;
        assert_eq!(stored.name, "Hammer");
        assert_eq!(stored.quantity, 3);
        Ok(())
    }

    #[test]
    fn saving_same_sku_twice_keeps_one_record_with_latest_fields() -> anyhow::Result<()> {
        let mut store = store();

        store.save(Product::new("TC-1", "Hammer"))?;

        let mut replacement = Product::new("TC-1", "Sledgehammer");
        replacement.quantity = 2;
        store.save(replacement)?;

        let all = store.get_all()?;
        assert_eq!(all.len(), 1);

        let stored = all.first().context("collection is empty")?;
        assert_eq!(stored.name, "Sledgehammer");
        assert_eq!(stored.quantity, 2);
        Ok(())
    }

    #[test]
    fn save_preserves_position_of_replaced_record() -> TestResult {
        let mut store = store();

        store.save(Product::new("TC-1", "Hammer"))?;
        store.save(Product::new("TC-2", "Drill"))?;
        store.save(Product::new("TC-3", "Saw"))?;

        store.save(Product::new("TC-2", "Impact Driver"))?;

        let skus: Vec<String> = store.get_all()?.into_iter().map(|p| p.sku).collect();
        assert_eq!(skus, ["TC-1", "TC-2", "TC-3"]);
        Ok(())
    }

    #[test]
    fn delete_removes_only_the_matching_record() -> anyhow::Result<()> {
        let mut store = store();

        store.save(Product::new("TC-1", "Hammer"))?;
        store.save(Product::new("TC-2", "Drill"))?;

        let drill = store.get_by_sku("TC-2")?.context("missing TC-2")?;
        let keeper = store.get_by_sku("TC-1")?.context("missing TC-1")?;

        store.delete(drill.id)?;

        let all = store.get_all()?;
        assert_eq!(all, vec![keeper]);
        Ok(())
    }

    #[test]
    fn delete_of_unknown_id_is_not_found() -> TestResult {
        let mut store = store();
        store.save(Product::new("TC-1", "Hammer"))?;

        let missing = Uuid::new_v4();
        let result = store.delete(missing);

        assert!(matches!(result, Err(StoreError::NotFound(id)) if id == missing));
        assert_eq!(store.get_all()?.len(), 1);
        Ok(())
    }

    #[test]
    fn corrupt_blob_degrades_to_empty_collection() -> TestResult {
        use crate::store::backend::StorageBackend;

        let mut backend = MemoryBackend::new();
        backend.write(super::PRODUCTS_KEY, "[{\"truncated\": ")?;

        let store = ProductStore::new(backend);
        assert!(store.get_all()?.is_empty());
        Ok(())
    }
}
