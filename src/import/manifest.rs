//! JSON Manifest Import/Export
//!
//! The manifest bundles the product collection and the storage-location
//! list into one JSON object for backup and transfer. Unlike the CSV
//! merger, import is full replacement per collection, and a malformed
//! payload fails before any store mutation.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    import::errors::ImportError,
    store::{
        StorageBackend,
        locations::LocationStore,
        models::{Product, StorageLocation},
        products::ProductStore,
    },
};

/// Version string written on export. It is not validated on import.
pub const MANIFEST_VERSION: &str = "1.0";

/// The manifest payload.
///
/// All keys are optional on import; only the collections actually present
/// replace stored state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Full product collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,

    /// Full storage-location list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<StorageLocation>>,

    /// When the manifest was exported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<Timestamp>,

    /// Manifest format version, currently always `"1.0"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// What a manifest import replaced. `None` means the manifest did not
/// carry that collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifestSummary {
    /// Number of products now in the store, if the manifest carried a
    /// `products` array.
    pub products_replaced: Option<usize>,

    /// Number of locations now in the store, if the manifest carried a
    /// `locations` array.
    pub locations_replaced: Option<usize>,
}

/// Serialize the current store contents as a pretty-printed manifest.
///
/// # Errors
///
/// Returns [`ImportError::Store`] if either collection cannot be read, or
/// [`ImportError::ManifestJson`] if serialization fails.
pub fn export_manifest<P, L>(
    products: &ProductStore<P>,
    locations: &LocationStore<L>,
) -> Result<String, ImportError>
where
    P: StorageBackend,
    L: StorageBackend,
{
    let manifest = Manifest {
        products: Some(products.get_all()?),
        locations: Some(locations.get_all()?),
        export_date: Some(Timestamp::now()),
        version: Some(MANIFEST_VERSION.to_owned()),
    };

    Ok(serde_json::to_string_pretty(&manifest)?)
}

/// Default download name for an exported manifest, stamped with a date.
#[must_use]
pub fn export_file_name(date: jiff::civil::Date) -> String {
    format!("inventory-export-{date}.json")
}

/// Parse a manifest payload and replace stored collections with the arrays
/// it carries.
///
/// Parsing happens before any write, so a malformed payload leaves both
/// stores untouched. A collection key absent from the manifest leaves that
/// collection alone.
///
/// # Errors
///
/// Returns [`ImportError::ManifestJson`] for an unparseable payload, or
/// [`ImportError::Store`] if a replacement write fails.
pub fn import_manifest<P, L>(
    text: &str,
    products: &mut ProductStore<P>,
    locations: &mut LocationStore<L>,
) -> Result<ManifestSummary, ImportError>
where
    P: StorageBackend,
    L: StorageBackend,
{
    let manifest: Manifest = serde_json::from_str(text)?;

    let mut summary = ManifestSummary::default();

    if let Some(list) = manifest.products {
        summary.products_replaced = Some(list.len());
        products.replace_all(list)?;
    }

    if let Some(list) = manifest.locations {
        summary.locations_replaced = Some(list.len());
        locations.replace_all(list)?;
    }

    debug!(
        products = ?summary.products_replaced,
        locations = ?summary.locations_replaced,
        "manifest import complete"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::store::{
        LocationKind, LocationStore, MemoryBackend, Product, ProductStore, StorageLocation,
    };

    use super::{export_file_name, import_manifest};

    #[test]
    fn export_file_name_is_date_stamped() {
        let date = jiff::civil::date(2026, 8, 27);

        assert_eq!(export_file_name(date), "inventory-export-2026-08-27.json");
    }

    #[test]
    fn import_replaces_rather_than_merges() -> TestResult {
        let mut products = ProductStore::new(MemoryBackend::new());
        let mut locations = LocationStore::new(MemoryBackend::new());

        products.save(Product::new("OLD-1", "Retired Tool"))?;

        let incoming = Product::new("NEW-1", "Fresh Tool");
        let manifest = serde_json::json!({
            "products": [incoming],
            "version": "1.0",
        });

        let summary = import_manifest(&manifest.to_string(), &mut products, &mut locations)?;

        assert_eq!(summary.products_replaced, Some(1));
        assert_eq!(summary.locations_replaced, None);

        let skus: Vec<String> = products.get_all()?.into_iter().map(|p| p.sku).collect();
        assert_eq!(skus, ["NEW-1"]);
        Ok(())
    }

    #[test]
    fn import_without_a_collection_key_leaves_it_alone() -> TestResult {
        let mut products = ProductStore::new(MemoryBackend::new());
        let mut locations = LocationStore::new(MemoryBackend::new());

        locations.save(StorageLocation::new("Main Yard", LocationKind::Warehouse))?;

        let summary = import_manifest(r#"{"products": []}"#, &mut products, &mut locations)?;

        assert_eq!(summary.products_replaced, Some(0));
        assert_eq!(locations.get_all()?.len(), 1);
        Ok(())
    }

    #[test]
    fn malformed_manifest_mutates_nothing() -> TestResult {
        let mut products = ProductStore::new(MemoryBackend::new());
        let mut locations = LocationStore::new(MemoryBackend::new());

        products.save(Product::new("TC-1", "Hammer"))?;
        let before = products.get_all()?;

        let result = import_manifest("definitely not json", &mut products, &mut locations);

        assert!(result.is_err());
        assert_eq!(products.get_all()?, before);
        Ok(())
    }
}
