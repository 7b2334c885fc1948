//! Bulk Import and Export
//!
//! Two paths into the product store with deliberately different semantics:
//! the CSV merger ([`import_products_csv`]) merges rows into existing
//! records by SKU and degrades malformed input to defaults in its lenient
//! mode, while the JSON manifest path ([`import_manifest`]) validates the
//! whole payload up front and then fully replaces each collection it
//! carries.

pub mod csv;
pub mod errors;
pub mod manifest;

pub use csv::{CSV_TEMPLATE, ImportSummary, ParseMode, import_products_csv};
pub use errors::ImportError;
pub use manifest::{
    MANIFEST_VERSION, Manifest, ManifestSummary, export_file_name, export_manifest,
    import_manifest,
};
