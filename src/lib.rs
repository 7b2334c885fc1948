//! Toolcrib
//!
//! Toolcrib is an embedded inventory tracker for small contracting and
//! field-service teams: a flat product store over pluggable blob storage,
//! a CSV bulk import-merger keyed by SKU, a JSON manifest import/export
//! path, storage-location and team-roster lists, and printable label
//! rendering.

pub mod import;
pub mod labels;
pub mod store;
