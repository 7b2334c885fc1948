//! Import errors

use thiserror::Error;

use crate::store::StoreError;

/// Errors raised by the bulk CSV merger and the manifest import/export
/// paths.
///
/// In [`ParseMode::Lenient`](crate::import::ParseMode::Lenient) the row
/// variants are never produced; malformed cells degrade to defaults
/// instead.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The manifest payload is not valid JSON, or not a manifest object.
    #[error("invalid manifest JSON: {0}")]
    ManifestJson(#[from] serde_json::Error),

    /// The CSV payload has no header row (strict mode only).
    #[error("import payload is empty")]
    EmptyPayload,

    /// A data row's value count does not match the header (strict mode
    /// only).
    #[error("row {line} has {found} values but the header names {expected} columns")]
    RowArity {
        /// 1-based line number of the offending row.
        line: usize,

        /// Number of header columns.
        expected: usize,

        /// Number of values found on the row.
        found: usize,
    },

    /// A numeric cell could not be parsed (strict mode only).
    #[error("row {line}: cannot parse {column} value {value:?}")]
    Coercion {
        /// 1-based line number of the offending row.
        line: usize,

        /// Header name of the offending column.
        column: &'static str,

        /// The raw cell contents.
        value: String,
    },

    /// A data row has no usable `sku` value (strict mode only).
    #[error("row {line} has no sku value")]
    MissingSku {
        /// 1-based line number of the offending row.
        line: usize,
    },
}
