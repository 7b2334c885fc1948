//! Store errors

use std::io;

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the blob backends and the collection stores built on them.
///
/// A blob that exists but fails to deserialize is deliberately *not* an
/// error: the affected collection reads as empty (see
/// [`ProductStore::get_all`](crate::store::ProductStore::get_all)).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed to read or write the blob for a collection key.
    #[error("storage i/o failure for key {key:?}: {source}")]
    Io {
        /// The collection key being read or written.
        key: String,

        /// The underlying i/o error.
        source: io::Error,
    },

    /// A collection could not be serialized for write-back.
    #[error("failed to serialize collection {key:?}: {source}")]
    Serialize {
        /// The collection key being written.
        key: String,

        /// The underlying serializer error.
        source: serde_json::Error,
    },

    /// No record with the requested id exists.
    #[error("no record with id {0}")]
    NotFound(Uuid),
}
