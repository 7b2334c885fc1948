//! Blob storage backends
//!
//! Each collection persists as a single serialized JSON array under a fixed
//! key. Backends only move whole blobs; the stores layered on top own the
//! serialization discipline and the degrade-to-empty read policy.

use std::{
    collections::HashMap,
    fs, io,
    path::PathBuf,
};

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::store::errors::StoreError;

/// Whole-blob keyed storage.
///
/// `read` returns `None` when no blob has ever been written under the key.
pub trait StorageBackend {
    /// Read the blob stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` as the new blob under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the blob cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed storage: one `<key>.json` file per collection under a data
/// directory. The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            key: key.to_owned(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_error)?;
        fs::write(self.blob_path(key), value).map_err(io_error)
    }
}

/// In-process storage: a plain map with explicit save/load semantics. Used
/// in tests and anywhere durability is not needed.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    blobs: HashMap<String, String>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.blobs.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Read a collection blob, treating a missing or unparseable blob as the
/// empty collection. Corruption is logged, not surfaced; the data is still
/// on disk but invisible to the application from here on.
pub(crate) fn read_collection<B, T>(backend: &B, key: &str) -> Result<Vec<T>, StoreError>
where
    B: StorageBackend,
    T: DeserializeOwned,
{
    let Some(text) = backend.read(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&text) {
        Ok(records) => Ok(records),
        Err(error) => {
            warn!(key, %error, "stored blob failed to parse; treating collection as empty");
            Ok(Vec::new())
        }
    }
}

/// Serialize and write back a whole collection under its key.
pub(crate) fn write_collection<B, T>(
    backend: &mut B,
    key: &str,
    records: &[T],
) -> Result<(), StoreError>
where
    B: StorageBackend,
    T: Serialize,
{
    let text = serde_json::to_string(records).map_err(|source| StoreError::Serialize {
        key: key.to_owned(),
        source,
    })?;

    backend.write(key, &text)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::{MemoryBackend, StorageBackend, read_collection};

    #[test]
    fn missing_blob_reads_as_empty_collection() -> TestResult {
        let backend = MemoryBackend::new();

        let records: Vec<String> = read_collection(&backend, "products")?;

        assert!(records.is_empty());
        Ok(())
    }

    #[test]
    fn corrupt_blob_reads_as_empty_collection() -> TestResult {
        let mut backend = MemoryBackend::new();
        backend.write("products", "{not json")?;

        let records: Vec<String> = read_collection(&backend, "products")?;

        assert!(records.is_empty());
        Ok(())
    }

    #[test]
    fn corrupt_blob_is_left_in_place_until_next_write() -> TestResult {
        let mut backend = MemoryBackend::new();
        backend.write("products", "{not json")?;

        assert_eq!(backend.read("products")?.as_deref(), Some("{not json"));
        Ok(())
    }
}
