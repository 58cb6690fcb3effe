//! File-backed collection store.
//!
//! Each collection lives in one pretty-printed JSON array file named
//! `<collection>.json` under the configured data directory. Collections are
//! read and replaced as whole units; there is no locking, so concurrent
//! writers to the same collection race and the last write wins. Writes go
//! through a temp file and an atomic rename, so a concurrent reader never
//! observes a half-written collection.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use shopfront_core::CollectionStore;
use shopfront_domain::constants::COLLECTION_FILE_EXTENSION;
use shopfront_domain::{Result, ShopfrontError};
use tempfile::NamedTempFile;
use tokio::task;
use tracing::{debug, warn};

use crate::errors::{map_join_error, InfraError};

/// JSON file implementation of `CollectionStore`.
///
/// Constructed with an explicit storage root so tests can isolate themselves
/// with a temporary directory.
pub struct JsonCollectionStore {
    data_dir: PathBuf,
}

impl JsonCollectionStore {
    /// Create a store rooted at `data_dir`. The directory is created lazily
    /// on first access.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    /// The storage root this store reads and writes under.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn collection_path(&self, collection: &str) -> Result<PathBuf> {
        // Collection names become file names; reject anything that could
        // escape the data directory.
        let valid = !collection.is_empty()
            && collection
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ShopfrontError::InvalidInput(format!(
                "invalid collection name: {collection:?}"
            )));
        }
        Ok(self.data_dir.join(format!("{collection}.{COLLECTION_FILE_EXTENSION}")))
    }
}

fn read_collection(path: &Path, collection: &str) -> Result<Vec<Value>> {
    if !path.exists() {
        // First access to a never-used collection is not an error: create
        // the empty collection file so the read is idempotent.
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(InfraError::from)?;
        }
        fs::write(path, b"[]").map_err(InfraError::from)?;
        debug!(collection, path = %path.display(), "Created empty collection");
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path).map_err(InfraError::from)?;
    match serde_json::from_str::<Vec<Value>>(&contents) {
        Ok(records) => Ok(records),
        Err(err) => {
            // Callers must tolerate "empty" as a degraded result rather than
            // assume it means "truly no data".
            warn!(
                collection,
                path = %path.display(),
                error = %err,
                "Collection is not a well-formed record array, degrading to empty"
            );
            Ok(Vec::new())
        }
    }
}

fn write_collection(path: &Path, records: &[Value]) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(InfraError::from)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(InfraError::from)?;
    serde_json::to_writer_pretty(&mut tmp, records).map_err(InfraError::from)?;
    tmp.write_all(b"\n").map_err(InfraError::from)?;
    tmp.flush().map_err(InfraError::from)?;
    tmp.persist(path)
        .map_err(|err| ShopfrontError::Storage(format!("atomic rename failed: {err}")))?;
    Ok(())
}

#[async_trait]
impl CollectionStore for JsonCollectionStore {
    async fn read(&self, collection: &str) -> Result<Vec<Value>> {
        let path = self.collection_path(collection)?;
        let collection = collection.to_string();

        task::spawn_blocking(move || read_collection(&path, &collection))
            .await
            .map_err(map_join_error)?
    }

    /// Replace the collection's entire stored contents.
    ///
    /// Write failures surface as `ShopfrontError::Storage` instead of being
    /// logged and swallowed; swallowing persistence failures leaves callers
    /// believing data was saved when it was not.
    async fn write(&self, collection: &str, records: &[Value]) -> Result<()> {
        let path = self.collection_path(collection)?;
        let records = records.to_vec();

        task::spawn_blocking(move || write_collection(&path, &records))
            .await
            .map_err(map_join_error)?
    }
}
