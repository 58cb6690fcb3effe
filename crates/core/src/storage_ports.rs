//! Collection storage port.
//!
//! The data store adapter presents a whole-collection read/write contract:
//! a collection is loaded and persisted as one unit, addressed by name.
//! There is no row-level access, locking or versioning; concurrent writers
//! to the same collection race and the last write wins.

use async_trait::async_trait;
use serde_json::Value;
use shopfront_domain::Result;

/// Port for whole-collection JSON storage.
///
/// Implementations must guarantee that:
/// - reading a collection that has never been written yields an empty
///   sequence (and materializes the empty collection, so the first read is
///   idempotent);
/// - unparseable stored content degrades to an empty sequence rather than an
///   error, so callers must treat "empty" as a possibly-degraded result;
/// - a write replaces the entire stored collection atomically, so a
///   concurrent reader never observes a half-written file.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Read the full contents of a named collection, in stored order.
    async fn read(&self, collection: &str) -> Result<Vec<Value>>;

    /// Replace the entire stored contents of a named collection.
    async fn write(&self, collection: &str, records: &[Value]) -> Result<()>;
}
