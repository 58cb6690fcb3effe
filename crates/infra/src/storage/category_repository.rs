//! JSON-backed category repository.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use shopfront_core::{CategoryRepository, CollectionStore};
use shopfront_domain::constants::COLLECTION_CATEGORIES;
use shopfront_domain::{Category, Result};
use tracing::warn;

/// `CategoryRepository` implementation over the raw collection store.
///
/// Read-only: nothing in this codebase mutates the categories collection.
pub struct JsonCategoryRepository {
    store: Arc<dyn CollectionStore>,
}

impl JsonCategoryRepository {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }
}

fn decode(value: Value) -> Category {
    serde_json::from_value(value).unwrap_or_else(|err| {
        warn!(error = %err, "Unreadable category record, substituting defaults");
        Category::default()
    })
}

#[async_trait]
impl CategoryRepository for JsonCategoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let records = self.store.read(COLLECTION_CATEGORIES).await?;
        Ok(records.into_iter().map(decode).collect())
    }
}
