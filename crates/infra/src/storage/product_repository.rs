//! JSON-backed product repository.

use std::sync::Arc;

use async_trait::async_trait;
use shopfront_core::{CollectionStore, ProductRepository};
use shopfront_domain::constants::COLLECTION_PRODUCTS;
use shopfront_domain::{Product, Result, ShopfrontError};
use serde_json::Value;
use tracing::warn;

use super::record_id;
use crate::errors::InfraError;

/// `ProductRepository` implementation over the raw collection store.
pub struct JsonProductRepository {
    store: Arc<dyn CollectionStore>,
}

impl JsonProductRepository {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }
}

fn decode(value: Value) -> Product {
    serde_json::from_value(value).unwrap_or_else(|err| {
        warn!(error = %err, "Unreadable product record, substituting defaults");
        Product::default()
    })
}

#[async_trait]
impl ProductRepository for JsonProductRepository {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let records = self.store.read(COLLECTION_PRODUCTS).await?;
        Ok(records.into_iter().map(decode).collect())
    }

    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let products = self.list_products().await?;
        Ok(products.into_iter().find(|product| product.id == id))
    }

    async fn insert_product(&self, product: &Product) -> Result<()> {
        let mut records = self.store.read(COLLECTION_PRODUCTS).await?;
        records.push(serde_json::to_value(product).map_err(InfraError::from)?);
        self.store.write(COLLECTION_PRODUCTS, &records).await
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        let mut records = self.store.read(COLLECTION_PRODUCTS).await?;

        let slot = records
            .iter_mut()
            .find(|record| record_id(record).as_deref() == Some(product.id.as_str()))
            .ok_or_else(|| ShopfrontError::NotFound(format!("product {}", product.id)))?;
        *slot = serde_json::to_value(product).map_err(InfraError::from)?;

        self.store.write(COLLECTION_PRODUCTS, &records).await
    }

    async fn delete_product(&self, id: &str) -> Result<()> {
        let mut records = self.store.read(COLLECTION_PRODUCTS).await?;

        let before = records.len();
        records.retain(|record| record_id(record).as_deref() != Some(id));
        if records.len() == before {
            return Err(ShopfrontError::NotFound(format!("product {id}")));
        }

        self.store.write(COLLECTION_PRODUCTS, &records).await
    }
}
