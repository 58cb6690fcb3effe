//! JSON-backed order repository.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use shopfront_core::{CollectionStore, OrderRepository};
use shopfront_domain::constants::COLLECTION_ORDERS;
use shopfront_domain::{Order, Result, ShopfrontError};
use tracing::warn;

use super::record_id;
use crate::errors::InfraError;

/// `OrderRepository` implementation over the raw collection store.
///
/// Reads decode leniently: a record that cannot be decoded at all still
/// occupies its slot as a default order, so counts always match the raw
/// collection cardinality. Mutations work on the raw records, so fields this
/// schema does not know about survive a read-modify-write cycle.
pub struct JsonOrderRepository {
    store: Arc<dyn CollectionStore>,
}

impl JsonOrderRepository {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }
}

fn decode(value: Value) -> Order {
    serde_json::from_value(value).unwrap_or_else(|err| {
        warn!(error = %err, "Unreadable order record, substituting defaults");
        Order::default()
    })
}

#[async_trait]
impl OrderRepository for JsonOrderRepository {
    async fn list_orders(&self) -> Result<Vec<Order>> {
        let records = self.store.read(COLLECTION_ORDERS).await?;
        Ok(records.into_iter().map(decode).collect())
    }

    async fn get_order(&self, id: &str) -> Result<Option<Order>> {
        let orders = self.list_orders().await?;
        Ok(orders.into_iter().find(|order| order.id == id))
    }

    async fn insert_order(&self, order: &Order) -> Result<()> {
        let mut records = self.store.read(COLLECTION_ORDERS).await?;
        records.push(serde_json::to_value(order).map_err(InfraError::from)?);
        self.store.write(COLLECTION_ORDERS, &records).await
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<()> {
        let mut records = self.store.read(COLLECTION_ORDERS).await?;

        let slot = records
            .iter_mut()
            .find(|record| record_id(record).as_deref() == Some(id))
            .ok_or_else(|| ShopfrontError::NotFound(format!("order {id}")))?;
        slot["status"] = Value::String(status.to_string());

        self.store.write(COLLECTION_ORDERS, &records).await
    }
}
