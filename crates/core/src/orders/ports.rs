//! Repository port for the orders collection.

use async_trait::async_trait;
use shopfront_domain::{Order, Result};

/// Port for the `orders` collection.
///
/// Like the catalog ports, mutations are whole-collection read-modify-write
/// underneath and last-writer-wins under concurrency.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// All orders, in stored order.
    async fn list_orders(&self) -> Result<Vec<Order>>;

    /// Look up an order by id.
    async fn get_order(&self, id: &str) -> Result<Option<Order>>;

    /// Append an order to the collection.
    async fn insert_order(&self, order: &Order) -> Result<()>;

    /// Overwrite the status label of an existing order.
    ///
    /// Returns `ShopfrontError::NotFound` when no order has that id.
    async fn update_status(&self, id: &str, status: &str) -> Result<()>;
}
