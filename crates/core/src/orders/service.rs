//! Order service - checkout and order administration logic

use std::sync::Arc;

use chrono::Utc;
use shopfront_domain::constants::{INITIAL_ORDER_STATUS, ORDER_NUMBER_PREFIX};
use shopfront_domain::{Order, OrderItem, Result, ShopfrontError};
use tracing::info;
use uuid::Uuid;

use super::ports::OrderRepository;

/// Order service used by checkout and the admin order screens.
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
}

impl OrderService {
    /// Create a new order service
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    /// All orders, in stored order
    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        self.orders.list_orders().await
    }

    /// Fetch a single order
    pub async fn get_order(&self, id: &str) -> Result<Order> {
        self.orders
            .get_order(id)
            .await?
            .ok_or_else(|| ShopfrontError::NotFound(format!("order {id}")))
    }

    /// Place a new order from checkout.
    ///
    /// Assigns a fresh id and order number, stamps the creation time and the
    /// initial status, and computes the total from the line items.
    pub async fn place_order(
        &self,
        customer_name: Option<String>,
        items: Vec<OrderItem>,
    ) -> Result<Order> {
        if items.is_empty() {
            return Err(ShopfrontError::InvalidInput("order has no items".into()));
        }

        let id = Uuid::new_v4();
        let order = Order {
            id: id.to_string(),
            order_number: order_number_for(&id),
            customer_name: customer_name.filter(|name| !name.trim().is_empty()),
            status: INITIAL_ORDER_STATUS.to_string(),
            total: items.iter().map(OrderItem::line_total).sum(),
            created_at: Utc::now(),
            items,
        };

        self.orders.insert_order(&order).await?;
        info!(order_id = %order.id, order_number = %order.order_number, "Order placed");
        Ok(order)
    }

    /// Change the status label of an existing order
    pub async fn update_status(&self, id: &str, status: &str) -> Result<()> {
        if status.trim().is_empty() {
            return Err(ShopfrontError::InvalidInput("order status cannot be empty".into()));
        }
        self.orders.update_status(id, status).await
    }
}

/// Derive a short human-facing order number from the order id.
fn order_number_for(id: &Uuid) -> String {
    let short = id.simple().to_string();
    format!("{}-{}", ORDER_NUMBER_PREFIX, &short[..8].to_ascii_uppercase())
}
